//! # Kardex
//!
//! An interactive console for typed records kept in a single flat JSON
//! file. Kardex is a library with a thin CLI client: everything from the
//! interpreter inward takes regular Rust arguments and returns regular Rust
//! types, and only the binary touches stdin/stdout and exit codes.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs + args.rs)                                │
//! │  - clap startup surface, prompt, read/eval/print loop      │
//! │  - The ONLY place that knows about stdout/stderr           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Interpreter (interp/)                                     │
//! │  - Classifies each line: built-in verb, dotted call, or    │
//! │    unknown syntax; normalizes arguments                    │
//! │  - Returns output lines, never prints                      │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                  │
//! │  - One module per verb, pure logic over the registry       │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Registry + model (registry.rs, model.rs)                  │
//! │  - In-memory map keyed by Kind.Identifier, rewritten to    │
//! │    the backing file on every mutation                      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two input grammars share the command layer: space-delimited verbs
//! (`update User <id> email "a@b.com"`) and dotted calls
//! (`User.update(<id>, {"email": "a@b.com"})`). User mistakes are stdout
//! diagnostics and never end the session; the only fatal condition is a
//! storage failure.

pub mod commands;
pub mod error;
pub mod interp;
pub mod model;
pub mod registry;
