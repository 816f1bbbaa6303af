//! # Command interpreter
//!
//! One state, one line at a time: each input line is classified as a
//! built-in verb, a dotted call, or unknown syntax, normalized, and
//! dispatched to the command layer. The interpreter owns no I/O — it turns a
//! line into a [`Step`] of output lines plus a quit flag, and the binary
//! decides where those lines go. Only storage failures escape as errors.

pub mod dotted;
pub mod value;

use crate::commands::{
    self, CmdOutput, CLASS_DOESNT_EXIST, CLASS_NAME_MISSING, INSTANCE_ID_MISSING,
};
use crate::error::Result;
use crate::model::Kind;
use crate::registry::Registry;

use dotted::UpdateArgs;
use value::cast_token;

const HELP: &str = "\
Documented commands:
  create <Kind>                        create a record, print its id
  show <Kind> <id>                     print one record
  destroy <Kind> <id>                  delete one record
  all [<Kind>]                         list records, optionally by kind
  update <Kind> <id> <attr> <value>    set one attribute
  quit                                 end the session

Dotted forms:
  <Kind>.all()  <Kind>.count()  <Kind>.show(<id>)  <Kind>.destroy(<id>)
  <Kind>.update(<id>, <attr>, <value>)  <Kind>.update(<id>, {<dict>})

Kinds: Base, User, State, City, Amenity, Place, Review";

/// Result of interpreting one line.
#[derive(Debug, Default)]
pub struct Step {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Step {
    fn none() -> Self {
        Self::default()
    }

    fn quit() -> Self {
        Self {
            lines: Vec::new(),
            quit: true,
        }
    }

    fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            quit: false,
        }
    }
}

impl From<CmdOutput> for Step {
    fn from(out: CmdOutput) -> Self {
        Self {
            lines: out.lines,
            quit: false,
        }
    }
}

pub struct Interpreter<'a> {
    registry: &'a mut Registry,
}

impl<'a> Interpreter<'a> {
    pub fn new(registry: &'a mut Registry) -> Self {
        Self { registry }
    }

    /// Process one input line to completion.
    pub fn execute(&mut self, line: &str) -> Result<Step> {
        let input = line.trim();
        if input.is_empty() {
            return Ok(Step::none());
        }
        let (verb, rest) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (input, ""),
        };
        match verb {
            "quit" => Ok(Step::quit()),
            "help" => Ok(Step::line(HELP)),
            "create" => self.create(rest),
            "show" => self.show(rest),
            "destroy" => self.destroy(rest),
            "all" => self.all(rest),
            "update" => self.update(rest),
            _ => self.dotted_call(input),
        }
    }

    // The whole remainder of the line is the kind name, so trailing junk
    // fails the kind lookup rather than being ignored.
    fn create(&mut self, rest: &str) -> Result<Step> {
        match resolve_kind(rest) {
            Err(diag) => Ok(Step::line(diag)),
            Ok(kind) => Ok(commands::create::run(self.registry, kind)?.into()),
        }
    }

    fn show(&mut self, rest: &str) -> Result<Step> {
        let mut tokens = rest.split_whitespace();
        match resolve_kind(tokens.next().unwrap_or_default()) {
            Err(diag) => Ok(Step::line(diag)),
            Ok(kind) => Ok(commands::show::run(self.registry, kind, tokens.next())?.into()),
        }
    }

    fn destroy(&mut self, rest: &str) -> Result<Step> {
        let mut tokens = rest.split_whitespace();
        match resolve_kind(tokens.next().unwrap_or_default()) {
            Err(diag) => Ok(Step::line(diag)),
            Ok(kind) => Ok(commands::destroy::run(self.registry, kind, tokens.next())?.into()),
        }
    }

    fn all(&mut self, rest: &str) -> Result<Step> {
        match rest.split_whitespace().next() {
            None => Ok(commands::all::run(self.registry, None)?.into()),
            Some(token) => match Kind::parse(token) {
                Some(kind) => Ok(commands::all::run(self.registry, Some(kind))?.into()),
                None => Ok(Step::line(CLASS_DOESNT_EXIST)),
            },
        }
    }

    fn update(&mut self, rest: &str) -> Result<Step> {
        let tokens: Vec<&str> = rest.split_whitespace().collect();
        match resolve_kind(tokens.first().copied().unwrap_or_default()) {
            Err(diag) => Ok(Step::line(diag)),
            Ok(kind) => {
                let id = tokens.get(1).copied();
                let attr = tokens.get(2).copied();
                let val = tokens.get(3).map(|t| cast_token(t));
                Ok(commands::update::run(self.registry, kind, id, attr, val)?.into())
            }
        }
    }

    fn dotted_call(&mut self, input: &str) -> Result<Step> {
        let Some(call) = dotted::parse_call(input) else {
            return Ok(Step::line(unknown_syntax(input)));
        };
        let Some(kind) = Kind::parse(call.kind_name) else {
            return Ok(Step::line(CLASS_DOESNT_EXIST));
        };
        match call.verb {
            "all" => Ok(commands::all::run(self.registry, Some(kind))?.into()),
            "count" => Ok(commands::count::run(self.registry, kind)?.into()),
            "show" => {
                let id = dotted::parse_instance_arg(call.args);
                Ok(commands::show::run(self.registry, kind, id.as_deref())?.into())
            }
            "destroy" => {
                let id = dotted::parse_instance_arg(call.args);
                Ok(commands::destroy::run(self.registry, kind, id.as_deref())?.into())
            }
            "update" => self.dotted_update(kind, call.args),
            _ => Ok(Step::line(unknown_syntax(input))),
        }
    }

    fn dotted_update(&mut self, kind: Kind, args: &str) -> Result<Step> {
        match dotted::parse_update_args(args) {
            None => Ok(Step::line(INSTANCE_ID_MISSING)),
            Some(UpdateArgs::Pair { id, attr, value }) => Ok(commands::update::run(
                self.registry,
                kind,
                Some(&id),
                attr.as_deref(),
                value,
            )?
            .into()),
            Some(UpdateArgs::Dict { id, entries }) => {
                // One independent table-update per key, each persisted and
                // each emitting its own diagnostics.
                let mut out = CmdOutput::none();
                for (attr, val) in entries {
                    out.extend(commands::update::run(
                        self.registry,
                        kind,
                        Some(&id),
                        Some(&attr),
                        Some(val),
                    )?);
                }
                Ok(out.into())
            }
        }
    }
}

fn resolve_kind(token: &str) -> std::result::Result<Kind, &'static str> {
    if token.is_empty() {
        return Err(CLASS_NAME_MISSING);
    }
    Kind::parse(token).ok_or(CLASS_DOESNT_EXIST)
}

fn unknown_syntax(line: &str) -> String {
    format!("*** Unknown syntax: {}", line)
}
