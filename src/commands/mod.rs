//! Business logic for the console verbs.
//!
//! One module per verb, each exposing `run(...) -> Result<CmdOutput>`.
//! Commands never print: they return the lines to show, and the interpreter
//! (or a test) decides what to do with them. Only storage failures are
//! errors; every user-facing problem is a diagnostic line.

pub mod all;
pub mod count;
pub mod create;
pub mod destroy;
pub mod show;
pub mod update;

pub const CLASS_NAME_MISSING: &str = "** class name missing **";
pub const CLASS_DOESNT_EXIST: &str = "** class doesn't exist **";
pub const INSTANCE_ID_MISSING: &str = "** instance id missing **";
pub const NO_INSTANCE_FOUND: &str = "** no instance found **";
pub const ATTRIBUTE_NAME_MISSING: &str = "** attribute name missing **";
pub const VALUE_MISSING: &str = "** value missing **";

/// Printable outcome of one command invocation.
#[derive(Debug, Default, PartialEq)]
pub struct CmdOutput {
    pub lines: Vec<String>,
}

impl CmdOutput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend(&mut self, other: CmdOutput) {
        self.lines.extend(other.lines);
    }
}

#[cfg(test)]
pub(crate) fn test_registry(dir: &tempfile::TempDir) -> crate::registry::Registry {
    crate::registry::Registry::open(dir.path().join("file.json")).unwrap()
}
