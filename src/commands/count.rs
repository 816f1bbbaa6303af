use crate::commands::CmdOutput;
use crate::error::Result;
use crate::model::Kind;
use crate::registry::Registry;

/// Print how many live records have the given kind.
pub fn run(registry: &Registry, kind: Kind) -> Result<CmdOutput> {
    Ok(CmdOutput::line(registry.count_of(kind).to_string()))
}
