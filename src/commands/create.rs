use crate::commands::CmdOutput;
use crate::error::Result;
use crate::model::{Kind, Record};
use crate::registry::Registry;

/// Construct a fresh record, persist, and print its identifier.
pub fn run(registry: &mut Registry, kind: Kind) -> Result<CmdOutput> {
    let record = Record::new(kind);
    let id = record.id.to_string();
    registry.register(record);
    registry.persist()?;
    Ok(CmdOutput::line(id))
}
