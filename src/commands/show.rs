use crate::commands::{CmdOutput, INSTANCE_ID_MISSING, NO_INSTANCE_FOUND};
use crate::error::Result;
use crate::model::{Kind, Record};
use crate::registry::Registry;

/// Print the string form of one record.
pub fn run(registry: &Registry, kind: Kind, id: Option<&str>) -> Result<CmdOutput> {
    let Some(id) = id else {
        return Ok(CmdOutput::line(INSTANCE_ID_MISSING));
    };
    let key = Record::composite_key(kind, id);
    match registry.get(&key) {
        Some(record) => Ok(CmdOutput::line(record.to_string())),
        None => Ok(CmdOutput::line(NO_INSTANCE_FOUND)),
    }
}
