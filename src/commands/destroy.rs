use crate::commands::{CmdOutput, INSTANCE_ID_MISSING, NO_INSTANCE_FOUND};
use crate::error::Result;
use crate::model::{Kind, Record};
use crate::registry::Registry;

/// Remove one record and persist. No output on success.
pub fn run(registry: &mut Registry, kind: Kind, id: Option<&str>) -> Result<CmdOutput> {
    let Some(id) = id else {
        return Ok(CmdOutput::line(INSTANCE_ID_MISSING));
    };
    let key = Record::composite_key(kind, id);
    if registry.remove(&key).is_none() {
        return Ok(CmdOutput::line(NO_INSTANCE_FOUND));
    }
    registry.persist()?;
    Ok(CmdOutput::none())
}
