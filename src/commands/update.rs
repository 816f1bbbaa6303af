use serde_json::Value;

use crate::commands::{
    CmdOutput, ATTRIBUTE_NAME_MISSING, INSTANCE_ID_MISSING, NO_INSTANCE_FOUND, VALUE_MISSING,
};
use crate::error::Result;
use crate::model::{Kind, Record};
use crate::registry::Registry;

/// Set one attribute on one record and persist.
///
/// Diagnostic precedence: instance id missing, then no instance found, then
/// attribute name missing, then value missing. An update naming a protected
/// attribute is accepted as a complete no-op: nothing stored, nothing
/// persisted, no diagnostic.
pub fn run(
    registry: &mut Registry,
    kind: Kind,
    id: Option<&str>,
    attr: Option<&str>,
    value: Option<Value>,
) -> Result<CmdOutput> {
    let Some(id) = id else {
        return Ok(CmdOutput::line(INSTANCE_ID_MISSING));
    };
    let key = Record::composite_key(kind, id);
    let Some(record) = registry.get_mut(&key) else {
        return Ok(CmdOutput::line(NO_INSTANCE_FOUND));
    };
    let Some(attr) = attr else {
        return Ok(CmdOutput::line(ATTRIBUTE_NAME_MISSING));
    };
    let Some(value) = value else {
        return Ok(CmdOutput::line(VALUE_MISSING));
    };

    if record.set(attr, value) {
        registry.persist()?;
    }
    Ok(CmdOutput::none())
}
