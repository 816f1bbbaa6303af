use crate::commands::CmdOutput;
use crate::error::Result;
use crate::model::Kind;
use crate::registry::Registry;

/// String forms of every live record, optionally filtered by kind, one per
/// line in composite-key order.
pub fn run(registry: &Registry, kind: Option<Kind>) -> Result<CmdOutput> {
    let mut out = CmdOutput::none();
    for (_, record) in registry.all() {
        if kind.is_none_or(|k| record.kind == k) {
            out.push(record.to_string());
        }
    }
    Ok(out)
}
