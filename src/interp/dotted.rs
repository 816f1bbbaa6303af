//! The dotted-call grammar: `Kind.verb(args)`.
//!
//! Argument extraction is lenient: identifiers may be quoted to carry commas
//! or spaces, and a dict literal that fails to parse degrades to an empty
//! update rather than a diagnostic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::interp::value::cast_token;

static CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\.(\w+)\((.*)\)$").unwrap());
static QUOTED_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^["']([^"']+)["']\s*,?\s*$"#).unwrap());
static HEAD_AND_REST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^["']?([^,"']+)["']?\s*,\s*(.*)$"#).unwrap());

#[derive(Debug, PartialEq)]
pub struct DottedCall<'a> {
    pub kind_name: &'a str,
    pub verb: &'a str,
    pub args: &'a str,
}

/// Arguments of a dotted `update` call, either form.
#[derive(Debug, PartialEq)]
pub enum UpdateArgs {
    Pair {
        id: String,
        attr: Option<String>,
        value: Option<Value>,
    },
    Dict {
        id: String,
        entries: Map<String, Value>,
    },
}

/// Match a whole line against the call shape. Anything short of a full
/// match is unknown syntax.
pub fn parse_call(line: &str) -> Option<DottedCall<'_>> {
    let caps = CALL.captures(line)?;
    Some(DottedCall {
        kind_name: caps.get(1)?.as_str(),
        verb: caps.get(2)?.as_str(),
        args: caps.get(3)?.as_str(),
    })
}

/// Extract the identifier argument of `show`/`destroy`. A quoted identifier
/// may contain commas and spaces; otherwise the first comma-separated piece
/// wins.
pub fn parse_instance_arg(args: &str) -> Option<String> {
    let args = args.trim();
    if args.is_empty() {
        return None;
    }
    if let Some(caps) = QUOTED_ID.captures(args) {
        return Some(caps[1].to_string());
    }
    args.split(',')
        .map(str::trim)
        .find(|piece| !piece.is_empty())
        .map(str::to_string)
}

/// Split `update` arguments into an identifier plus either an attr/value
/// pair or a dict of attribute updates. `None` means no identifier could be
/// extracted (including the no-comma form `update(<id>)`).
pub fn parse_update_args(args: &str) -> Option<UpdateArgs> {
    let args = args.trim();
    if args.is_empty() {
        return None;
    }
    let caps = HEAD_AND_REST.captures(args)?;
    let id = caps[1].trim().to_string();
    let rest = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");

    if rest.is_empty() {
        return Some(UpdateArgs::Pair {
            id,
            attr: None,
            value: None,
        });
    }

    if rest.starts_with('{') && rest.ends_with('}') {
        // Single-quoted dict literals are accepted by swapping the quotes
        // before handing the text to serde_json. A literal that still fails
        // to parse degrades to zero updates.
        let normalized = rest.replace('\'', "\"");
        let entries = serde_json::from_str::<Map<String, Value>>(&normalized).unwrap_or_default();
        return Some(UpdateArgs::Dict { id, entries });
    }

    match HEAD_AND_REST.captures(rest) {
        Some(caps) => {
            let attr = caps[1].trim().to_string();
            let value = cast_token(&caps[2]);
            Some(UpdateArgs::Pair {
                id,
                attr: Some(attr),
                value: Some(value),
            })
        }
        None => Some(UpdateArgs::Pair {
            id,
            attr: None,
            value: None,
        }),
    }
}
