use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Attribute names that `update` can never touch, in either grammar.
pub const PROTECTED_ATTRS: [&str; 3] = ["id", "created_at", "updated_at"];

/// JSON key carrying the kind discriminator in the persisted document.
pub const CLASS_KEY: &str = "__class__";

/// The closed set of record kinds.
///
/// The kind name is the dispatch token in both command grammars and the
/// persisted discriminator. Each kind differs only by its default attribute
/// set; behavior is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Base,
    User,
    State,
    City,
    Amenity,
    Place,
    Review,
}

impl Kind {
    pub const ALL: [Kind; 7] = [
        Kind::Base,
        Kind::User,
        Kind::State,
        Kind::City,
        Kind::Amenity,
        Kind::Place,
        Kind::Review,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Base => "Base",
            Kind::User => "User",
            Kind::State => "State",
            Kind::City => "City",
            Kind::Amenity => "Amenity",
            Kind::Place => "Place",
            Kind::Review => "Review",
        }
    }

    /// Resolve a kind name as it appears on the command line. Case-sensitive.
    pub fn parse(name: &str) -> Option<Kind> {
        Kind::ALL.iter().copied().find(|k| k.name() == name)
    }

    /// Attributes installed at creation, all defaulting to the empty string.
    pub fn default_fields(&self) -> &'static [&'static str] {
        match self {
            Kind::Base => &[],
            Kind::User => &["email", "password", "first_name", "last_name"],
            Kind::State => &["name"],
            Kind::City => &["state_id", "name"],
            Kind::Amenity => &["name"],
            Kind::Place => &[
                "city_id",
                "user_id",
                "name",
                "description",
                "number_rooms",
                "number_bathrooms",
                "max_guest",
                "price_by_night",
                "latitude",
                "longitude",
            ],
            Kind::Review => &["place_id", "user_id", "text"],
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single persisted entity instance.
///
/// `id` and `created_at` are fixed at creation; `updated_at` advances on
/// every stored mutation. Kind-specific attributes live in an open map so a
/// reload keeps fields the current schema knows nothing about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "__class__")]
    pub kind: Kind,
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(kind: Kind) -> Self {
        let now = Utc::now();
        let fields = kind
            .default_fields()
            .iter()
            .map(|name| (name.to_string(), Value::String(String::new())))
            .collect();
        Self {
            kind,
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            fields,
        }
    }

    /// Composite lookup key, `Kind.Identifier`.
    pub fn key(&self) -> String {
        Record::composite_key(self.kind, &self.id.to_string())
    }

    pub fn composite_key(kind: Kind, id: &str) -> String {
        format!("{}.{}", kind, id)
    }

    /// Store an attribute and advance `updated_at`.
    ///
    /// Protected attributes and the reserved discriminator key are ignored
    /// entirely; returns whether anything was stored so callers can skip the
    /// persist on a no-op.
    pub fn set(&mut self, attr: &str, value: Value) -> bool {
        if PROTECTED_ATTRS.contains(&attr) || attr == CLASS_KEY {
            return false;
        }
        self.fields.insert(attr.to_string(), value);
        self.updated_at = Utc::now();
        true
    }

    fn timestamp(ts: &DateTime<Utc>) -> Value {
        Value::String(ts.to_rfc3339_opts(SecondsFormat::Micros, true))
    }
}

impl fmt::Display for Record {
    /// `[Kind] (id) {attributes}` with identity, timestamps, and the kind
    /// fields as one JSON object in stable attribute-name order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut attrs = serde_json::Map::new();
        attrs.insert("id".to_string(), Value::String(self.id.to_string()));
        attrs.insert("created_at".to_string(), Record::timestamp(&self.created_at));
        attrs.insert("updated_at".to_string(), Record::timestamp(&self.updated_at));
        for (name, value) in &self.fields {
            attrs.insert(name.clone(), value.clone());
        }
        write!(f, "[{}] ({}) {}", self.kind, self.id, Value::Object(attrs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_records_get_unique_ids() {
        let a = Record::new(Kind::User);
        let b = Record::new(Kind::User);
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
    }

    #[test]
    fn default_fields_are_empty_strings() {
        let user = Record::new(Kind::User);
        assert_eq!(user.fields.get("email"), Some(&json!("")));
        assert_eq!(user.fields.get("last_name"), Some(&json!("")));
        assert_eq!(user.fields.len(), 4);

        let base = Record::new(Kind::Base);
        assert!(base.fields.is_empty());
    }

    #[test]
    fn set_stores_value_and_advances_updated_at() {
        let mut record = Record::new(Kind::User);
        let before = record.updated_at;
        assert!(record.set("email", json!("a@b.com")));
        assert_eq!(record.fields.get("email"), Some(&json!("a@b.com")));
        assert!(record.updated_at >= before);
    }

    #[test]
    fn set_ignores_protected_attributes() {
        let mut record = Record::new(Kind::State);
        let created = record.created_at;
        let updated = record.updated_at;
        assert!(!record.set("id", json!("forged")));
        assert!(!record.set("created_at", json!("2000-01-01T00:00:00Z")));
        assert!(!record.set("updated_at", json!("2000-01-01T00:00:00Z")));
        assert!(!record.set("__class__", json!("User")));
        assert_eq!(record.created_at, created);
        assert_eq!(record.updated_at, updated);
        assert!(!record.fields.contains_key("id"));
    }

    #[test]
    fn display_includes_kind_id_and_fields() {
        let record = Record::new(Kind::User);
        let shown = record.to_string();
        assert!(shown.starts_with(&format!("[User] ({})", record.id)));
        assert!(shown.contains("\"email\":\"\""));
        assert!(shown.contains("\"created_at\""));
    }

    #[test]
    fn serde_round_trip_preserves_unknown_fields() {
        let mut record = Record::new(Kind::City);
        record.set("population", json!(42));
        record.set("motto", json!("onward"));

        let text = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&text).unwrap();
        assert_eq!(back.kind, Kind::City);
        assert_eq!(back.id, record.id);
        assert_eq!(back.created_at, record.created_at);
        assert_eq!(back.fields, record.fields);
    }

    #[test]
    fn kind_parse_is_closed_and_case_sensitive() {
        assert_eq!(Kind::parse("User"), Some(Kind::User));
        assert_eq!(Kind::parse("user"), None);
        assert_eq!(Kind::parse("Widget"), None);
        assert_eq!(Kind::parse(""), None);
    }
}
