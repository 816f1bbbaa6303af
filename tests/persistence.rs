use kardex::interp::Interpreter;
use kardex::model::{Kind, Record};
use kardex::registry::Registry;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn round_trip_preserves_every_kind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("file.json");
    let mut registry = Registry::open(&path).unwrap();

    let mut keys = Vec::new();
    for kind in Kind::ALL {
        let record = Record::new(kind);
        keys.push(record.key());
        registry.register(record);
    }
    registry.persist().unwrap();

    let reopened = Registry::open(&path).unwrap();
    assert_eq!(reopened.len(), Kind::ALL.len());
    for key in &keys {
        let original = registry.get(key).unwrap();
        let restored = reopened.get(key).unwrap();
        assert_eq!(restored.kind, original.kind);
        assert_eq!(restored.id, original.id);
        assert_eq!(restored.created_at, original.created_at);
        assert_eq!(restored.updated_at, original.updated_at);
        assert_eq!(restored.fields, original.fields);
    }
}

#[test]
fn cast_values_survive_reload_typed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("file.json");
    let mut registry = Registry::open(&path).unwrap();

    let mut interp = Interpreter::new(&mut registry);
    let id = interp.execute("create Place").unwrap().lines.remove(0);
    interp
        .execute(&format!("update Place {} max_guest 4", id))
        .unwrap();
    interp
        .execute(&format!("update Place {} latitude 37.77", id))
        .unwrap();
    interp
        .execute(&format!("update Place {} name \"The Shack\"", id))
        .unwrap();

    let reopened = Registry::open(&path).unwrap();
    let record = reopened.get(&format!("Place.{}", id)).unwrap();
    assert_eq!(record.fields.get("max_guest"), Some(&json!(4)));
    assert_eq!(record.fields.get("latitude"), Some(&json!(37.77)));
    assert_eq!(record.fields.get("name"), Some(&json!("The Shack")));
}

#[test]
fn identifiers_stay_unique_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("file.json");

    let mut seen = std::collections::HashSet::new();
    for _ in 0..3 {
        let mut registry = Registry::open(&path).unwrap();
        let mut interp = Interpreter::new(&mut registry);
        for _ in 0..5 {
            let id = interp.execute("create User").unwrap().lines.remove(0);
            assert!(seen.insert(id));
        }
    }

    let final_registry = Registry::open(&path).unwrap();
    assert_eq!(final_registry.count_of(Kind::User), 15);
}

#[test]
fn destroy_rewrites_the_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("file.json");
    let mut registry = Registry::open(&path).unwrap();

    let mut interp = Interpreter::new(&mut registry);
    let keep = interp.execute("create State").unwrap().lines.remove(0);
    let gone = interp.execute("create State").unwrap().lines.remove(0);
    interp
        .execute(&format!("destroy State {}", gone))
        .unwrap();

    let reopened = Registry::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
    assert!(reopened.contains(&format!("State.{}", keep)));
    assert!(!reopened.contains(&format!("State.{}", gone)));
}
