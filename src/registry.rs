//! # Entity registry
//!
//! The [`Registry`] is the sole in-memory source of truth for live records,
//! keyed by composite key (`Kind.Identifier`). The backing file is a derived
//! snapshot: every mutating verb rewrites it wholesale through [`Registry::persist`],
//! and it is read exactly once at startup through [`Registry::open`].
//!
//! A missing backing file hydrates an empty registry; a file that exists but
//! does not parse is a fatal startup error. Entries whose discriminator names
//! no known kind are skipped during reload.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::model::{Kind, Record, CLASS_KEY};

pub struct Registry {
    objects: BTreeMap<String, Record>,
    path: PathBuf,
}

impl Registry {
    /// Construct a registry over `path` and hydrate it from the file if one
    /// exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut registry = Self {
            objects: BTreeMap::new(),
            path: path.into(),
        };
        registry.reload()?;
        Ok(registry)
    }

    /// Live records in composite-key order.
    pub fn all(&self) -> impl Iterator<Item = (&String, &Record)> {
        self.objects.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.objects.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Record> {
        self.objects.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Insert or overwrite by composite key.
    pub fn register(&mut self, record: Record) {
        self.objects.insert(record.key(), record);
    }

    pub fn remove(&mut self, key: &str) -> Option<Record> {
        self.objects.remove(key)
    }

    pub fn count_of(&self, kind: Kind) -> usize {
        self.objects.values().filter(|r| r.kind == kind).count()
    }

    /// Serialize every record and rewrite the backing file entirely.
    pub fn persist(&self) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.objects)?;
        fs::write(&self.path, text)?;
        debug!(
            records = self.objects.len(),
            path = %self.path.display(),
            "registry persisted"
        );
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        let entries: BTreeMap<String, Value> = serde_json::from_str(&text)?;
        for (key, entry) in entries {
            let known = entry
                .get(CLASS_KEY)
                .and_then(Value::as_str)
                .and_then(Kind::parse)
                .is_some();
            if !known {
                debug!(%key, "skipping entry with unknown discriminator");
                continue;
            }
            let record: Record = serde_json::from_value(entry)?;
            self.objects.insert(key, record);
        }
        debug!(
            records = self.objects.len(),
            path = %self.path.display(),
            "registry hydrated"
        );
        Ok(())
    }
}
