// store/memory.rs
use crate::store::{Document, DocumentStore, StoreError};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Documents held in process. Backs local development (seeded from a JSON
/// fixture) and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, collection: &str, documents: Vec<Document>) -> Self {
        self.collections.insert(collection.to_string(), documents);
        self
    }

    /// Reads `[{"id": "...", "title": "...", ...}, ...]`. Every entry needs
    /// an `id`; ids must be unique.
    pub fn from_fixture(path: &Path, collection: &str) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| StoreError::Fixture(format!("{}: {e}", path.display())))?;
        let documents = parse_fixture(&raw)?;
        Ok(Self::new().with_collection(collection, documents))
    }
}

fn parse_fixture(raw: &str) -> Result<Vec<Document>, StoreError> {
    let entries: Vec<Map<String, Value>> =
        serde_json::from_str(raw).map_err(|e| StoreError::Fixture(e.to_string()))?;

    let mut seen = std::collections::HashSet::new();
    let mut documents = Vec::with_capacity(entries.len());

    for (index, mut fields) in entries.into_iter().enumerate() {
        let id = match fields.remove("id") {
            Some(Value::String(s)) if !s.is_empty() => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(StoreError::Fixture(format!(
                    "entry {index} has no usable id"
                )))
            }
        };
        if !seen.insert(id.clone()) {
            return Err(StoreError::Fixture(format!("duplicate id {id}")));
        }
        documents.push(Document { id, fields });
    }

    Ok(documents)
}

impl DocumentStore for MemoryStore {
    fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        Ok(self.collections.get(collection).cloned().unwrap_or_default())
    }

    fn source_name(&self) -> &'static str {
        "memory"
    }
}
