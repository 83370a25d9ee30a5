use std::collections::HashMap;

use serde_json::Value;

use crate::store::{DocumentStore, StoreError};

/// In-memory [`DocumentStore`] used by the test suites: collections are
/// seeded up front and read back with the same equality-filter semantics as
/// the real store.
#[derive(Default, Clone)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<(String, Value)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn insert(&mut self, collection: &str, id: &str, document: Value) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push((id.to_string(), document));
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: Value,
    ) -> Result<Vec<Value>, StoreError> {
        let documents = match self.collections.get(collection) {
            Some(documents) => documents,
            None => return Ok(Vec::new()),
        };
        Ok(documents
            .iter()
            .filter(|(_, document)| document.get(field) == Some(&value))
            .map(|(_, document)| document.clone())
            .collect())
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|documents| {
                documents
                    .iter()
                    .find(|(document_id, _)| document_id == id)
            })
            .map(|(_, document)| document.clone()))
    }
}
