pub mod cache;
pub mod firestore;
pub mod memory;

use serde_json::Value;

/// Failures at the document-store boundary. Upstream failures are not
/// retried here; they propagate to the request layer.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("document store request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("failed to decode document: {0}")]
    Decode(String),
    #[error("document not found: {0}")]
    NotFound(String),
}

impl StoreError {
    pub fn decode(err: impl ToString) -> Self {
        StoreError::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

/// Read-only document store collaborator. Only equality-filtered reads are
/// ever issued; documents come back as plain JSON objects.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: Value,
    ) -> Result<Vec<Value>, StoreError>;

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;
}
