mod firestore;
mod memory;
mod store_error;

use serde_json::{Map, Value};

pub use firestore::FirestoreStore;
pub use memory::MemoryStore;
pub use store_error::StoreError;

/// One document as the store hands it back: its id and its raw fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

/// Read side of a remote document store.
///
/// Implementations return every document in the collection, in the order
/// the store reports them.
pub trait DocumentStore: Send + Sync {
    fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Short name used in logs.
    fn source_name(&self) -> &'static str;
}
