use crate::domain::Property;
use parking_lot::RwLock;
use std::sync::Arc;

/// In-memory copy of the last successful listing load.
///
/// Cloning shares the same cache. Writers swap in a whole new list, so a
/// reader only ever sees a complete load.
#[derive(Clone, Default)]
pub struct ListingCache {
    inner: Arc<RwLock<Arc<Vec<Property>>>>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, properties: Vec<Property>) {
        *self.inner.write() = Arc::new(properties);
    }

    pub fn snapshot(&self) -> Arc<Vec<Property>> {
        self.inner.read().clone()
    }

    pub fn find(&self, id: &str) -> Option<Property> {
        self.snapshot().iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
