use crate::config::{AppConfig, StoreSource};
use crate::listings::{ListingCache, ListingLoader, SearchService};
use crate::store::{DocumentStore, FirestoreStore, MemoryStore, StoreError};
use std::sync::Arc;
use tracing::{info, warn};

/// Everything a request handler needs, built once at startup.
pub struct AppState {
    pub cache: ListingCache,
    pub loader: ListingLoader,
    pub search: SearchService,
    pub contact_phone: String,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        let store = build_store(config)?;
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: &AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        info!(
            source = store.source_name(),
            collection = %config.collection,
            "Listing store ready"
        );

        Self {
            cache: ListingCache::new(),
            loader: ListingLoader::new(store, &config.collection, &config.contact_phone),
            search: SearchService::new(config.search_latency, &config.contact_phone),
            contact_phone: config.contact_phone.clone(),
        }
    }
}

fn build_store(config: &AppConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    match &config.store {
        StoreSource::Firestore {
            project_id,
            api_key,
            base_url,
        } => {
            let mut store = FirestoreStore::new(project_id.clone(), api_key.clone())?;
            if let Some(url) = base_url {
                store = store.with_base_url(url.as_str());
            }
            Ok(Arc::new(store))
        }
        StoreSource::Fixture(path) => Ok(Arc::new(MemoryStore::from_fixture(
            path,
            &config.collection,
        )?)),
        StoreSource::Empty => {
            warn!("No listing store configured; set FIRESTORE_PROJECT_ID or ESTATE_FIXTURE_PATH");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
