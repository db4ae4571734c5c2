use crate::domain::Property;
use crate::listings::ListingCache;
use crate::render::{Notice, PropertyView, Region, Renderer, View};
use crate::store::DocumentStore;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Cards shown in the home page preview.
pub const PREVIEW_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page had nowhere to show listings; the store was not contacted.
    Skipped,
    Loaded(usize),
    Empty,
    Failed,
}

/// Pulls the whole collection from the store, refreshes the cache and
/// fills whichever listing regions the page has.
pub struct ListingLoader {
    store: Arc<dyn DocumentStore>,
    collection: String,
    contact_phone: String,
}

impl ListingLoader {
    pub fn new(store: Arc<dyn DocumentStore>, collection: &str, contact_phone: &str) -> Self {
        Self {
            store,
            collection: collection.to_string(),
            contact_phone: contact_phone.to_string(),
        }
    }

    /// Never fails: store errors turn into a notice and leave the cache as
    /// it was.
    pub fn load(&self, cache: &ListingCache, renderer: &mut dyn Renderer) -> LoadOutcome {
        if !renderer.has_region(Region::Preview) && !renderer.has_region(Region::Full) {
            debug!("No listing regions on page, skipping load");
            return LoadOutcome::Skipped;
        }

        let documents = match self.store.list_documents(&self.collection) {
            Ok(documents) => documents,
            Err(e) => {
                error!(
                    collection = %self.collection,
                    source = self.store.source_name(),
                    "Failed to load listings: {e}"
                );
                render_notice(renderer, Notice::UnableToLoad);
                return LoadOutcome::Failed;
            }
        };

        let properties: Vec<Property> = documents
            .iter()
            .map(|doc| Property::from_fields(&doc.id, &doc.fields))
            .collect();

        if properties.is_empty() {
            cache.replace(Vec::new());
            render_notice(renderer, Notice::NoListingsYet);
            return LoadOutcome::Empty;
        }

        let views: Vec<View> = properties
            .iter()
            .map(|p| View::Listing(PropertyView::new(p, &self.contact_phone)))
            .collect();

        renderer.render(Region::Preview, &views[..views.len().min(PREVIEW_LIMIT)]);
        renderer.render(Region::Full, &views);

        let count = properties.len();
        cache.replace(properties);
        info!(collection = %self.collection, count, "Listings loaded");

        LoadOutcome::Loaded(count)
    }
}

fn render_notice(renderer: &mut dyn Renderer, notice: Notice) {
    let views = [View::Notice(notice)];
    renderer.render(Region::Preview, &views);
    renderer.render(Region::Full, &views);
}
