use crate::domain::{filter_properties, SearchCriteria};
use crate::listings::ListingCache;
use crate::render::{Notice, PropertyView, Region, Renderer, View};
use std::thread;
use std::time::Duration;
use tracing::debug;

pub const IDLE_LABEL: &str = "Search Estates";
pub const PENDING_LABEL: &str = "Searching...";

/// State of the search button. Disabled while a search is pending, which
/// also keeps a visitor from stacking searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchControl {
    pending: bool,
}

impl SearchControl {
    pub fn idle() -> Self {
        Self { pending: false }
    }

    pub fn begin(&mut self) {
        self.pending = true;
    }

    pub fn finish(&mut self) {
        self.pending = false;
    }

    pub fn is_disabled(&self) -> bool {
        self.pending
    }

    pub fn label(&self) -> &'static str {
        if self.pending {
            PENDING_LABEL
        } else {
            IDLE_LABEL
        }
    }
}

/// Filters the cached listings and renders the results region.
pub struct SearchService {
    latency: Duration,
    contact_phone: String,
}

impl SearchService {
    /// `latency` is pure pacing: the filter itself is instant.
    pub fn new(latency: Duration, contact_phone: &str) -> Self {
        Self {
            latency,
            contact_phone: contact_phone.to_string(),
        }
    }

    /// Returns the number of matches rendered.
    pub fn run(
        &self,
        cache: &ListingCache,
        criteria: &SearchCriteria,
        control: &mut SearchControl,
        renderer: &mut dyn Renderer,
    ) -> usize {
        control.begin();

        // Runs on its own worker thread, other requests keep flowing.
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        let properties = cache.snapshot();
        let matches = filter_properties(&properties, criteria);

        if matches.is_empty() {
            renderer.render(Region::Results, &[View::Notice(Notice::NoResults)]);
        } else {
            let views: Vec<View> = matches
                .iter()
                .map(|p| View::SearchResult(PropertyView::new(p, &self.contact_phone)))
                .collect();
            renderer.render(Region::Results, &views);
        }

        control.finish();

        debug!(
            property_type = criteria.property_type(),
            location = criteria.location(),
            price = criteria.price(),
            matches = matches.len(),
            "Search complete"
        );

        matches.len()
    }
}
