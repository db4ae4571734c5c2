mod cache;
mod loader;
mod search;

pub use cache::ListingCache;
pub use loader::{ListingLoader, LoadOutcome};
pub use search::{SearchControl, SearchService, PENDING_LABEL};
#[cfg(test)]
pub use search::IDLE_LABEL;
