mod page_regions;
mod views;

pub use page_regions::PageRegions;
pub use views::{Notice, PropertyView, View};

/// Named slots a page may or may not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Preview,
    Full,
    Results,
    NewsletterStatus,
}

impl Region {
    /// DOM id of the element holding this region.
    pub fn element_id(self) -> &'static str {
        match self {
            Region::Preview => "featured-listings",
            Region::Full => "all-listings",
            Region::Results => "results-container",
            Region::NewsletterStatus => "newsletter-msg",
        }
    }
}

/// Sink the loader and the search write into. Rendering into a region the
/// page does not have is a no-op.
pub trait Renderer {
    fn has_region(&self, region: Region) -> bool;

    fn render(&mut self, region: Region, views: &[View]);
}
