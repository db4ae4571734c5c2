use crate::render::{Region, Renderer, View};
use crate::templates::components::{listing_card, newsletter_status, notice, result_card};
use maud::{html, Markup};
use std::collections::HashMap;

/// Renderer backed by maud: each present region collects the markup of the
/// last views rendered into it.
#[derive(Default)]
pub struct PageRegions {
    present: Vec<Region>,
    rendered: HashMap<Region, Markup>,
}

impl PageRegions {
    pub fn with_regions(regions: &[Region]) -> Self {
        Self {
            present: regions.to_vec(),
            rendered: HashMap::new(),
        }
    }

    /// Takes the markup rendered into `region`, or empty markup.
    pub fn take(&mut self, region: Region) -> Markup {
        self.rendered.remove(&region).unwrap_or_else(|| html! {})
    }
}

impl Renderer for PageRegions {
    fn has_region(&self, region: Region) -> bool {
        self.present.contains(&region)
    }

    fn render(&mut self, region: Region, views: &[View]) {
        if !self.has_region(region) {
            return;
        }

        let markup = html! {
            @for view in views {
                (view_markup(view))
            }
        };
        self.rendered.insert(region, markup);
    }
}

fn view_markup(view: &View) -> Markup {
    match view {
        View::Listing(p) => listing_card(p),
        View::SearchResult(p) => result_card(p),
        View::Notice(n) => notice(*n),
        View::Newsletter(status) => newsletter_status(status),
    }
}
