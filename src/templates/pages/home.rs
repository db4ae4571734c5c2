// templates/pages/home.rs

use crate::listings::SearchControl;
use crate::render::Region;
use crate::templates::{
    components::{newsletter_form, search_form},
    desktop_layout,
};
use maud::{html, Markup};

/// `preview` is whatever the loader rendered into the preview region.
pub fn home_page(preview: Markup) -> Markup {
    desktop_layout(
        "Home",
        html! {
            header class="hero" {
                h1 { "Extraordinary Homes, Quietly Offered" }
                p { "Villas, penthouses and heritage manors, hand-picked." }
                a id="discover-btn" href="#listings" class="btn-primary" { "Discover Portfolio" }
            }

            (search_form(&SearchControl::idle(), html! {}))

            div class="glitch-separator" {}

            section id="listings" class="listings" {
                h2 { "Featured Estates" }
                div id=(Region::Preview.element_id()) class="property-grid" {
                    (preview)
                }
                a href="/listings" class="btn-secondary" { "View all listings" }
            }

            (newsletter_form())
        },
    )
}
