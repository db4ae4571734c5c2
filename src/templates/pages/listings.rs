use crate::render::Region;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn listings_page(full: Markup) -> Markup {
    desktop_layout(
        "All Listings",
        html! {
            main class="container" {
                h1 { "All Listings" }
                div id=(Region::Full.element_id()) class="property-grid" {
                    (full)
                }
            }
        },
    )
}
