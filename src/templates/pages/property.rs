use crate::render::PropertyView;
use crate::templates::components::card::property_actions;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn property_page(p: &PropertyView) -> Markup {
    desktop_layout(
        &p.title,
        html! {
            main class="container property-detail" data-id=(p.id) {
                img src=(p.image_url) alt=(p.title) class="detail-image";
                div class="detail-info" {
                    span class="property-type" { (p.property_type) }
                    h1 { (p.title) }
                    p class="property-location" { (p.location) }
                    span class="property-price" { (p.price) }
                    p class="property-description" { (p.description) }
                    (property_actions(p))
                }
                p { a href="/listings" { "← Back to listings" } }
            }
        },
    )
}
