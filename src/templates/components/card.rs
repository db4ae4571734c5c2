use crate::render::PropertyView;
use maud::{html, Markup};

/// Card used in the preview and full listing grids.
pub fn listing_card(p: &PropertyView) -> Markup {
    html! {
        article class="property-card" data-id=(p.id) {
            img src=(p.image_url) alt=(p.title) class="property-image" loading="lazy";
            div class="property-info" {
                span class="property-type" { (p.property_type) }
                h3 { (p.title) }
                p class="property-location" { (p.location) }
                span class="property-price" { (p.price) }
                p class="property-description" { (p.description) }
                (property_actions(p))
            }
        }
    }
}

/// Card used in the search results container.
pub fn result_card(p: &PropertyView) -> Markup {
    html! {
        div class="results-card" data-id=(p.id) {
            img src=(p.image_url) alt=(p.property_type) class="result-image";
            div class="result-info" {
                h3 { (p.title) }
                p { (p.location) }
                span class="result-price" { (p.price) }
                div class="result-features" {
                    span { (p.property_type) }
                }
                (property_actions(p))
            }
        }
    }
}

pub fn property_actions(p: &PropertyView) -> Markup {
    html! {
        div class="result-actions" {
            a class="btn-small btn-view" href=(p.detail_href) { "View Details" }
            a class="btn-small btn-contact" href=(p.contact_href) target="_blank" rel="noopener" { "Enquire" }
        }
    }
}
