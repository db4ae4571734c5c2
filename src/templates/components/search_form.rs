use crate::listings::{SearchControl, PENDING_LABEL};
use crate::render::Region;
use maud::{html, Markup};

const PROPERTY_TYPES: &[&str] = &[
    "Ultra-Luxury Villas",
    "Sky Penthouses",
    "Heritage Manors",
    "Farmhouses",
];

const PRICE_BANDS: &[&str] = &["₹5 Cr - ₹10 Cr", "₹10 Cr - ₹25 Cr", "₹25 Cr - ₹50 Cr", "₹50 Cr+"];

/// `results` pre-fills the results container; empty on the home page.
pub fn search_form(control: &SearchControl, results: Markup) -> Markup {
    html! {
        section id="search" class="search-section" {
            h2 { "Find Your Estate" }
            form
                class="search-form"
                action="/search"
                method="get"
                hx-get="/search"
                hx-target=(format!("#{}", Region::Results.element_id()))
                hx-swap="innerHTML"
                hx-disabled-elt="#search-btn"
            {
                label class="sr-only" for="prop-type" { "Property type" }
                input id="prop-type" name="type" list="prop-type-options" placeholder="Villa, penthouse, or a name";
                datalist id="prop-type-options" {
                    @for t in PROPERTY_TYPES {
                        option value=(t) {}
                    }
                }

                label class="sr-only" for="prop-location" { "Location" }
                input id="prop-location" name="location" placeholder="Location";

                label class="sr-only" for="prop-price" { "Budget" }
                select id="prop-price" name="price" {
                    option value="" { "Any budget" }
                    @for band in PRICE_BANDS {
                        option value=(band) { (band) }
                    }
                }

                (search_button(control, false))
            }
            div id=(Region::Results.element_id()) class="results-container" {
                (results)
            }
        }
    }
}

/// `swap_oob` re-renders the button from a search response so it reverts
/// once the results are in.
pub fn search_button(control: &SearchControl, swap_oob: bool) -> Markup {
    html! {
        button
            id="search-btn"
            type="submit"
            class="btn-primary"
            disabled[control.is_disabled()]
            hx-swap-oob=[swap_oob.then_some("true")]
        {
            span class="btn-text" { (control.label()) }
            @if !control.is_disabled() {
                span class="htmx-indicator" aria-hidden="true" { (PENDING_LABEL) }
            }
        }
    }
}
