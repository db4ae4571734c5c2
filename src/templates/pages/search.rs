use crate::listings::SearchControl;
use crate::templates::{components::search_form, desktop_layout};
use maud::{html, Markup};

/// Full page for searches submitted without htmx.
pub fn search_page(control: &SearchControl, results: Markup) -> Markup {
    desktop_layout(
        "Search",
        html! {
            (search_form(control, results))
        },
    )
}
