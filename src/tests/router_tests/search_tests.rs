use crate::listings::{IDLE_LABEL, PENDING_LABEL};
use crate::render::Notice;
use crate::tests::utils::{count, fixture_app, get, get_htmx};

#[test]
fn villa_search_renders_one_card_for_lake_view() {
    let app = fixture_app();
    get(&app, "/");

    let (status, body) = get_htmx(&app, "/search?type=villa&location=goa&price=");

    assert_eq!(status, 200);
    assert_eq!(count(&body, "class=\"results-card\""), 1);
    assert!(body.contains("data-id=\"1\""));
    assert!(body.contains("href=\"/property?id=1\""));
    assert!(body.contains("https://wa.me/919876543210?text="));
}

#[test]
fn type_text_matches_titles_too() {
    let app = fixture_app();
    get(&app, "/listings");

    let (_, body) = get_htmx(&app, "/search?type=OCEAN+&location=");

    assert_eq!(count(&body, "class=\"results-card\""), 1);
    assert!(body.contains("data-id=\"2\""));
}

#[test]
fn empty_criteria_return_all_cached_listings() {
    let app = fixture_app();
    get(&app, "/");

    let (_, body) = get_htmx(&app, "/search?type=&location=&price=%245M");

    assert_eq!(count(&body, "class=\"results-card\""), 7);
}

#[test]
fn no_match_renders_single_notice() {
    let app = fixture_app();
    get(&app, "/");

    let (status, body) = get_htmx(&app, "/search?type=castle");

    assert_eq!(status, 200);
    assert_eq!(count(&body, Notice::NoResults.message()), 1);
    assert_eq!(count(&body, "class=\"results-card\""), 0);
}

#[test]
fn search_before_any_load_finds_nothing() {
    let app = fixture_app();

    let (_, body) = get_htmx(&app, "/search?type=villa");

    assert!(body.contains(Notice::NoResults.message()));
}

#[test]
fn response_swaps_button_back_to_idle() {
    let app = fixture_app();

    let (_, body) = get_htmx(&app, "/search");

    assert!(body.contains("id=\"search-btn\""));
    assert!(body.contains("hx-swap-oob=\"true\""));
    assert!(body.contains(IDLE_LABEL));
    assert!(!body.contains("disabled"));
    // Only as the loading indicator, never as the label.
    assert_eq!(count(&body, PENDING_LABEL), 1);
}

#[test]
fn plain_form_submit_gets_full_results_page() {
    let app = fixture_app();
    get(&app, "/");

    let (status, body) = get(&app, "/search?type=villa&location=goa&price=");

    assert_eq!(status, 200);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert_eq!(count(&body, "class=\"results-card\""), 1);
    assert!(body.contains("data-id=\"1\""));
    assert!(!body.contains("hx-swap-oob"));
}

#[test]
fn home_search_form_falls_back_to_get_search() {
    let app = fixture_app();

    let (_, body) = get(&app, "/");

    assert!(body.contains("action=\"/search\" method=\"get\""));
    assert!(body.contains("hx-get=\"/search\""));
}
