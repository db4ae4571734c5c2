use crate::templates::layouts::desktop::HTMX_SRC;
use crate::tests::utils::{fixture_app, get, get_with_headers};

#[test]
fn stylesheet_is_served() {
    let app = fixture_app();

    let (status, body) = get(&app, "/static/style.css");
    assert_eq!(status, 200);
    assert!(body.contains(".htmx-indicator"));

    let (_, headers) = get_with_headers(&app, "/static/style.css");
    assert!(headers
        .iter()
        .any(|(k, v)| k == "content-type" && v.starts_with("text/css")));
}

#[test]
fn layout_loads_pinned_htmx_and_served_stylesheet() {
    let app = fixture_app();

    let (_, body) = get(&app, "/listings");

    assert!(HTMX_SRC.contains("htmx.org@1.9.12"));
    assert!(body.contains(&format!("src=\"{HTMX_SRC}\"")));
    assert!(body.contains("href=\"/static/style.css\""));
    assert!(!body.contains("/static/htmx.js"));
}

#[test]
fn unknown_static_file_is_not_found() {
    let app = fixture_app();

    let (status, _) = get(&app, "/static/missing.js");

    assert_eq!(status, 404);
}
