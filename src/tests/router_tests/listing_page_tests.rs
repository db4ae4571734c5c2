use crate::listings::testing::FailingStore;
use crate::render::Notice;
use crate::store::MemoryStore;
use crate::tests::utils::{count, fixture_app, get, app_with_store};
use std::sync::Arc;

#[test]
fn home_preview_shows_first_six_listings() {
    let app = fixture_app();

    let (status, body) = get(&app, "/");

    assert_eq!(status, 200);
    assert_eq!(count(&body, "class=\"property-card\""), 6);
    assert!(body.contains("data-id=\"6\""));
    assert!(!body.contains("data-id=\"7\""));
    assert_eq!(app.cache.len(), 7);
}

#[test]
fn listings_page_shows_everything_in_order() {
    let app = fixture_app();

    let (status, body) = get(&app, "/listings");

    assert_eq!(status, 200);
    assert_eq!(count(&body, "class=\"property-card\""), 7);
    let first = body.find("Lake View").unwrap();
    let last = body.find("Cedar Lodge").unwrap();
    assert!(first < last);
}

#[test]
fn empty_collection_shows_no_listings_notice() {
    let app = app_with_store(Arc::new(MemoryStore::new()));

    let (status, body) = get(&app, "/listings");

    assert_eq!(status, 200);
    assert_eq!(count(&body, Notice::NoListingsYet.message()), 1);
    assert_eq!(count(&body, "class=\"property-card\""), 0);
    assert!(app.cache.is_empty());
}

#[test]
fn store_failure_still_serves_page_with_notice() {
    let app = app_with_store(Arc::new(FailingStore));

    let (status, body) = get(&app, "/");

    assert_eq!(status, 200);
    assert!(body.contains(Notice::UnableToLoad.message()));
    assert!(body.contains("id=\"search\""));
}

#[test]
fn unknown_path_is_not_found() {
    let app = fixture_app();

    let (status, body) = get(&app, "/nope");

    assert_eq!(status, 404);
    assert!(body.contains("Not Found"));
}
