use crate::config::AppConfig;
use crate::router::handle;
use crate::state::AppState;
use crate::store::{Document, DocumentStore, MemoryStore};
use crate::templates::html_error_response;
use astra::{Body, Request};
use http::Method;
use serde_json::{json, Value};
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

/// Defaults with the search pacing switched off.
pub fn test_config() -> AppConfig {
    AppConfig {
        search_latency: Duration::ZERO,
        contact_phone: "+91 98765 43210".into(),
        ..AppConfig::default()
    }
}

fn doc(id: &str, fields: Value) -> Document {
    Document {
        id: id.to_string(),
        fields: fields.as_object().cloned().unwrap_or_default(),
    }
}

/// Seven listings, so the preview cut-off is visible.
pub fn fixture_documents() -> Vec<Document> {
    vec![
        doc("1", json!({ "title": "Lake View", "type": "Villa", "location": "Goa", "price": "$2M" })),
        doc(
            "2",
            json!({
                "title": "Ocean Breeze Villa",
                "type": "Penthouse",
                "location": "Mumbai",
                "price": "$5M",
                "imageUrl": "/images/gen2.png",
                "description": "Sea-facing duplex with a private deck."
            }),
        ),
        doc("3", json!({ "title": "Old Fort House", "type": "Heritage Manor", "location": "Jaipur", "price": "$3M" })),
        doc("4", json!({ "title": "Green Acres", "type": "Farmhouse", "location": "Goa", "price": "$1M" })),
        doc("5", json!({ "title": "Skyline One", "type": "Penthouse", "location": "Delhi", "price": "$4M" })),
        doc("6", json!({ "title": "Palm Court", "type": "Villa", "location": "Kochi", "price": "$2.5M" })),
        doc("7", json!({ "title": "Cedar Lodge", "type": "Farmhouse", "location": "Shimla" })),
    ]
}

pub fn app_with_store(store: Arc<dyn DocumentStore>) -> AppState {
    AppState::with_store(&test_config(), store)
}

pub fn fixture_app() -> AppState {
    app_with_store(Arc::new(
        MemoryStore::new().with_collection("properties", fixture_documents()),
    ))
}

pub fn get(app: &AppState, uri: &str) -> (u16, String) {
    let req = http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req)
}

/// Same as `get`, sent the way htmx sends it.
pub fn get_htmx(app: &AppState, uri: &str) -> (u16, String) {
    let req = http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();
    send(app, req)
}

pub fn post_form(app: &AppState, uri: &str, body: &str) -> (u16, String) {
    let req = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req)
}

/// Runs the request the way the server does, errors turned into pages.
fn send(app: &AppState, req: Request) -> (u16, String) {
    let mut resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    };

    let status = resp.status().as_u16();
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();

    (status, String::from_utf8(body_bytes).unwrap())
}

pub fn get_with_headers(app: &AppState, uri: &str) -> (u16, Vec<(String, String)>) {
    let req = http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    };

    let headers = resp
        .headers()
        .iter()
        .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    (resp.status().as_u16(), headers)
}

pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
