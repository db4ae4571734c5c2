use crate::domain::{SearchCriteria, SubscriptionStatus};
use crate::errors::ServerError;
use crate::listings::{ListingCache, LoadOutcome, SearchControl};
use crate::render::{PageRegions, PropertyView, Region, Renderer, View};
use crate::responses::{asset_response, html_response};
use crate::responses::ResultResp;
use crate::state::AppState;
use crate::templates;
use crate::templates::components::{newsletter_input, search_button};
use astra::Request;
use maud::html;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, info};
use url::form_urlencoded;

const STYLESHEET: &str = include_str!("../static/style.css");

pub fn handle(mut req: Request, app: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(app),
        ("GET", "/listings") => listings(app),
        ("GET", "/search") => search(&req, app),
        ("GET", "/property") => property(&req, app),
        ("POST", "/newsletter") => newsletter(&mut req),
        ("GET", "/static/style.css") => asset_response(STYLESHEET, "text/css; charset=utf-8"),
        _ => Err(ServerError::NotFound),
    }
}

fn home(app: &AppState) -> ResultResp {
    let mut regions = PageRegions::with_regions(&[Region::Preview]);
    log_load("home", app.loader.load(&app.cache, &mut regions), &app.cache);

    html_response(templates::pages::home_page(regions.take(Region::Preview)))
}

fn listings(app: &AppState) -> ResultResp {
    let mut regions = PageRegions::with_regions(&[Region::Full]);
    log_load("listings", app.loader.load(&app.cache, &mut regions), &app.cache);

    html_response(templates::pages::listings_page(regions.take(Region::Full)))
}

fn log_load(page: &str, outcome: LoadOutcome, cache: &ListingCache) {
    match outcome {
        LoadOutcome::Loaded(count) => debug!(page, count, "Rendered listings"),
        other => debug!(page, outcome = ?other, cached = cache.len(), "No listings rendered"),
    }
}

/// htmx gets the results fragment plus the button swapped back to idle;
/// a plain form submit gets a whole page.
fn search(req: &Request, app: &AppState) -> ResultResp {
    let params = parse_query(req);
    let criteria = SearchCriteria::new(
        param(&params, "type"),
        param(&params, "location"),
        param(&params, "price"),
    );

    let mut regions = PageRegions::with_regions(&[Region::Results]);
    let mut control = SearchControl::idle();
    app.search
        .run(&app.cache, &criteria, &mut control, &mut regions);

    if !is_htmx(req) {
        return html_response(templates::pages::search_page(
            &control,
            regions.take(Region::Results),
        ));
    }

    html_response(html! {
        (regions.take(Region::Results))
        (search_button(&control, true))
    })
}

fn property(req: &Request, app: &AppState) -> ResultResp {
    let params = parse_query(req);
    let id = params
        .get("id")
        .filter(|id| !id.is_empty())
        .ok_or(ServerError::NotFound)?;

    if app.cache.is_empty() {
        debug!(%id, "Property lookup with no listings cached");
    }
    let property = app.cache.find(id).ok_or(ServerError::NotFound)?;
    let view = PropertyView::new(&property, &app.contact_phone);

    html_response(templates::pages::property_page(&view))
}

fn newsletter(req: &mut Request) -> ResultResp {
    let form = read_form(req)?;
    let status = SubscriptionStatus::from_input(param(&form, "email"));

    if let SubscriptionStatus::Subscribed { email } = &status {
        info!(%email, "Newsletter signup");
    }

    let mut regions = PageRegions::with_regions(&[Region::NewsletterStatus]);
    regions.render(Region::NewsletterStatus, &[View::Newsletter(status.clone())]);

    html_response(html! {
        (regions.take(Region::NewsletterStatus))
        (newsletter_input(status.input_after(), true))
    })
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .map(|v| v.as_bytes() == b"true")
        .unwrap_or(false)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(parse_pairs)
        .unwrap_or_default()
}

fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or("")
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;

    Ok(parse_pairs(&body))
}

// Later duplicates win, as browsers only send one of each here.
fn parse_pairs(raw: &str) -> HashMap<String, String> {
    form_urlencoded::parse(raw.as_bytes()).into_owned().collect()
}
