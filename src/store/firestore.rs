// store/firestore.rs
use crate::store::{Document, DocumentStore, StoreError};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: u32 = 300;
const USER_AGENT: &str = concat!("estate-listings/", env!("CARGO_PKG_VERSION"));

/// Firestore over its REST API. Read-only.
pub struct FirestoreStore {
    client: Client,
    base_url: String,
    project_id: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    // Absent entirely when the collection is empty.
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl FirestoreStore {
    pub fn new(project_id: String, api_key: Option<String>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: FIRESTORE_BASE.to_string(),
            project_id,
            api_key,
        })
    }

    /// Points the store somewhere else, e.g. a local emulator.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, collection
        )
    }

    fn fetch_page(
        &self,
        url: &str,
        page_token: Option<&str>,
    ) -> Result<ListDocumentsResponse, StoreError> {
        let mut query: Vec<(&str, String)> = vec![("pageSize", PAGE_SIZE.to_string())];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }
        if let Some(key) = &self.api_key {
            query.push(("key", key.clone()));
        }

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ListDocumentsResponse>()
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

impl DocumentStore for FirestoreStore {
    fn list_documents(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let url = self.collection_url(collection);
        collect_pages(|page_token| {
            let page = self.fetch_page(&url, page_token)?;
            debug!(
                collection,
                count = page.documents.len(),
                "Fetched Firestore page"
            );
            Ok(page)
        })
    }

    fn source_name(&self) -> &'static str {
        "firestore"
    }
}

/// Follows `nextPageToken` until the store stops handing one out. A token
/// that comes back unchanged ends the walk instead of looping on it.
fn collect_pages<F>(mut fetch: F) -> Result<Vec<Document>, StoreError>
where
    F: FnMut(Option<&str>) -> Result<ListDocumentsResponse, StoreError>,
{
    let mut documents = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page = fetch(page_token.as_deref())?;
        documents.extend(page.documents.into_iter().map(decode_document));

        match page.next_page_token.filter(|t| !t.is_empty()) {
            Some(token) if page_token.as_deref() == Some(token.as_str()) => {
                warn!(%token, "Store repeated its page token, stopping");
                break;
            }
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    Ok(documents)
}

fn decode_document(doc: FirestoreDocument) -> Document {
    // name = projects/<p>/databases/(default)/documents/<collection>/<id>
    let id = doc.name.rsplit('/').next().unwrap_or_default().to_string();

    let fields = doc
        .fields
        .iter()
        .map(|(key, value)| (key.clone(), decode_value(value)))
        .collect();

    Document { id, fields }
}

/// Unwraps one typed Firestore value (`{"stringValue": "x"}`) into plain
/// JSON. Types the site never stores (maps, arrays, refs) become null.
fn decode_value(value: &Value) -> Value {
    let Some(typed) = value.as_object() else {
        return Value::Null;
    };

    if let Some(s) = typed.get("stringValue") {
        return s.clone();
    }
    // int64 travels as a string
    if let Some(Value::String(n)) = typed.get("integerValue") {
        return n
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(n.clone()));
    }
    if let Some(d) = typed.get("doubleValue") {
        return d.clone();
    }
    if let Some(b) = typed.get("booleanValue") {
        return b.clone();
    }
    if let Some(t) = typed.get("timestampValue") {
        return t.clone();
    }

    Value::Null
}
