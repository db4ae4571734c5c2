// src/domain/property.rs

use serde_json::{Map, Value};

/// Image shown when a listing has no `imageUrl` of its own.
pub const DEFAULT_IMAGE: &str = "/images/hero.png";

/// A property record as the rest of the site sees it.
///
/// Every field except `id` may be missing in the store. Missing values are
/// resolved here, once, when the record is loaded, so templates and the
/// search filter never deal with absent data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub property_type: String,
    pub location: String,
    /// Display string ("$2M", "₹12 Cr"). Never parsed.
    pub price: String,
    pub image_url: String,
    pub description: Option<String>,
}

impl Property {
    /// Builds a property from a store document. The store-assigned `id`
    /// always wins over an `id` key inside the field map.
    pub fn from_fields(id: &str, fields: &Map<String, Value>) -> Self {
        let text = |key: &str| fields.get(key).map(display_value).unwrap_or_default();

        let description = Some(text("description")).filter(|d| !d.is_empty());

        Self {
            id: id.to_string(),
            title: text("title"),
            property_type: text("type"),
            location: text("location"),
            price: text("price"),
            image_url: text("imageUrl"),
            description,
        }
    }

    pub fn image_or_default(&self) -> &str {
        if self.image_url.is_empty() {
            DEFAULT_IMAGE
        } else {
            &self.image_url
        }
    }
}

/// Scalars keep their display form; anything structured degrades to "".
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}
