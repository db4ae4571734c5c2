// src/domain/search.rs

use crate::domain::property::Property;

/// Free-text criteria from the search form, trimmed and lowercased on the
/// way in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    property_type: String,
    location: String,
    price: String,
}

impl SearchCriteria {
    pub fn new(property_type: &str, location: &str, price: &str) -> Self {
        Self {
            property_type: normalize(property_type),
            location: normalize(location),
            price: normalize(price),
        }
    }

    pub fn property_type(&self) -> &str {
        &self.property_type
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Collected with the form but not used for matching yet.
    pub fn price(&self) -> &str {
        &self.price
    }

    /// The type text also matches titles: visitors often type a property
    /// name into the type box.
    pub fn matches(&self, property: &Property) -> bool {
        let type_match = self.property_type.is_empty()
            || contains_folded(&property.property_type, &self.property_type)
            || contains_folded(&property.title, &self.property_type);

        let location_match =
            self.location.is_empty() || contains_folded(&property.location, &self.location);

        type_match && location_match
    }
}

/// Returns the matching properties in their original order.
pub fn filter_properties<'a>(
    properties: &'a [Property],
    criteria: &SearchCriteria,
) -> Vec<&'a Property> {
    properties.iter().filter(|p| criteria.matches(p)).collect()
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
