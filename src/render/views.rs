use crate::domain::links::{contact_href, detail_href};
use crate::domain::{Property, SubscriptionStatus};

/// Everything a template needs to draw one property, links included.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyView {
    pub id: String,
    pub title: String,
    pub property_type: String,
    pub location: String,
    pub price: String,
    pub image_url: String,
    /// Empty when the property has no description.
    pub description: String,
    pub detail_href: String,
    pub contact_href: String,
}

impl PropertyView {
    pub fn new(property: &Property, contact_phone: &str) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            property_type: property.property_type.clone(),
            location: property.location.clone(),
            price: property.price.clone(),
            image_url: property.image_or_default().to_string(),
            description: property.description.clone().unwrap_or_default(),
            detail_href: detail_href(&property.id),
            contact_href: contact_href(contact_phone, &property.title, &property.location),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoListingsYet,
    UnableToLoad,
    NoResults,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::NoListingsYet => "No listings yet. New estates are on their way.",
            Notice::UnableToLoad => "Unable to load listings right now. Please try again later.",
            Notice::NoResults => {
                "No properties match your search. Try a different type or location."
            }
        }
    }
}

/// The closed set of things a region can show.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Listing(PropertyView),
    SearchResult(PropertyView),
    Notice(Notice),
    Newsletter(SubscriptionStatus),
}
