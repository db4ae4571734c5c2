pub mod links;
pub mod newsletter;
pub mod property;
pub mod search;

pub use newsletter::SubscriptionStatus;
pub use property::Property;
pub use search::{filter_properties, SearchCriteria};
