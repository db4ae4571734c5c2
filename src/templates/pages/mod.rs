pub mod home;
pub mod listings;
pub mod property;
pub mod search;

pub use home::home_page;
pub use listings::listings_page;
pub use property::property_page;
pub use search::search_page;
