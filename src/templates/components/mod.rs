pub mod card;
pub mod error;
pub mod newsletter;
pub mod notice;
pub mod search_form;

pub use card::{listing_card, result_card};
pub use error::html_error_response;
pub use newsletter::{newsletter_form, newsletter_input, newsletter_status};
pub use notice::notice;
pub use search_form::{search_button, search_form};
