pub mod asset;
pub mod html;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use asset::asset_response;
pub use html::html_response;
