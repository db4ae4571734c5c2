use astra::Response;
use thiserror::Error;

/// Errors a request handler can end with. Each maps to an HTML error page.
///
/// Store failures are not here: listing loads degrade to a notice instead
/// of failing the request.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
