//! Extractors and response wrappers shared by the route handlers

pub mod extract;
pub mod response;

pub use extract::{optional_id, require_id, ApiJson, ApiPath, ApiQuery};
pub use response::{Created, SuccessResponse};
