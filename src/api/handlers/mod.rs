pub mod playlists;
pub mod subscriptions;

use crate::api::errors::ApiError;
use crate::domain::id::Id;

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

/// Validates a path/body identifier before any storage access
///
/// `field` names the parameter in the error message, e.g. "channel id".
fn parse_id(raw: &str, field: &str) -> Result<Id, ApiError> {
    Id::parse(raw).map_err(|e| ApiError::invalid_id(e, field))
}
