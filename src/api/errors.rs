use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::id::IdError;
use crate::domain::repositories::StoreError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Translates an identifier format failure for a named path/body field
    ///
    /// Missing ids read "<Field> is required", malformed ids
    /// "Invalid <field>".
    pub fn invalid_id(err: IdError, field: &str) -> Self {
        match err {
            IdError::Missing => {
                let mut message = field.to_string();
                if let Some(first) = message.get_mut(..1) {
                    first.make_ascii_uppercase();
                }
                Self::bad_request(format!("{} is required", message))
            }
            IdError::Malformed => Self::bad_request(format!("Invalid {}", field)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": "error",
            "message": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::internal_server_error(format!("Database error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_message_capitalizes_field() {
        let err = ApiError::invalid_id(IdError::Missing, "channel id");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Channel id is required");
    }

    #[test]
    fn malformed_id_message() {
        let err = ApiError::invalid_id(IdError::Malformed, "channel id");
        assert_eq!(err.message, "Invalid channel id");
    }

    #[test]
    fn store_error_maps_to_500() {
        let err = ApiError::from(StoreError::Backend("boom".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
