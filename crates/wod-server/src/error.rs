//! API errors and their JSON rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use wod_mechanics::MechError;

/// Errors a request can fail with. All of them are the caller's fault.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A query parameter is not a non-negative integer.
    #[error("invalid {name}: '{value}' is not a non-negative integer")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Raw value as received.
        value: String,
    },

    /// A query parameter is a whole number too large to hold.
    #[error("invalid {name}: '{value}' is too large")]
    ParameterTooLarge {
        /// Parameter name.
        name: &'static str,
        /// Raw value as received.
        value: String,
    },

    /// The parameters parsed but do not make a valid roll.
    #[error(transparent)]
    Mechanics(#[from] MechError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "rejected request");
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message() {
        let err = ApiError::InvalidParameter {
            name: "num_dice",
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid num_dice: 'abc' is not a non-negative integer"
        );
    }

    #[test]
    fn too_large_message() {
        let err = ApiError::ParameterTooLarge {
            name: "num_dice",
            value: "99999999999".to_string(),
        };
        assert_eq!(err.to_string(), "invalid num_dice: '99999999999' is too large");
    }

    #[test]
    fn mechanics_errors_pass_through() {
        let err = ApiError::from(MechError::InvalidDiceCount(0));
        assert_eq!(err.to_string(), "dice count must be at least 1, got 0");
    }

    #[test]
    fn renders_as_bad_request() {
        let response = ApiError::from(MechError::InvalidDiceCount(0)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
