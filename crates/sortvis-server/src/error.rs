//! Error types for sortvis-server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for sortvis-server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Server errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The engine rejected an intent.
    #[error(transparent)]
    Engine(#[from] sortvis_engine::Error),

    /// Server configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// Binding or serving failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        use sortvis_engine::Error as E;

        match self {
            Error::Engine(E::UnknownAlgorithm(_) | E::InvalidSize { .. }) => StatusCode::BAD_REQUEST,
            Error::Engine(E::NoAlgorithm | E::NoTrace) => StatusCode::CONFLICT,
            Error::Engine(E::SessionClosed) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Engine(E::Config(_)) | Error::Config(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_map_to_status() {
        let bad = Error::from(sortvis_engine::Error::InvalidSize { size: 0, max: 200 });
        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);

        let conflict = Error::from(sortvis_engine::Error::NoAlgorithm);
        assert_eq!(conflict.into_response().status(), StatusCode::CONFLICT);

        let closed = Error::from(sortvis_engine::Error::SessionClosed);
        assert_eq!(closed.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn engine_message_passes_through() {
        let err = Error::from(sortvis_engine::Error::UnknownAlgorithm("bogo".into()));
        assert_eq!(err.to_string(), "unknown algorithm: \"bogo\"");
    }
}
