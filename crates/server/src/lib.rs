use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

pub use server::{Caller, ServerState, router, run_with_listener};

mod server;
mod simulator;

/// Failures produced by the HTTP layer. The simulator itself never fails.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("missing or invalid bearer token")]
    Unauthorized,
    #[error(transparent)]
    Body(#[from] JsonRejection),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ServerError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServerError::Body(rejection) => rejection.status(),
        };
        let error = match self {
            ServerError::Body(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
