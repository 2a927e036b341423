use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Error type for the proxy endpoints
///
/// Every failure on the way to an upstream and back (connecting, sending,
/// reading, JSON decoding) collapses into a single variant. It is only turned
/// into a status/body pair at the handler boundary.
#[derive(Debug)]
pub enum ApiError {
    /// The outbound call or the decoding of its body failed
    UpstreamFailed(anyhow::Error),
}

impl ApiError {
    /// Full error chain, e.g. `request to http://... failed: error sending request`
    pub fn message(&self) -> String {
        match self {
            ApiError::UpstreamFailed(err) => format!("{:#}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::UpstreamFailed(err)
    }
}
