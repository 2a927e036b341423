use crate::error::{ApiError, ErrorResponse};
use crate::handlers::relay::relay;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// GET /api/iss-position handler - Current ISS ground position
#[utoipa::path(
    get,
    path = routes::ISS_POSITION,
    responses(
        (status = 200, description = "Upstream position report, relayed verbatim", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "proxy"
)]
pub async fn iss_position_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let url = state.config.iss_position_url.clone();
    relay(&state, routes::ISS_POSITION, url, None).await
}
