use crate::error::{ApiError, ErrorResponse};
use crate::handlers::relay::relay;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// GET /api/iss-crew handler - People currently in space
#[utoipa::path(
    get,
    path = routes::ISS_CREW,
    responses(
        (status = 200, description = "Upstream crew roster, relayed verbatim", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "proxy"
)]
pub async fn iss_crew_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let url = state.config.iss_crew_url.clone();
    relay(&state, routes::ISS_CREW, url, None).await
}
