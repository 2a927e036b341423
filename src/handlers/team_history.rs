use crate::error::{ApiError, ErrorResponse};
use crate::handlers::relay::relay;
use crate::routes;
use crate::state::AppState;
use crate::upstream::team_history_url;
use axum::{extract::Query, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// GET /api/proxy handler - Team history lookup
///
/// Every inbound query parameter is appended to the team statistics endpoint
/// in arrival order, repeated keys included, and the upstream JSON is relayed
/// as-is.
#[utoipa::path(
    get,
    path = routes::TEAM_HISTORY,
    responses(
        (status = 200, description = "Upstream team statistics, relayed verbatim", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "proxy"
)]
pub async fn team_history_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let url = team_history_url(&state.config.team_history_url, &params);
    relay(&state, routes::TEAM_HISTORY, url, None).await
}
