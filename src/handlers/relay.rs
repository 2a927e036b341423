use crate::error::ApiError;
use crate::state::AppState;
use axum::{http::StatusCode, Json};
use reqwest::Url;
use serde_json::Value as JsonValue;

/// Fetch `url` and hand the upstream JSON back unchanged, or a 500 on any failure
pub(crate) async fn relay(
    state: &AppState,
    route: &str,
    url: Url,
    user_agent: Option<&str>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    tracing::debug!("{} -> {}", route, url);

    match state.upstream.fetch_json(url, user_agent).await {
        Ok(body) => {
            tracing::info!("Relayed upstream response for {}", route);
            Ok((StatusCode::OK, Json(body)))
        }
        Err(e) => {
            let err = ApiError::from(e);
            tracing::error!("Upstream call for {} failed: {}", route, err.message());
            Err(err)
        }
    }
}
