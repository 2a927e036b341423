use crate::error::{ApiError, ErrorResponse};
use crate::handlers::relay::relay;
use crate::models::ReverseGeocodeQuery;
use crate::routes;
use crate::state::AppState;
use crate::upstream::reverse_geocode_url;
use axum::{extract::Query, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// GET /api/reverse-geocode handler - Place name for a coordinate
///
/// `lat` and `lon` are not validated; a missing one is sent as an empty value
/// and whatever the geocoder makes of it is surfaced to the caller. Repeated
/// keys never reject the request; the first value wins. The geocoder
/// refuses anonymous clients, so the configured identifying User-Agent is sent.
#[utoipa::path(
    get,
    path = routes::REVERSE_GEOCODE,
    params(ReverseGeocodeQuery),
    responses(
        (status = 200, description = "Upstream geocoding result, relayed verbatim", body = serde_json::Value),
        (status = 500, description = "Upstream call failed", body = ErrorResponse)
    ),
    tag = "proxy"
)]
pub async fn reverse_geocode_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<(StatusCode, Json<JsonValue>), ApiError> {
    let query = ReverseGeocodeQuery::from_pairs(&params);
    let lat = query.lat.as_deref().unwrap_or_default();
    let lon = query.lon.as_deref().unwrap_or_default();
    let url = reverse_geocode_url(&state.config.reverse_geocode_url, lat, lon);

    relay(
        &state,
        routes::REVERSE_GEOCODE,
        url,
        Some(state.config.geocode_user_agent.as_str()),
    )
    .await
}
