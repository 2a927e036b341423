use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Assemble the full service: relay routes, health, API docs, and the static
/// root as fallback for every other path.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::TEAM_HISTORY, get(handlers::team_history_handler))
        .route(routes::ISS_POSITION, get(handlers::iss_position_handler))
        .route(routes::ISS_CREW, get(handlers::iss_crew_handler))
        .route(routes::REVERSE_GEOCODE, get(handlers::reverse_geocode_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
