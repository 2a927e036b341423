use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "cors-relay API",
        version = "0.1.0",
        description = "Static file host with same-origin relays to third-party JSON APIs"
    ),
    paths(
        handlers::health::health_handler,
        handlers::team_history::team_history_handler,
        handlers::iss_position::iss_position_handler,
        handlers::iss_crew::iss_crew_handler,
        handlers::reverse_geocode::reverse_geocode_handler
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "proxy", description = "Upstream relay operations")
    )
)]
pub struct ApiDoc;
