// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const TEAM_HISTORY: &str = "/api/proxy";
pub const ISS_POSITION: &str = "/api/iss-position";
pub const ISS_CREW: &str = "/api/iss-crew";
pub const REVERSE_GEOCODE: &str = "/api/reverse-geocode";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
