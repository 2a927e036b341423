pub mod health;
pub mod iss_crew;
pub mod iss_position;
mod relay;
pub mod reverse_geocode;
pub mod team_history;

pub use health::health_handler;
pub use iss_crew::iss_crew_handler;
pub use iss_position::iss_position_handler;
pub use reverse_geocode::reverse_geocode_handler;
pub use team_history::team_history_handler;
