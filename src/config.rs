use std::env;
use anyhow::{Context, Result};
use reqwest::Url;

pub const DEFAULT_TEAM_HISTORY_URL: &str = "https://api.nhle.com/stats/rest/en/team/summary";
pub const DEFAULT_ISS_POSITION_URL: &str = "http://api.open-notify.org/iss-now.json";
pub const DEFAULT_ISS_CREW_URL: &str = "http://api.open-notify.org/astros.json";
pub const DEFAULT_REVERSE_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/reverse";
pub const DEFAULT_GEOCODE_USER_AGENT: &str = "cors-relay/0.1 (reverse geocode lookups)";

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub static_dir: String,
    pub team_history_url: Url,
    pub iss_position_url: Url,
    pub iss_crew_url: Url,
    pub reverse_geocode_url: Url,
    pub geocode_user_agent: String,
}

fn url_var(name: &str, default: &str) -> Result<Url> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).with_context(|| format!("{} must be an absolute URL, got '{}'", name, raw))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "public".to_string());

        let geocode_user_agent = env::var("GEOCODE_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_GEOCODE_USER_AGENT.to_string());

        Ok(Config {
            service_port,
            service_host,
            static_dir,
            team_history_url: url_var("TEAM_HISTORY_URL", DEFAULT_TEAM_HISTORY_URL)?,
            iss_position_url: url_var("ISS_POSITION_URL", DEFAULT_ISS_POSITION_URL)?,
            iss_crew_url: url_var("ISS_CREW_URL", DEFAULT_ISS_CREW_URL)?,
            reverse_geocode_url: url_var("REVERSE_GEOCODE_URL", DEFAULT_REVERSE_GEOCODE_URL)?,
            geocode_user_agent,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Static root: {}", self.static_dir);
        tracing::info!("  Team history upstream: {}", self.team_history_url);
        tracing::info!("  ISS position upstream: {}", self.iss_position_url);
        tracing::info!("  ISS crew upstream: {}", self.iss_crew_url);
        tracing::info!("  Reverse geocode upstream: {}", self.reverse_geocode_url);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
