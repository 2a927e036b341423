use crate::config::Config;
use crate::upstream::UpstreamClient;
use anyhow::Result;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        Ok(AppState {
            upstream: UpstreamClient::new()?,
            config: Arc::new(config),
        })
    }
}
