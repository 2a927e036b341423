use anyhow::{Context, Result};
use reqwest::header::USER_AGENT;
use reqwest::Url;
use serde_json::Value as JsonValue;

/// Default identification sent on every outbound call
const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Reverse geocoding is always requested at country/state granularity, in English.
pub const GEOCODE_ZOOM: &str = "5";
pub const GEOCODE_LANGUAGE: &str = "en";

/// Shareable HTTP client for relaying requests to the upstream APIs
///
/// Wraps a single `reqwest::Client` so every handler reuses the same
/// connection pool. Cloning is cheap.
#[derive(Clone)]
pub struct UpstreamClient {
    inner: reqwest::Client,
}

impl UpstreamClient {
    pub fn new() -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(CLIENT_USER_AGENT)
            .build()
            .context("Failed to build upstream HTTP client")?;

        Ok(Self { inner })
    }

    /// GET `url` and decode the body as JSON
    ///
    /// The upstream status code is not inspected: an error page that happens to
    /// be JSON is relayed like any other payload, anything else fails to decode.
    /// `user_agent` overrides the client's default identification for this call.
    pub async fn fetch_json(&self, url: Url, user_agent: Option<&str>) -> Result<JsonValue> {
        let mut request = self.inner.get(url.clone());
        if let Some(agent) = user_agent {
            request = request.header(USER_AGENT, agent);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        response
            .json::<JsonValue>()
            .await
            .with_context(|| format!("invalid JSON from {} (status {})", url, status))
    }
}

/// Append every inbound `(key, value)` pair to `base`, in order.
///
/// Repeated keys stay repeated. An empty list leaves `base` untouched (no
/// dangling `?`).
pub fn team_history_url(base: &Url, params: &[(String, String)]) -> Url {
    let mut url = base.clone();
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    url
}

/// Build the reverse geocode lookup for `lat`/`lon`, passed through as given.
pub fn reverse_geocode_url(base: &Url, lat: &str, lon: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .append_pair("format", "json")
        .append_pair("lat", lat)
        .append_pair("lon", lon)
        .append_pair("zoom", GEOCODE_ZOOM)
        .append_pair("accept-language", GEOCODE_LANGUAGE);
    url
}
