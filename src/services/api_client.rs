use std::time::Duration;

use reqwest::{header, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    error::{FestivoError, Result},
    types::QueryParams,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.getfestivo.com";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated GET + JSON decode against the Festivo API
#[derive(Clone)]
pub(crate) struct ApiTransport {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl ApiTransport {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub async fn get_json(&self, path: &str, params: &QueryParams) -> Result<Value> {
        let url = build_request_url(&self.base_url, path, params)?;
        debug!(path, params = params.len(), "GET {}", path);

        let mut request = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .timeout(self.timeout);

        if self.has_api_key() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", self.api_key));
        }

        let response = request.send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            warn!(path, status = status.as_u16(), "Festivo API request failed");
            return Err(FestivoError::Request { status });
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        debug!(path, bytes = body.len(), "decoded Festivo response");

        Ok(value)
    }
}

// Keeps the key out of debug output.
impl std::fmt::Debug for ApiTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiTransport")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_api_key", &self.has_api_key())
            .finish()
    }
}

/// `base_url + path`, then each parameter form-encoded in iteration order
pub(crate) fn build_request_url(base_url: &str, path: &str, params: &QueryParams) -> Result<Url> {
    let trimmed = base_url.trim_end_matches('/');
    let mut url = Url::parse(&format!("{}{}", trimmed, path))?;

    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params.iter() {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}
