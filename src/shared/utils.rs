//! Utility functions and helpers

use reqwest::Url;
use crate::shared::errors::ConnectionError;

/// Generate unique ID
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Check that an endpoint is an absolute http(s) URL
pub fn validate_endpoint_url(url: &str) -> Result<Url, ConnectionError> {
    let parsed = Url::parse(url).map_err(|e| ConnectionError::InvalidEndpoint {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ConnectionError::InvalidEndpoint {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
