//! Shared utilities for the solver client and puzzle sources.

use crate::config::ClientConfig;

/// User-Agent string for HTTP requests.
pub const USER_AGENT: &str = concat!("websudoku/", env!("CARGO_PKG_VERSION"));

/// Create the connection-pooled client shared by every request.
///
/// The returned client is cheap to clone; clones share the same pool.
pub fn http_client(config: &ClientConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.timeout())
        .build()
}

/// Join a base URL and an endpoint name with exactly one slash between them.
pub fn endpoint_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Decode the handful of HTML entities that appear in attribute values.
pub fn decode_entities(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
