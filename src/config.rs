//! API endpoint configuration.
//!
//! The backend base URL is fixed at build time: `TASKBOARD_API_URL` in the
//! build environment wins (and is expected to already carry its version
//! segment), otherwise the production deployment is used and the `/v1`
//! prefix is appended to every path.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_BASE_URL: &str = "https://taskboard-api-production.up.railway.app";
const VERSION_PREFIX: &str = "/v1";

/// Base URL and version prefix every request URL is built from.
///
/// Constructed explicitly and handed to [`crate::net::client::ApiClient`]
/// so tests and alternate deployments can point elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    prefix: &'static str,
}

impl ApiConfig {
    /// Configuration for the build environment's backend.
    #[must_use]
    pub fn from_env() -> Self {
        match option_env!("TASKBOARD_API_URL") {
            // An override already includes its version segment.
            Some(base) => Self::new(base, ""),
            None => Self::new(DEFAULT_BASE_URL, VERSION_PREFIX),
        }
    }

    /// Configuration for an explicit base URL and version prefix.
    #[must_use]
    pub fn new(base_url: &str, prefix: &'static str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            prefix,
        }
    }

    /// Absolute URL for a relative endpoint path such as `/tasks`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.prefix, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
