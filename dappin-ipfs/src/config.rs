//! Daemon connection settings.

use serde::{Deserialize, Serialize};
use url::Url;

use dappin_core::constants::{DEFAULT_API_URL, ENV_API_URL, ENV_TIMEOUT_SECS};
use dappin_core::error::{DappinError, Result};

/// IPFS daemon configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Base URL of the RPC, e.g. "http://ipfs.dappnode:5001/api/v0/"
    pub api_url: String,
    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout_seconds: Option<u64>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            timeout_seconds: None,
        }
    }
}

impl DaemonConfig {
    /// Creates config for the daemon at `api_url`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    /// Sets a per-request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Loads `.env` if present, then reads `IPFS_API_URL` and `IPFS_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup(ENV_API_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());

        let timeout_seconds = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) if !raw.trim().is_empty() => Some(raw.trim().parse().map_err(|_| {
                DappinError::Config(format!("{} must be a number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw))
            })?),
            _ => None,
        };

        Ok(Self {
            api_url,
            timeout_seconds,
        })
    }

    /// Parses the base URL, adding the trailing slash `Url::join` needs.
    pub fn base_url(&self) -> Result<Url> {
        let raw = self.api_url.trim();
        let raw = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{}/", raw)
        };

        let url = Url::parse(&raw)
            .map_err(|e| DappinError::Config(format!("invalid API URL '{}': {}", self.api_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(DappinError::Config(format!(
                "unsupported API URL scheme '{}'",
                other
            ))),
        }
    }

    /// Resolves an endpoint path such as `pin/add` against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url()?;
        base.join(path)
            .map_err(|e| DappinError::Config(format!("invalid endpoint '{}': {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = DaemonConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_seconds, None);
        assert_eq!(
            config.endpoint("add").unwrap().as_str(),
            "http://ipfs.dappnode:5001/api/v0/add"
        );
    }

    #[test_case("http://127.0.0.1:5001/api/v0" ; "no trailing slash")]
    #[test_case("http://127.0.0.1:5001/api/v0/" ; "trailing slash")]
    #[test_case("  http://127.0.0.1:5001/api/v0/  " ; "padded")]
    fn test_endpoint_join(base: &str) {
        let config = DaemonConfig::new(base);
        assert_eq!(
            config.endpoint("pin/add").unwrap().as_str(),
            "http://127.0.0.1:5001/api/v0/pin/add"
        );
    }

    #[test_case("not a url" ; "garbage")]
    #[test_case("ftp://ipfs.dappnode/api/v0" ; "scheme")]
    fn test_invalid_base_url(base: &str) {
        let config = DaemonConfig::new(base);
        assert!(matches!(config.base_url(), Err(DappinError::Config(_))));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = DaemonConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DaemonConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = DaemonConfig::from_lookup(lookup(&[
            (ENV_API_URL, "http://localhost:5001/api/v0"),
            (ENV_TIMEOUT_SECS, "15"),
        ]))
        .unwrap();
        assert_eq!(config, DaemonConfig::new("http://localhost:5001/api/v0").with_timeout(15));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let result = DaemonConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert!(matches!(result, Err(DappinError::Config(_))));
    }
}
