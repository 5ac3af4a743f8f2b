//! Error types for dappin.
//!
//! Every failure aborts the run. Nothing is retried here; callers decide what
//! to do with [`DappinError::is_recoverable`].

use std::path::PathBuf;

use thiserror::Error;

use crate::constants::MAX_ERROR_BODY_LEN;

/// Result type alias using `DappinError`.
pub type Result<T> = std::result::Result<T, DappinError>;

/// Main error type for all dappin operations.
#[derive(Debug, Error)]
pub enum DappinError {
    // ═══════════════════════════════════════════════════════════════════════════
    // NETWORK ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Daemon unreachable, or the transport failed mid-request.
    #[error("Connection to IPFS daemon failed: {0}")]
    Connection(String),

    /// Daemon answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Http {
        /// Endpoint path, e.g. `pin/add`
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Response body, truncated
        body: String,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // PROTOCOL ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Response body could not be parsed or lacks the content identifier.
    #[error("Malformed daemon response: {0}")]
    MalformedResponse(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // LOCAL ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Upload source missing or unreadable.
    #[error("Cannot read upload file {}: {source}", path.display())]
    LocalFile {
        /// Path that was opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid base URL or client setup.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DappinError {
    /// Builds an [`DappinError::Http`], truncating the body to a readable size.
    pub fn http(endpoint: impl Into<String>, status: u16, body: impl AsRef<str>) -> Self {
        let body = body.as_ref().trim();
        let mut end = body.len().min(MAX_ERROR_BODY_LEN);
        while !body.is_char_boundary(end) {
            end -= 1;
        }

        DappinError::Http {
            endpoint: endpoint.into(),
            status,
            body: body[..end].to_string(),
        }
    }

    /// Returns true if trying again later could succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            DappinError::Connection(_) => true,
            DappinError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns true if the daemon produced this error (as opposed to local setup).
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            DappinError::Connection(_)
                | DappinError::Http { .. }
                | DappinError::MalformedResponse(_)
        )
    }
}

impl From<serde_json::Error> for DappinError {
    fn from(err: serde_json::Error) -> Self {
        DappinError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_error_display() {
        let err = DappinError::http("pin/add", 500, "boom");
        assert_eq!(err.to_string(), "pin/add returned HTTP 500: boom");
    }

    #[test]
    fn test_http_body_truncated() {
        let long = "é".repeat(MAX_ERROR_BODY_LEN);
        match DappinError::http("add", 400, &long) {
            DappinError::Http { body, .. } => {
                assert!(body.len() <= MAX_ERROR_BODY_LEN);
                assert!(body.chars().all(|c| c == 'é'));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test_case(DappinError::Connection("refused".into()), true ; "connection")]
    #[test_case(DappinError::http("add", 503, ""), true ; "server error")]
    #[test_case(DappinError::http("add", 404, ""), false ; "client error")]
    #[test_case(DappinError::MalformedResponse("no hash".into()), false ; "malformed")]
    #[test_case(DappinError::Config("bad url".into()), false ; "config")]
    fn test_error_recoverable(err: DappinError, expected: bool) {
        assert_eq!(err.is_recoverable(), expected);
    }

    #[test]
    fn test_error_classification() {
        assert!(DappinError::MalformedResponse("x".into()).is_remote());
        let local = DappinError::LocalFile {
            path: "images/1.png".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(!local.is_remote());
        assert!(local.to_string().contains("images/1.png"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_result: std::result::Result<serde_json::Value, _> = serde_json::from_str("invalid");
        let result: Result<serde_json::Value> = json_result.map_err(DappinError::from);
        assert!(matches!(result, Err(DappinError::MalformedResponse(_))));
    }
}
