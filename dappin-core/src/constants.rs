//! Daemon endpoints and run defaults.

// ═══════════════════════════════════════════════════════════════════════════════
// DAEMON
// ═══════════════════════════════════════════════════════════════════════════════

/// Base URL of the DAppNode-hosted IPFS daemon RPC.
pub const DEFAULT_API_URL: &str = "http://ipfs.dappnode:5001/api/v0/";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const ENV_API_URL: &str = "IPFS_API_URL";

/// Environment variable setting the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "IPFS_TIMEOUT_SECS";

// ═══════════════════════════════════════════════════════════════════════════════
// ENDPOINTS (relative to the base URL)
// ═══════════════════════════════════════════════════════════════════════════════

/// Multipart upload.
pub const ENDPOINT_ADD: &str = "add";

/// Pin an existing content identifier.
pub const ENDPOINT_PIN_ADD: &str = "pin/add";

/// List pins.
pub const ENDPOINT_PIN_LS: &str = "pin/ls";

/// Read a raw block.
pub const ENDPOINT_BLOCK_GET: &str = "block/get";

/// Query parameter carrying the content identifier.
pub const PARAM_ARG: &str = "arg";

/// Query parameter selecting the pin type for listings.
pub const PARAM_TYPE: &str = "Type";

// ═══════════════════════════════════════════════════════════════════════════════
// UPLOAD DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Multipart field name used for the uploaded file.
pub const DEFAULT_UPLOAD_FIELD: &str = "photo1";

/// Local file uploaded when none is given.
pub const DEFAULT_UPLOAD_PATH: &str = "images/1.png";

/// File name sent when the local path has no usable basename.
pub const FALLBACK_FILE_NAME: &str = "upload.bin";

/// Maximum bytes of an error body kept in [`crate::DappinError::Http`].
pub const MAX_ERROR_BODY_LEN: usize = 512;
