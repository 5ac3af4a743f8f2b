//! Common traits for dappin.
//!
//! The operation layer only talks to the daemon through [`IpfsApi`], so it can
//! run against the HTTP client or an in-process fake.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;
use crate::types::{AddResponse, ContentId, PinType, UploadRequest};

/// The slice of the IPFS daemon RPC this crate uses.
///
/// Implementations might use:
/// - The daemon's HTTP API (production)
/// - An in-memory recorder (tests)
#[async_trait]
pub trait IpfsApi: Send + Sync {
    /// Uploads one payload. Returns the daemon's add metadata.
    async fn add(&self, request: UploadRequest) -> Result<AddResponse>;

    /// Pins `cid` so it survives garbage collection.
    ///
    /// Returns the daemon's raw response text. Safe to repeat.
    async fn pin_add(&self, cid: &ContentId) -> Result<String>;

    /// Lists pins of the given type as raw response text.
    async fn pin_ls(&self, pin_type: PinType) -> Result<String>;

    /// Reads the raw block stored under `cid`.
    async fn block_get(&self, cid: &ContentId) -> Result<Bytes>;
}
