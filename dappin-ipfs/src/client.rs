//! IPFS daemon HTTP client.
//!
//! Every RPC call is a `POST` against the configured `/api/v0` base. Non-2xx
//! statuses surface as [`DappinError::Http`]; transport failures as
//! [`DappinError::Connection`].

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument, warn};
use url::Url;

use dappin_core::constants::{
    ENDPOINT_ADD, ENDPOINT_BLOCK_GET, ENDPOINT_PIN_ADD, ENDPOINT_PIN_LS, PARAM_ARG, PARAM_TYPE,
};
use dappin_core::error::{DappinError, Result};
use dappin_core::traits::IpfsApi;
use dappin_core::types::{AddResponse, ContentId, PinType, UploadRequest};

use crate::config::DaemonConfig;

/// IPFS client for add/pin/block operations.
#[derive(Clone, Debug)]
pub struct IpfsClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl IpfsClient {
    /// Creates a client for the default DAppNode daemon.
    pub fn new() -> Result<Self> {
        Self::with_config(DaemonConfig::default())
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: DaemonConfig) -> Result<Self> {
        let base_url = config.base_url()?;

        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(seconds));
        }
        let http_client = builder
            .build()
            .map_err(|e| DappinError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| DappinError::Config(format!("invalid endpoint '{}': {}", path, e)))
    }

    /// Sends one RPC call and rejects non-success statuses.
    async fn post(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        form: Option<Form>,
    ) -> Result<reqwest::Response> {
        let mut request = self.http_client.post(self.endpoint(endpoint)?).query(query);
        if let Some(form) = form {
            request = request.multipart(form);
        }

        let response = request.send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(endpoint, status = status.as_u16(), body = %text.trim(), "Daemon rejected request");
            return Err(DappinError::http(endpoint, status.as_u16(), text));
        }

        Ok(response)
    }
}

#[async_trait]
impl IpfsApi for IpfsClient {
    #[instrument(skip(self, request), fields(file = %request.file_name, bytes = request.len()))]
    async fn add(&self, request: UploadRequest) -> Result<AddResponse> {
        let part = Part::bytes(request.data)
            .file_name(request.file_name)
            .mime_str("application/octet-stream")
            .map_err(|e| DappinError::Config(e.to_string()))?;
        let form = Form::new().part(request.field, part);

        let response = self.post(ENDPOINT_ADD, &[], Some(form)).await?;
        let text = response.text().await.map_err(transport_error)?;
        let add = AddResponse::parse(&text)?;

        debug!(hash = ?add.hash, size = ?add.size, "Uploaded to IPFS");
        Ok(add)
    }

    #[instrument(skip(self), fields(cid = %cid))]
    async fn pin_add(&self, cid: &ContentId) -> Result<String> {
        let response = self
            .post(ENDPOINT_PIN_ADD, &[(PARAM_ARG, cid.as_str())], None)
            .await?;
        let text = response.text().await.map_err(transport_error)?;

        debug!("Pinned");
        Ok(text)
    }

    #[instrument(skip(self))]
    async fn pin_ls(&self, pin_type: PinType) -> Result<String> {
        let response = self
            .post(ENDPOINT_PIN_LS, &[(PARAM_TYPE, pin_type.as_str())], None)
            .await?;
        response.text().await.map_err(transport_error)
    }

    #[instrument(skip(self), fields(cid = %cid))]
    async fn block_get(&self, cid: &ContentId) -> Result<Bytes> {
        let response = self
            .post(ENDPOINT_BLOCK_GET, &[(PARAM_ARG, cid.as_str())], None)
            .await?;
        let block = response.bytes().await.map_err(transport_error)?;

        debug!(bytes = block.len(), "Fetched block");
        Ok(block)
    }
}

fn transport_error(err: reqwest::Error) -> DappinError {
    DappinError::Connection(err.to_string())
}
