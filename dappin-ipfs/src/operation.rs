//! The upload-pin-fetch operation.
//!
//! Calls run strictly in order and the first failure ends the run:
//!
//! ```text
//! add ──> pin/add ──> [pin/ls] ──> [block/get]
//! ```

use std::path::Path;

use tracing::{debug, info, instrument};

use dappin_core::error::{DappinError, Result};
use dappin_core::traits::IpfsApi;
use dappin_core::types::{PinType, RunReport, UploadRequest};

/// Optional steps of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// List pins of this type after pinning
    pub list_pins: Option<PinType>,
    /// Read the raw block back after pinning
    pub fetch_block: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            list_pins: None,
            fetch_block: true,
        }
    }
}

/// Reads a local file into an upload under multipart field `field`.
pub async fn load_upload(path: impl AsRef<Path>, field: &str) -> Result<UploadRequest> {
    let path = path.as_ref();
    let data = tokio::fs::read(path)
        .await
        .map_err(|source| DappinError::LocalFile {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), bytes = data.len(), "Loaded upload file");
    Ok(UploadRequest::for_path(path, data).with_field(field))
}

/// Uploads `request`, pins the result, then runs the optional steps.
#[instrument(skip(api, request), fields(file = %request.file_name, bytes = request.len()))]
pub async fn run<A>(api: &A, request: UploadRequest, options: &RunOptions) -> Result<RunReport>
where
    A: IpfsApi + ?Sized,
{
    let add = api.add(request).await?;
    let content_id = add.content_id()?;
    info!(cid = %content_id, "Uploaded");

    let pin_response = api.pin_add(&content_id).await?;
    info!(cid = %content_id, "Pinned");

    let pins = match options.list_pins {
        Some(pin_type) => Some(api.pin_ls(pin_type).await?),
        None => None,
    };

    // Read-back only; the bytes are reported, not compared with the upload.
    let block = if options.fetch_block {
        let block = api.block_get(&content_id).await?;
        debug!(cid = %content_id, bytes = block.len(), "Read block back");
        Some(block)
    } else {
        None
    };

    Ok(RunReport {
        content_id,
        add,
        pin_response,
        pins,
        block,
    })
}

/// [`load_upload`] followed by [`run`]. No request is sent if the file can't be read.
pub async fn run_file<A>(
    api: &A,
    path: impl AsRef<Path>,
    field: &str,
    options: &RunOptions,
) -> Result<RunReport>
where
    A: IpfsApi + ?Sized,
{
    let request = load_upload(path, field).await?;
    run(api, request, options).await
}
