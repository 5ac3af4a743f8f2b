//! Domain types for dappin.
//!
//! - [`ContentId`]: opaque identifier returned by the daemon's add call
//! - [`UploadRequest`]: one named binary payload for a multipart upload
//! - [`AddResponse`]: the daemon's add metadata
//! - [`PinType`]: pin listing filter
//! - [`RunReport`]: everything one upload-pin-fetch run produced

mod content;
mod report;
mod upload;

pub use content::*;
pub use report::*;
pub use upload::*;
