//! Upload payloads.

use std::path::Path;

use crate::constants::{DEFAULT_UPLOAD_FIELD, FALLBACK_FILE_NAME};

/// A named binary payload sent as one multipart part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadRequest {
    /// Multipart field name
    pub field: String,
    /// File name reported in the part's `Content-Disposition`
    pub file_name: String,
    /// Raw bytes
    pub data: Vec<u8>,
}

impl UploadRequest {
    /// Creates a request under the default field name.
    pub fn new(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            field: DEFAULT_UPLOAD_FIELD.to_string(),
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// Creates a request named after the basename of `path`.
    pub fn for_path(path: &Path, data: impl Into<Vec<u8>>) -> Self {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(FALLBACK_FILE_NAME);
        Self::new(file_name, data)
    }

    /// Overrides the multipart field name.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
