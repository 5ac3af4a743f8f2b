//! # dappin core
//!
//! Core types, errors, and traits shared by the dappin crates.
//!
//! - **Types**: upload payloads, content identifiers, daemon responses
//! - **Errors**: the failure taxonomy of an upload-pin-fetch run
//! - **Constants**: daemon endpoints and defaults
//! - **Traits**: the [`IpfsApi`] seam implemented by the HTTP client
//!
//! ## Example
//!
//! ```rust
//! use dappin_core::{AddResponse, ContentId};
//!
//! let add: AddResponse = serde_json::from_str(r#"{"Name":"1.png","Hash":"Qm123","Size":"5"}"#).unwrap();
//! assert_eq!(add.content_id().unwrap(), ContentId::from("Qm123"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{DappinError, Result};
pub use traits::*;
pub use types::*;
