//! Content identifiers and the add response they come from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DappinError, Result};

/// Opaque content identifier (the daemon's `Hash`).
///
/// The format is not validated; whatever the daemon returns is passed back to
/// it verbatim on pin and block calls.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Metadata returned by the daemon's add endpoint.
///
/// ```text
/// {"Name":"1.png","Hash":"QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG","Size":"5"}
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddResponse {
    /// File name echoed back by the daemon
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    /// Content identifier of the uploaded data
    #[serde(rename = "Hash", default)]
    pub hash: Option<String>,
    /// Cumulative size; sent as a string by current daemons
    #[serde(rename = "Size", default, deserialize_with = "size_as_string")]
    pub size: Option<String>,
}

impl AddResponse {
    /// Parses an add response body.
    ///
    /// The daemon streams one JSON object per line; the last non-empty line
    /// describes the root of what was added.
    pub fn parse(body: &str) -> Result<Self> {
        let line = body
            .lines()
            .rev()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .ok_or_else(|| DappinError::MalformedResponse("empty add response".into()))?;

        Ok(serde_json::from_str(line)?)
    }

    /// Returns the content identifier, failing if `Hash` is missing or empty.
    pub fn content_id(&self) -> Result<ContentId> {
        match self.hash.as_deref().map(str::trim) {
            Some(hash) if !hash.is_empty() => Ok(ContentId::from(hash)),
            Some(_) => Err(DappinError::MalformedResponse("empty Hash field".into())),
            None => Err(DappinError::MalformedResponse("missing Hash field".into())),
        }
    }
}

impl FromStr for AddResponse {
    type Err = DappinError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn size_as_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Size {
        Text(String),
        Number(u64),
    }

    Ok(Option::<Size>::deserialize(deserializer)?.map(|size| match size {
        Size::Text(s) => s,
        Size::Number(n) => n.to_string(),
    }))
}
