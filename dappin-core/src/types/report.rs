//! Pin listing filters and run results.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::DappinError;
use crate::types::{AddResponse, ContentId};

/// Which pins a listing returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinType {
    /// Pinned by hash directly
    #[default]
    Direct,
    /// Pinned together with everything it links to
    Recursive,
    /// Kept alive by a recursive pin above it
    Indirect,
    /// Every pin
    All,
}

impl PinType {
    /// Value sent in the `Type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            PinType::Direct => "direct",
            PinType::Recursive => "recursive",
            PinType::Indirect => "indirect",
            PinType::All => "all",
        }
    }
}

impl fmt::Display for PinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PinType {
    type Err = DappinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "direct" => Ok(PinType::Direct),
            "recursive" => Ok(PinType::Recursive),
            "indirect" => Ok(PinType::Indirect),
            "all" => Ok(PinType::All),
            other => Err(DappinError::Config(format!("unknown pin type '{}'", other))),
        }
    }
}

/// What one upload-pin-fetch run produced.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Identifier returned by the upload
    pub content_id: ContentId,
    /// Full add metadata
    pub add: AddResponse,
    /// Raw pin-add response text
    pub pin_response: String,
    /// Raw pin listing, when requested
    pub pins: Option<String>,
    /// Raw block bytes, when fetched
    pub block: Option<Bytes>,
}

impl RunReport {
    /// Size of the fetched block, if any.
    pub fn block_len(&self) -> Option<usize> {
        self.block.as_ref().map(Bytes::len)
    }
}

/// Identifier on the first line, pin response next, then the listing.
impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.content_id)?;
        write!(f, "{}", self.pin_response.trim_end())?;
        if let Some(pins) = &self.pins {
            write!(f, "\n{}", pins.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn report() -> RunReport {
        RunReport {
            content_id: ContentId::from("Qm123"),
            add: AddResponse::default(),
            pin_response: "pinned Qm123\n".into(),
            pins: None,
            block: Some(Bytes::from_static(b"hello")),
        }
    }

    #[test]
    fn test_report_display() {
        let out = report().to_string();
        assert_eq!(out, "Qm123\npinned Qm123");
    }

    #[test]
    fn test_report_display_with_pins() {
        let mut report = report();
        report.pins = Some("Qm123 direct\n".into());
        let out = report.to_string();
        assert!(out.ends_with("pinned Qm123\nQm123 direct"));
        assert_eq!(report.block_len(), Some(5));
    }

    #[test_case("direct", PinType::Direct)]
    #[test_case("Recursive", PinType::Recursive)]
    #[test_case("indirect", PinType::Indirect)]
    #[test_case("ALL", PinType::All)]
    fn test_pin_type_parse(input: &str, expected: PinType) {
        assert_eq!(input.parse::<PinType>().unwrap(), expected);
        assert_eq!(expected.as_str(), input.to_ascii_lowercase());
    }

    #[test]
    fn test_pin_type_unknown() {
        assert!(matches!("pinned".parse::<PinType>(), Err(DappinError::Config(_))));
    }
}
