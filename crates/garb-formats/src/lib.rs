//! Format detection and codecs for GTA V outfit files.
//!
//! Four mod-menu ecosystems write outfit files, each with its own shape:
//!
//! - **Cherax** — JSON object keyed by human-readable slot names, tagged
//!   with `"format": "Cherax Entity"`
//! - **YimMenu** — JSON keyed by slot indices; the canonical shape
//! - **Lexis** — JSON with four parallel integer arrays under `"outfit"`
//! - **Stand** — plain text, one `Label: value` pair per line
//!
//! Every codec decodes into the canonical [`Outfit`] and encodes back out
//! of it, so any source format converts to any target format through the
//! hub. Only the YimMenu pair is lossless in both directions; the others
//! drop or synthesize format-specific metadata as documented per module.
//!
//! # Example
//!
//! ```
//! use garb_formats::{decode, detect, encode, Format};
//! use std::path::Path;
//!
//! let data = br#"{"outfit": {"model": 1885233650,
//!     "component": [3], "component variation": [1],
//!     "prop": [], "prop variation": []}}"#;
//!
//! let format = detect(Path::new("fit.json"), data).unwrap();
//! assert_eq!(format, Format::Lexis);
//!
//! let decoded = decode(format, data)?;
//! let stand_text = encode(Format::Stand, &decoded.outfit)?;
//! assert!(stand_text.starts_with(b"Model: Online Male"));
//! # Ok::<(), garb_formats::Error>(())
//! ```

mod detect;
mod error;
mod format;
mod warn;

pub mod cherax;
pub mod lexis;
pub mod stand;
pub mod yim;

pub use detect::detect;
pub use error::{Error, Result};
pub use format::{Format, ParseFormatError};
pub use warn::DecodeWarning;

use garb_outfit::Outfit;

/// The result of decoding an input file: the canonical outfit plus any
/// non-fatal diagnostics the decoder produced along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub outfit: Outfit,
    pub warnings: Vec<DecodeWarning>,
}

impl Decoded {
    fn clean(outfit: Outfit) -> Self {
        Self {
            outfit,
            warnings: Vec::new(),
        }
    }
}

/// Decode raw file content with the codec for `format`.
pub fn decode(format: Format, data: &[u8]) -> Result<Decoded> {
    match format {
        Format::Cherax => cherax::decode(data).map(Decoded::clean),
        Format::Yim => yim::decode(data).map(Decoded::clean),
        Format::Lexis => lexis::decode(data).map(Decoded::clean),
        Format::Stand => stand::decode(data),
    }
}

/// Encode a canonical outfit with the codec for `format`.
pub fn encode(format: Format, outfit: &Outfit) -> Result<Vec<u8>> {
    match format {
        Format::Cherax => cherax::encode(outfit),
        Format::Yim => yim::encode(outfit),
        Format::Lexis => lexis::encode(outfit),
        Format::Stand => stand::encode(outfit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garb_outfit::{Item, PedModel};

    #[test]
    fn test_yim_identity_round_trip() {
        let mut outfit = Outfit::new(PedModel::MALE_RAW);
        outfit.components.insert(0, Item::new(5, 2));
        outfit.props.insert(8, Item::new(1, 0));

        let bytes = encode(Format::Yim, &outfit).unwrap();
        let decoded = decode(Format::Yim, &bytes).unwrap();
        assert!(decoded.warnings.is_empty());
        assert_eq!(decoded.outfit, outfit);
    }

    #[test]
    fn test_every_target_accepts_every_decoded_source() {
        let mut outfit = Outfit::new(PedModel::FEMALE_RAW);
        outfit.components.insert(3, Item::new(14, 2));
        outfit.props.insert(1, Item::new(5, 0));

        for source in Format::ALL {
            let bytes = encode(source, &outfit).unwrap();
            let decoded = decode(source, &bytes).unwrap();
            for target in Format::ALL {
                encode(target, &decoded.outfit).unwrap();
            }
        }
    }
}
