//! Single-file conversion.

use std::fs;
use std::path::Path;

use garb_formats::{decode, detect, encode, DecodeWarning, Format};

use crate::{Error, Result};

/// Conversion options: explicit format overrides for "manual mode".
///
/// With `source` unset the detector classifies the input; with `target`
/// unset output goes to the canonical YimMenu format, which is the
/// normalize-to-hub policy the converter shells default to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub source: Option<Format>,
    pub target: Option<Format>,
}

impl Options {
    /// Fully manual mode: both formats pinned, detection bypassed.
    pub fn manual(source: Format, target: Format) -> Self {
        Self {
            source: Some(source),
            target: Some(target),
        }
    }

    /// The target format conversions will encode to.
    pub fn target(&self) -> Format {
        self.target.unwrap_or(Format::Yim)
    }
}

/// A successful conversion: the classified formats, the encoded output
/// bytes, and any decode warnings worth surfacing to the user.
#[derive(Debug, Clone)]
pub struct Converted {
    pub source: Format,
    pub target: Format,
    pub bytes: Vec<u8>,
    pub warnings: Vec<DecodeWarning>,
}

/// Convert raw file content already in memory.
///
/// `path` is only consulted for detection (extension gating) and error
/// reporting; nothing is read from or written to disk.
pub fn convert_slice(path: &Path, data: &[u8], options: &Options) -> Result<Converted> {
    let source = match options.source {
        Some(format) => format,
        None => detect(path, data).ok_or_else(|| Error::UnsupportedFormat {
            path: path.to_path_buf(),
        })?,
    };
    let target = options.target();

    let decoded = decode(source, data).map_err(|e| Error::Decode {
        format: source,
        source: e,
    })?;
    let bytes = encode(target, &decoded.outfit).map_err(|e| Error::Encode {
        format: target,
        source: e,
    })?;

    Ok(Converted {
        source,
        target,
        bytes,
        warnings: decoded.warnings,
    })
}

/// Read a file from disk and convert it.
pub fn convert_one(path: &Path, options: &Options) -> Result<Converted> {
    let data = fs::read(path)?;
    convert_slice(path, &data, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_auto_mode_normalizes_to_yim() {
        let data = br#"{"format": "Cherax Entity", "model": 1885233650,
            "components": {"Head": {"drawable": 3, "texture": 1}}}"#;

        let converted =
            convert_slice(Path::new("fit.json"), data, &Options::default()).unwrap();
        assert_eq!(converted.source, Format::Cherax);
        assert_eq!(converted.target, Format::Yim);

        let doc: Value = serde_json::from_slice(&converted.bytes).unwrap();
        assert_eq!(doc["model"], 1885233650i64);
        assert_eq!(doc["components"]["0"]["drawable_id"], 3);
    }

    #[test]
    fn test_manual_mode_bypasses_detection() {
        // no Model line, so detection would fail; the override decodes it
        // as Stand anyway and the warning comes through
        let data = b"Hat: 2\nHat Variation: 1\n";
        let options = Options::manual(Format::Stand, Format::Lexis);

        let converted = convert_slice(Path::new("fit.txt"), data, &options).unwrap();
        assert_eq!(converted.source, Format::Stand);
        assert_eq!(converted.target, Format::Lexis);
        assert_eq!(converted.warnings, vec![DecodeWarning::MissingModelLine]);

        let doc: Value = serde_json::from_slice(&converted.bytes).unwrap();
        assert_eq!(doc["outfit"]["prop"][0], 2);
    }

    #[test]
    fn test_unclassifiable_input_is_unsupported() {
        let err = convert_slice(Path::new("fit.json"), b"garbage {", &Options::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_forced_format_on_malformed_input_is_decode_error() {
        let options = Options::manual(Format::Lexis, Format::Yim);
        let err = convert_slice(Path::new("fit.json"), b"garbage {", &options).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                format: Format::Lexis,
                ..
            }
        ));
    }

    #[test]
    fn test_stand_scenario() {
        let data = b"Model: Online Male\nHead: 3\nHead Variation: 1\n";
        let converted =
            convert_slice(Path::new("fit.txt"), data, &Options::default()).unwrap();

        let doc: Value = serde_json::from_slice(&converted.bytes).unwrap();
        assert_eq!(doc["model"], 1885233650i64);
        assert_eq!(doc["components"]["0"]["drawable_id"], 3);
        assert_eq!(doc["components"]["0"]["texture_id"], 1);
    }
}
