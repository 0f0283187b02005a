//! Format detection.
//!
//! Classification is total: any byte sequence yields either a [`Format`]
//! or `None`, never an error. Files with a `.txt` extension are only ever
//! considered for the Stand text format; everything else must parse as a
//! single JSON document before the shape rules run, in fixed priority:
//!
//! 1. an explicit `"format": "Cherax Entity"` tag wins;
//! 2. an `outfit` object holding `component` and `component variation`
//!    arrays is Lexis;
//! 3. a `blend_data` object next to a `components` object whose first key
//!    is numeric is YimMenu.
//!
//! The YimMenu rule inspects only the first `components` key, so an empty
//! `components` object never matches and the document falls through to
//! `None`. That is a known narrow spot, kept deliberately: consumers
//! depend on the exact classification boundary.

use std::path::Path;

use serde_json::Value;

use crate::{cherax, Format};

/// Classify raw file content as one of the known outfit formats.
pub fn detect(path: &Path, data: &[u8]) -> Option<Format> {
    if has_txt_extension(path) {
        return detect_stand(data);
    }

    let doc: Value = serde_json::from_slice(data).ok()?;
    let obj = doc.as_object()?;

    if obj.get("format").and_then(Value::as_str) == Some(cherax::FORMAT_TAG) {
        return Some(Format::Cherax);
    }

    if let Some(outfit) = obj.get("outfit").and_then(Value::as_object) {
        if outfit.get("component").is_some_and(Value::is_array)
            && outfit.get("component variation").is_some_and(Value::is_array)
        {
            return Some(Format::Lexis);
        }
    }

    if obj.get("blend_data").is_some_and(Value::is_object) {
        if let Some(components) = obj.get("components").and_then(Value::as_object) {
            if let Some(first_key) = components.keys().next() {
                if first_key.parse::<i64>().is_ok() {
                    return Some(Format::Yim);
                }
            }
        }
    }

    None
}

fn has_txt_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}

fn detect_stand(data: &[u8]) -> Option<Format> {
    let text = String::from_utf8_lossy(data);

    let has_model = text.lines().any(|l| l.trim_start().starts_with("Model:"));
    let has_variation = text.lines().any(|l| l.contains("Variation:"));

    (has_model && has_variation).then_some(Format::Stand)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect_json(data: &str) -> Option<Format> {
        detect(Path::new("outfit.json"), data.as_bytes())
    }

    #[test]
    fn test_cherax_tag_wins() {
        assert_eq!(
            detect_json(r#"{"format": "Cherax Entity", "model": 1885233650}"#),
            Some(Format::Cherax)
        );
        assert_eq!(detect_json(r#"{"format": "Other Entity"}"#), None);
    }

    #[test]
    fn test_lexis_shape() {
        assert_eq!(
            detect_json(r#"{"outfit": {"component": [], "component variation": []}}"#),
            Some(Format::Lexis)
        );
        // both arrays are required
        assert_eq!(detect_json(r#"{"outfit": {"component": []}}"#), None);
        // and they must actually be arrays
        assert_eq!(
            detect_json(r#"{"outfit": {"component": 1, "component variation": 2}}"#),
            None
        );
    }

    #[test]
    fn test_yim_shape() {
        assert_eq!(
            detect_json(r#"{"blend_data": {}, "components": {"0": {"drawable_id": 1}}}"#),
            Some(Format::Yim)
        );
    }

    #[test]
    fn test_yim_requires_numeric_first_key() {
        assert_eq!(
            detect_json(r#"{"blend_data": {}, "components": {"Head": {}}}"#),
            None
        );
    }

    #[test]
    fn test_empty_components_falls_through() {
        // No first key to inspect, so an otherwise valid YimMenu document
        // is unclassifiable. Pinned behavior.
        assert_eq!(detect_json(r#"{"blend_data": {}, "components": {}}"#), None);
    }

    #[test]
    fn test_invalid_json_is_unknown() {
        assert_eq!(detect_json("not json at all {"), None);
        assert_eq!(detect_json(""), None);
    }

    #[test]
    fn test_non_object_json_is_unknown() {
        assert_eq!(detect_json("[1, 2, 3]"), None);
        assert_eq!(detect_json("42"), None);
    }

    #[test]
    fn test_txt_extension_gates_stand() {
        let stand = b"Model: Online Male\nHead: 3\nHead Variation: 1\n";
        assert_eq!(detect(Path::new("fit.txt"), stand), Some(Format::Stand));
        assert_eq!(detect(Path::new("fit.TXT"), stand), Some(Format::Stand));

        // a txt file is never probed as JSON
        let yim = br#"{"blend_data": {}, "components": {"0": {}}}"#;
        assert_eq!(detect(Path::new("fit.txt"), yim), None);

        // and stand content under a json extension fails the JSON parse
        assert_eq!(detect(Path::new("fit.json"), stand), None);
    }

    #[test]
    fn test_stand_needs_both_markers() {
        assert_eq!(detect(Path::new("fit.txt"), b"Model: Online Male\n"), None);
        assert_eq!(detect(Path::new("fit.txt"), b"Hat Variation: 1\n"), None);
    }
}
