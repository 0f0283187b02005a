//! Stand text-format codec.
//!
//! Stand saves outfits as plain UTF-8 text, one `Label: value` pair per
//! line, with a `Label Variation: value` line carrying the texture index
//! for each slot. Labels are free text, so decoding is line-oriented and
//! heuristic rather than a structured parse.
//!
//! Decoding runs in two explicit passes: the first collects every labelled
//! line into a map (a label that appears twice keeps its last value), the
//! second resolves each known slot label against that map. This keeps the
//! "which Variation line belongs to which slot" question answerable
//! without nested rescans of the document.

use std::collections::HashMap;

use garb_outfit::slots::{
    stand_component_slot, stand_prop_label, stand_prop_slot, COMPONENT_SLOT_COUNT,
    STAND_COMPONENT_LABELS,
};
use garb_outfit::{Item, Outfit, PedModel};

use crate::{Decoded, DecodeWarning, Error, Result};

/// Decode a Stand text file into the canonical outfit.
///
/// A model label containing `Male` but not `Female` selects the male ped;
/// anything else falls back to the female ped, with a [`DecodeWarning`]
/// when the label was missing or named neither ped. Missing variation
/// lines default to texture 0 for components and -1 for props; values
/// that fail to parse as integers read as 0.
pub fn decode(data: &[u8]) -> Result<Decoded> {
    let text = std::str::from_utf8(data).map_err(|_| Error::NotUtf8)?;

    // pass 1: label -> raw value, last occurrence wins
    let mut values: HashMap<&str, &str> = HashMap::new();
    for line in text.lines() {
        if let Some((label, value)) = line.trim().split_once(':') {
            values.insert(label.trim_end(), value.trim());
        }
    }

    // pass 2: resolve the model and each known slot label
    let mut warnings = Vec::new();
    let model = match values.get("Model") {
        None => {
            warnings.push(DecodeWarning::MissingModelLine);
            PedModel::FEMALE_RAW
        }
        Some(&label) => {
            if label.contains("Male") && !label.contains("Female") {
                PedModel::MALE_RAW
            } else {
                if !label.contains("Female") {
                    warnings.push(DecodeWarning::AmbiguousModelLabel(label.to_string()));
                }
                PedModel::FEMALE_RAW
            }
        }
    };

    let mut outfit = Outfit::new(model);

    for (&label, &raw) in &values {
        if let Some(slot) = stand_component_slot(label) {
            let texture = variation_value(&values, label).unwrap_or(0);
            outfit
                .components
                .insert(slot, Item::new(parse_int(raw), texture));
        } else if let Some(slot) = stand_prop_slot(label) {
            let texture = variation_value(&values, label).unwrap_or(-1);
            outfit.props.insert(slot, Item::new(parse_int(raw), texture));
        }
    }

    Ok(Decoded { outfit, warnings })
}

/// Encode a canonical outfit as a Stand text file.
///
/// The model line comes first, then populated component slots in index
/// order, then the five prop slots Stand has labels for. Prop slots
/// without a Stand label (3, 4, 5, 8) are dropped.
pub fn encode(outfit: &Outfit) -> Result<Vec<u8>> {
    let ped = if outfit.ped().is_male() {
        PedModel::Male
    } else {
        PedModel::Female
    };

    let mut out = format!("Model: {}\n", ped);

    for slot in 0..COMPONENT_SLOT_COUNT as u8 {
        if let Some(item) = outfit.components.get(&slot) {
            let label = STAND_COMPONENT_LABELS[slot as usize];
            out.push_str(&format!("{}: {}\n", label, item.drawable_id));
            out.push_str(&format!("{} Variation: {}\n", label, item.texture_id));
        }
    }
    for (&slot, item) in &outfit.props {
        if let Some(label) = stand_prop_label(slot) {
            out.push_str(&format!("{}: {}\n", label, item.drawable_id));
            out.push_str(&format!("{} Variation: {}\n", label, item.texture_id));
        }
    }

    Ok(out.into_bytes())
}

fn variation_value(values: &HashMap<&str, &str>, label: &str) -> Option<i32> {
    values
        .get(format!("{} Variation", label).as_str())
        .map(|raw| parse_int(raw))
}

fn parse_int(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}
