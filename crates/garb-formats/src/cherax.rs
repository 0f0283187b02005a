//! Cherax entity codec.
//!
//! Cherax files are JSON objects keyed by descriptive slot names, with a
//! literal `"format": "Cherax Entity"` tag and a set of decorative fields
//! (face features, hair tints, attachments, entity flags) the canonical
//! model does not carry. Decoding ignores those fields; encoding
//! synthesizes them with the fixed defaults Cherax expects, since they are
//! part of the format's contract rather than derived from input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use garb_outfit::slots::{
    cherax_component_slot, cherax_prop_slot, CHERAX_COMPONENT_NAMES, CHERAX_FACE_FEATURES,
    CHERAX_PROP_NAMES,
};
use garb_outfit::{Item, Outfit};

use crate::Result;

/// The literal format tag every Cherax entity file carries.
pub const FORMAT_TAG: &str = "Cherax Entity";

/// Entity type discriminant for peds.
const PED_ENTITY_TYPE: i32 = 2;

/// Fixed entity flag bitmask Cherax writes for outfits.
const BASE_FLAGS: i64 = 66855;

/// Default hair tint index (no tint).
const DEFAULT_HAIR_TINT: i32 = 255;

#[derive(Deserialize)]
struct Doc {
    #[serde(default)]
    model: Option<i64>,
    #[serde(default)]
    components: BTreeMap<String, Slot>,
    #[serde(default)]
    props: BTreeMap<String, Slot>,
}

#[derive(Deserialize)]
struct Slot {
    #[serde(default)]
    drawable: i32,
    #[serde(default)]
    texture: i32,
}

/// Decode a Cherax entity file into the canonical outfit.
///
/// Slot names not in the static tables are skipped; palette indices, face
/// features and hair tints are dropped by design.
pub fn decode(data: &[u8]) -> Result<Outfit> {
    let doc: Doc = serde_json::from_slice(data)?;

    let mut outfit = Outfit::default();
    if let Some(model) = doc.model {
        outfit.model = model;
    }

    for (name, slot) in &doc.components {
        if let Some(index) = cherax_component_slot(name) {
            outfit
                .components
                .insert(index, Item::new(slot.drawable, slot.texture));
        }
    }
    for (name, slot) in &doc.props {
        if let Some(index) = cherax_prop_slot(name) {
            outfit
                .props
                .insert(index, Item::new(slot.drawable, slot.texture));
        }
    }

    Ok(outfit)
}

#[derive(Serialize)]
struct Entity {
    format: &'static str,
    #[serde(rename = "type")]
    entity_type: i32,
    model: i64,
    #[serde(rename = "baseFlags")]
    base_flags: i64,
    components: BTreeMap<&'static str, ComponentOut>,
    props: BTreeMap<&'static str, PropOut>,
    face_features: BTreeMap<&'static str, f64>,
    primary_hair_tint: i32,
    secondary_hair_tint: i32,
    attachments: Vec<Value>,
}

#[derive(Serialize)]
struct ComponentOut {
    drawable: i32,
    texture: i32,
    palette: i32,
}

#[derive(Serialize)]
struct PropOut {
    drawable: i32,
    texture: i32,
}

/// Encode a canonical outfit as a Cherax entity file.
///
/// Only populated slots are written; Cherax tolerates partial objects, so
/// no densification happens here.
pub fn encode(outfit: &Outfit) -> Result<Vec<u8>> {
    let components = outfit
        .components
        .iter()
        .filter_map(|(&slot, item)| {
            CHERAX_COMPONENT_NAMES.get(slot as usize).map(|&name| {
                (
                    name,
                    ComponentOut {
                        drawable: item.drawable_id,
                        texture: item.texture_id,
                        palette: 0,
                    },
                )
            })
        })
        .collect();

    let props = outfit
        .props
        .iter()
        .filter_map(|(&slot, item)| {
            CHERAX_PROP_NAMES.get(slot as usize).map(|&name| {
                (
                    name,
                    PropOut {
                        drawable: item.drawable_id,
                        texture: item.texture_id,
                    },
                )
            })
        })
        .collect();

    let entity = Entity {
        format: FORMAT_TAG,
        entity_type: PED_ENTITY_TYPE,
        model: outfit.model,
        base_flags: BASE_FLAGS,
        components,
        props,
        face_features: CHERAX_FACE_FEATURES.iter().map(|&f| (f, 0.0)).collect(),
        primary_hair_tint: DEFAULT_HAIR_TINT,
        secondary_hair_tint: DEFAULT_HAIR_TINT,
        attachments: Vec::new(),
    };

    Ok(serde_json::to_vec_pretty(&entity)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use garb_outfit::PedModel;

    #[test]
    fn test_decode_named_slots() {
        let data = br#"{
            "format": "Cherax Entity",
            "model": 1885233650,
            "components": {
                "Head": {"drawable": 3, "texture": 1, "palette": 0},
                "Torso": {"drawable": 14, "texture": 2, "palette": 0},
                "Cape": {"drawable": 9, "texture": 9}
            },
            "props": {
                "Eyes": {"drawable": 5, "texture": 0}
            },
            "face_features": {"Nose Width": 0.4},
            "primary_hair_tint": 12
        }"#;

        let outfit = decode(data).unwrap();
        assert_eq!(outfit.ped(), PedModel::Male);
        assert_eq!(outfit.components.len(), 2);
        assert_eq!(outfit.components[&0], Item::new(3, 1));
        assert_eq!(outfit.components[&3], Item::new(14, 2));
        assert_eq!(outfit.props[&1], Item::new(5, 0));
    }

    #[test]
    fn test_decode_tolerates_missing_sections() {
        let outfit = decode(br#"{"model": 42}"#).unwrap();
        assert_eq!(outfit.model, 42);
        assert!(outfit.components.is_empty());
        assert!(outfit.props.is_empty());

        let outfit = decode(b"{}").unwrap();
        assert_eq!(outfit.ped(), PedModel::Female);
    }

    #[test]
    fn test_encode_synthesizes_envelope() {
        let mut outfit = Outfit::new(PedModel::MALE_RAW);
        outfit.components.insert(2, Item::new(7, 3));
        outfit.props.insert(0, Item::new(1, 0));

        let bytes = encode(&outfit).unwrap();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(doc["format"], FORMAT_TAG);
        assert_eq!(doc["type"], 2);
        assert_eq!(doc["baseFlags"], 66855);
        assert_eq!(doc["model"], 1885233650);
        assert_eq!(doc["primary_hair_tint"], 255);
        assert_eq!(doc["secondary_hair_tint"], 255);
        assert_eq!(doc["attachments"], Value::Array(vec![]));
        assert_eq!(doc["face_features"].as_object().unwrap().len(), 20);
        assert_eq!(doc["face_features"]["Nose Width"], 0.0);

        // only populated slots, with palette synthesized
        assert_eq!(doc["components"].as_object().unwrap().len(), 1);
        assert_eq!(doc["components"]["Hair"]["drawable"], 7);
        assert_eq!(doc["components"]["Hair"]["texture"], 3);
        assert_eq!(doc["components"]["Hair"]["palette"], 0);
        assert_eq!(doc["props"]["Head"]["drawable"], 1);
    }

    #[test]
    fn test_round_trip_preserves_slots() {
        let mut outfit = Outfit::new(PedModel::FEMALE_RAW);
        for slot in 0..12u8 {
            outfit.components.insert(slot, Item::new(slot as i32, 1));
        }
        for slot in 0..9u8 {
            outfit.props.insert(slot, Item::new(slot as i32, 2));
        }

        let back = decode(&encode(&outfit).unwrap()).unwrap();
        assert_eq!(back.components, outfit.components);
        assert_eq!(back.props, outfit.props);
        assert_eq!(back.model, outfit.model);
    }
}
