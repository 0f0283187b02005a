//! Lexis outfit codec.
//!
//! Lexis stores an outfit as four parallel integer arrays under an
//! `"outfit"` object: `component`/`component variation` (12 entries) and
//! `prop`/`prop variation` (9 entries). The array index is the slot index.
//! "No prop" is written as -1 in both prop arrays, while components use 0,
//! so the two paths pad with different sentinels on encode and fall back
//! to different variation defaults on decode.

use serde::{Deserialize, Serialize};

use garb_outfit::slots::{COMPONENT_SLOT_COUNT, PROP_SLOT_COUNT};
use garb_outfit::{Item, Outfit};

use crate::Result;

#[derive(Deserialize)]
struct Doc {
    #[serde(default)]
    outfit: Option<OutfitDoc>,
}

#[derive(Serialize, Deserialize, Default)]
struct OutfitDoc {
    #[serde(default)]
    model: Option<i64>,
    #[serde(default)]
    component: Vec<i32>,
    #[serde(rename = "component variation", default)]
    component_variation: Vec<i32>,
    #[serde(default)]
    prop: Vec<i32>,
    #[serde(rename = "prop variation", default)]
    prop_variation: Vec<i32>,
}

/// Decode a Lexis file into the canonical outfit.
///
/// Canonical slot *i* is taken from array index *i*. When a variation
/// array is shorter than its drawable array, the missing variation reads
/// as 0 for components and -1 for props.
pub fn decode(data: &[u8]) -> Result<Outfit> {
    let doc: Doc = serde_json::from_slice(data)?;
    let inner = doc.outfit.unwrap_or_default();

    let mut outfit = Outfit::default();
    if let Some(model) = inner.model {
        outfit.model = model;
    }

    for (i, &drawable) in inner.component.iter().take(COMPONENT_SLOT_COUNT).enumerate() {
        let texture = inner.component_variation.get(i).copied().unwrap_or(0);
        outfit.components.insert(i as u8, Item::new(drawable, texture));
    }
    for (i, &drawable) in inner.prop.iter().take(PROP_SLOT_COUNT).enumerate() {
        let texture = inner.prop_variation.get(i).copied().unwrap_or(-1);
        outfit.props.insert(i as u8, Item::new(drawable, texture));
    }

    Ok(outfit)
}

/// Encode a canonical outfit as a Lexis file.
///
/// Lexis requires fully dense arrays, so unpopulated slots are padded with
/// the format's empty sentinels: 0/0 for components, -1/-1 for props. The
/// canonical outfit itself is never mutated.
pub fn encode(outfit: &Outfit) -> Result<Vec<u8>> {
    let mut inner = OutfitDoc {
        model: Some(outfit.model),
        ..OutfitDoc::default()
    };

    for slot in 0..COMPONENT_SLOT_COUNT as u8 {
        let item = outfit.components.get(&slot).copied().unwrap_or_default();
        inner.component.push(item.drawable_id);
        inner.component_variation.push(item.texture_id);
    }
    for slot in 0..PROP_SLOT_COUNT as u8 {
        let item = outfit
            .props
            .get(&slot)
            .copied()
            .unwrap_or(Item::new(-1, -1));
        inner.prop.push(item.drawable_id);
        inner.prop_variation.push(item.texture_id);
    }

    #[derive(Serialize)]
    struct Wrapper {
        outfit: OutfitDoc,
    }

    Ok(serde_json::to_vec_pretty(&Wrapper { outfit: inner })?)
}
