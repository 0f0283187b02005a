//! YimMenu (canonical-native) codec.
//!
//! The canonical [`Outfit`] mirrors YimMenu's on-disk layout, so this
//! codec pair is essentially serde: decode validates slot keys and drops
//! anything out of range, encode is a pretty-printed serialization. It is
//! the only codec pair that round-trips without loss.

use std::collections::BTreeMap;

use serde::Deserialize;

use garb_outfit::slots::{COMPONENT_SLOT_COUNT, PROP_SLOT_COUNT};
use garb_outfit::{BlendData, Item, Outfit, PedModel};

use crate::Result;

#[derive(Deserialize)]
struct Doc {
    #[serde(default = "default_model")]
    model: i64,
    #[serde(default)]
    blend_data: BlendData,
    #[serde(default)]
    components: BTreeMap<String, Item>,
    #[serde(default)]
    props: BTreeMap<String, Item>,
}

fn default_model() -> i64 {
    PedModel::FEMALE_RAW
}

/// Decode a YimMenu file into the canonical outfit.
///
/// Keys that are not integers, or that name a slot outside the valid
/// range, are dropped rather than rejected.
pub fn decode(data: &[u8]) -> Result<Outfit> {
    let doc: Doc = serde_json::from_slice(data)?;

    Ok(Outfit {
        model: doc.model,
        blend_data: doc.blend_data,
        components: valid_slots(doc.components, COMPONENT_SLOT_COUNT),
        props: valid_slots(doc.props, PROP_SLOT_COUNT),
    })
}

/// Encode a canonical outfit as a YimMenu file.
pub fn encode(outfit: &Outfit) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(outfit)?)
}

fn valid_slots(raw: BTreeMap<String, Item>, count: usize) -> BTreeMap<u8, Item> {
    raw.into_iter()
        .filter_map(|(key, item)| {
            let slot: u8 = key.parse().ok()?;
            ((slot as usize) < count).then_some((slot, item))
        })
        .collect()
}
