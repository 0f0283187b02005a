//! The canonical outfit representation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::PedModel;

/// A drawable/texture pair for one component or prop slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub drawable_id: i32,
    #[serde(default)]
    pub texture_id: i32,
}

impl Item {
    pub fn new(drawable_id: i32, texture_id: i32) -> Self {
        Self {
            drawable_id,
            texture_id,
        }
    }
}

/// Face-shape and skin-blend parameters.
///
/// Only the canonical format carries these; sources that lack them decode
/// to the all-zero record, which the game treats as "no heritage blend".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendData {
    pub is_parent: i32,
    pub shape_first_id: i32,
    pub shape_mix: f64,
    pub shape_second_id: i32,
    pub shape_third_id: i32,
    pub skin_first_id: i32,
    pub skin_mix: f64,
    pub skin_second_id: i32,
    pub skin_third_id: i32,
    pub third_mix: f64,
}

/// The canonical outfit: hub representation for all format codecs.
///
/// Component slots are keyed 0..=11 and prop slots 0..=8; slots a source
/// file did not mention are absent from the maps, never zero-filled.
/// Decoders construct an `Outfit` and encoders only read it — densification
/// for array-shaped targets happens at encode time.
///
/// The serde representation is the native YimMenu document: integer map
/// keys serialize as strings, exactly as YimMenu writes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    #[serde(default)]
    pub blend_data: BlendData,
    #[serde(default)]
    pub components: BTreeMap<u8, Item>,
    #[serde(default = "default_model")]
    pub model: i64,
    #[serde(default)]
    pub props: BTreeMap<u8, Item>,
}

fn default_model() -> i64 {
    PedModel::FEMALE_RAW
}

impl Outfit {
    /// Create an empty outfit for the given ped model hash.
    pub fn new(model: i64) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    /// The ped model this outfit targets.
    pub fn ped(&self) -> PedModel {
        PedModel::from_raw(self.model)
    }
}

impl Default for Outfit {
    fn default() -> Self {
        Self {
            blend_data: BlendData::default(),
            components: BTreeMap::new(),
            model: default_model(),
            props: BTreeMap::new(),
        }
    }
}
