//! Canonical outfit model for GTA V outfit conversion.
//!
//! Every mod menu stores the same underlying data: a ped model plus a fixed
//! set of clothing components and accessory props, each selected by a
//! drawable index and a texture (variation) index. This crate defines the
//! hub representation all format codecs decode into and encode from, along
//! with the static slot-name tables the formats disagree on.
//!
//! The canonical shape mirrors YimMenu's on-disk layout, the richest of the
//! losslessly-representable formats: serializing an [`Outfit`] with serde
//! yields a native YimMenu document.
//!
//! # Example
//!
//! ```
//! use garb_outfit::{Item, Outfit, PedModel};
//!
//! let mut outfit = Outfit::new(PedModel::Male.raw());
//! outfit.components.insert(0, Item { drawable_id: 3, texture_id: 1 });
//!
//! assert!(PedModel::from_raw(outfit.model).is_male());
//! ```

mod model;
mod ped;

pub mod slots;

pub use model::{BlendData, Item, Outfit};
pub use ped::PedModel;
