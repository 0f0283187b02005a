//! Garb - GTA V outfit file conversion library.
//!
//! This crate provides a unified interface to the garb library ecosystem
//! for converting character-outfit files between mod-menu formats.
//!
//! # Crates
//!
//! - [`garb_outfit`] - Canonical outfit model, ped sentinels, slot tables
//! - [`garb_formats`] - Format detection and the four codec pairs
//!   (Cherax, YimMenu, Lexis, Stand)
//! - [`garb_convert`] - Conversion orchestration, output naming, batch runs
//!
//! # Example
//!
//! ```no_run
//! use garb::prelude::*;
//! use std::path::Path;
//!
//! // Convert one file to the canonical YimMenu format
//! let input = Path::new("stand_fit.txt");
//! let converted = convert_one(input, &Options::default())?;
//! let written = write_converted(Path::new("converted"), input, &converted)?;
//! println!("{} -> {}", converted.source, written.display());
//! # Ok::<(), garb::convert::Error>(())
//! ```

// Re-export all sub-crates
pub use garb_convert as convert;
pub use garb_formats as formats;
pub use garb_outfit as outfit;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use garb_convert::{
        convert_batch, convert_batch_with, convert_one, convert_slice, write_converted,
        BatchReport, Converted, Options,
    };
    pub use garb_formats::{decode, detect, encode, Decoded, Format};
    pub use garb_outfit::{BlendData, Item, Outfit, PedModel};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
