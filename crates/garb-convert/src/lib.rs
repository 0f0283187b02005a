//! Conversion orchestration for GTA V outfit files.
//!
//! Ties the pieces of `garb-formats` together into the operations a shell
//! (CLI or GUI) actually calls:
//!
//! - [`convert_one`] / [`convert_slice`] — detect (or obey an explicit
//!   override), decode, encode; one file in, one converted payload out.
//! - [`write_converted`] — pick a collision-free output path and write the
//!   payload, only after encoding fully succeeded.
//! - [`convert_batch`] — run a list of files sequentially, isolating
//!   per-file failures into a [`BatchReport`].
//!
//! # Example
//!
//! ```no_run
//! use garb_convert::{convert_one, write_converted, Options};
//! use std::path::Path;
//!
//! let input = Path::new("my_fit.json");
//! let converted = convert_one(input, &Options::default())?;
//! let written = write_converted(Path::new("out"), input, &converted)?;
//! println!("{} -> {} ({})", converted.source, converted.target, written.display());
//! # Ok::<(), garb_convert::Error>(())
//! ```

mod batch;
mod convert;
mod error;
mod output;

pub use batch::{convert_batch, convert_batch_with, BatchItem, BatchReport};
pub use convert::{convert_one, convert_slice, Converted, Options};
pub use error::{Error, Result};
pub use output::{resolve_output_path, write_converted};
