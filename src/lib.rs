//! ascii-face library crate.
//!
//! Converts raster images into ASCII art: grayscale, aspect-corrected resize
//! to a character grid, then floor quantization of each luminance sample
//! into a character ramp.
//!
//! ```no_run
//! use ascii_face::{image_to_ascii, ConvertOptions};
//! use std::path::Path;
//!
//! let art = image_to_ascii(Path::new("face.jpg"), &ConvertOptions::default())?;
//! println!("{art}");
//! # Ok::<(), ascii_face::Error>(())
//! ```

pub mod ascii;
pub mod backend;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;

pub use convert::{image_to_ascii, ConvertOptions, Converter};
pub use error::{Error, Result};
