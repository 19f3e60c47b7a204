//! Image decoding and resampling behind a backend trait.
//!
//! The pipeline only needs two capabilities from an image library: load a
//! file as grayscale, and resample a grayscale buffer to an exact size.
//! [`ImageBackend`] captures those, [`RustBackend`] implements them with the
//! `image` crate, and tests can swap in a fake.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::GrayImage;
use serde::Deserialize;

use crate::ascii::to_grayscale;
use crate::error::{Error, Result};

/// Decode and resample capability used by the converter.
pub trait ImageBackend {
    /// Decode an image file into a single-channel grayscale buffer.
    ///
    /// # Errors
    /// Returns [`Error::Decode`] if the file cannot be opened or decoded.
    fn load_grayscale(&self, path: &Path) -> Result<GrayImage>;

    /// Resample to exactly `columns x rows` pixels.
    fn resize(&self, image: &GrayImage, columns: u32, rows: u32) -> GrayImage;
}

/// Resampling filter used when shrinking the image to the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    /// Nearest neighbour
    Nearest,
    /// Linear
    Triangle,
    /// Cubic
    #[default]
    CatmullRom,
    /// Gaussian
    Gaussian,
    /// Lanczos with window 3
    Lanczos3,
}

impl Filter {
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Nearest => "nearest",
            Filter::Triangle => "triangle",
            Filter::CatmullRom => "catmull-rom",
            Filter::Gaussian => "gaussian",
            Filter::Lanczos3 => "lanczos3",
        }
    }
}

impl From<Filter> for FilterType {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => FilterType::Nearest,
            Filter::Triangle => FilterType::Triangle,
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Gaussian => FilterType::Gaussian,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Production backend built on the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustBackend {
    filter: Filter,
}

impl RustBackend {
    pub fn new(filter: Filter) -> Self {
        Self { filter }
    }
}

impl ImageBackend for RustBackend {
    fn load_grayscale(&self, path: &Path) -> Result<GrayImage> {
        let img = image::open(path).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        // Alpha is dropped, matching a plain RGB -> L conversion
        Ok(to_grayscale(&img.to_rgb8()))
    }

    fn resize(&self, image: &GrayImage, columns: u32, rows: u32) -> GrayImage {
        if image.dimensions() == (columns, rows) {
            return image.clone();
        }
        imageops::resize(image, columns, rows, self.filter.into())
    }
}
