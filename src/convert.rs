//! The image to ASCII conversion pipeline.
//!
//! load -> grid dimensions -> resize -> quantize -> render, strictly in
//! that order. The decoded buffer lives only for the duration of one
//! [`Converter::convert`] call.

use std::path::Path;

use crate::ascii::{
    render, Canvas, GridDimensions, Ramp, DEFAULT_RAMP, DEFAULT_SCALE, DEFAULT_WIDTH,
};
use crate::backend::{Filter, ImageBackend, RustBackend};
use crate::error::{Error, Result};

/// Settings for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Output width in columns. Must be positive.
    pub width: i64,
    /// Character ramp, sparsest glyph first.
    pub chars: String,
    /// Reverse the ramp before mapping.
    pub invert: bool,
    /// Vertical aspect correction multiplier.
    pub scale: f64,
    /// Resampling filter.
    pub filter: Filter,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            chars: DEFAULT_RAMP.to_string(),
            invert: false,
            scale: DEFAULT_SCALE,
            filter: Filter::default(),
        }
    }
}

/// Check that `path` names an existing regular file.
///
/// # Errors
/// Returns [`Error::NotFound`] otherwise.
pub fn ensure_image_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::NotFound(path.to_path_buf()))
    }
}

/// Runs the conversion pipeline on top of an [`ImageBackend`].
#[derive(Debug, Clone, Default)]
pub struct Converter<B> {
    backend: B,
}

impl<B: ImageBackend> Converter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Convert the image at `path` into an ASCII canvas.
    ///
    /// The ramp is validated before the image is decoded, so a bad ramp
    /// never pays for a decode.
    ///
    /// # Errors
    /// - [`Error::EmptyRamp`] if `options.chars` is empty.
    /// - [`Error::Decode`] if the backend cannot read the image.
    /// - [`Error::InvalidWidth`] if `options.width` is not positive.
    /// - [`Error::GridTooLarge`] if the grid would exceed
    ///   [`MAX_GRID_CELLS`](crate::ascii::MAX_GRID_CELLS).
    pub fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<Canvas> {
        let ramp = Ramp::build(&options.chars, options.invert)?;

        let gray = self.backend.load_grayscale(path)?;
        let (width, height) = gray.dimensions();
        log::debug!("Loaded {} ({}x{})", path.display(), width, height);

        let dims = GridDimensions::for_image(width, height, options.width, options.scale)?;
        log::debug!(
            "Grid {}x{} (scale {}, {} ramp levels, invert {})",
            dims.columns,
            dims.rows,
            options.scale,
            ramp.len(),
            options.invert
        );

        let resized = self.backend.resize(&gray, dims.columns, dims.rows);
        drop(gray);

        render(resized.as_raw(), dims, &ramp)
    }
}

/// Convert an image with the default `image`-crate backend.
///
/// # Errors
/// Returns [`Error::NotFound`] if `path` is not a regular file, otherwise
/// the same errors as [`Converter::convert`].
pub fn image_to_ascii(path: &Path, options: &ConvertOptions) -> Result<Canvas> {
    ensure_image_file(path)?;
    Converter::new(RustBackend::new(options.filter)).convert(path, options)
}
