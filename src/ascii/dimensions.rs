//! Grid dimension calculation for aspect-ratio-correct ASCII rendering.

use crate::error::{Error, Result};

/// Default vertical scale factor.
/// Terminal characters are roughly twice as tall as they are wide, so a
/// pixel-per-cell mapping needs about half as many rows to keep the image
/// from looking stretched.
pub const DEFAULT_SCALE: f64 = 0.55;

/// Default output width in columns.
pub const DEFAULT_WIDTH: i64 = 120;

/// Upper bound on `columns * rows`. Anything larger would be an
/// unreadable wall of text and risks exhausting memory in the resize.
pub const MAX_GRID_CELLS: u64 = 1 << 24;

/// Size of the character grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub columns: u32,
    pub rows: u32,
}

impl GridDimensions {
    /// Calculate the character grid for a source image.
    ///
    /// `columns` is taken as given. Rows are derived from the image aspect
    /// ratio and the vertical `scale` correction:
    ///
    /// `rows = max(1, floor((img_height / img_width) * columns * scale))`
    ///
    /// Rows never drop below 1, whatever the aspect ratio or scale.
    ///
    /// # Errors
    /// - [`Error::InvalidWidth`] if `columns` is zero or negative.
    /// - [`Error::InvalidImage`] if the image has a zero dimension.
    /// - [`Error::GridTooLarge`] if the grid exceeds [`MAX_GRID_CELLS`].
    ///
    /// # Example
    /// ```
    /// use ascii_face::ascii::GridDimensions;
    ///
    /// let dims = GridDimensions::for_image(100, 50, 10, 0.55).unwrap();
    /// assert_eq!((dims.columns, dims.rows), (10, 2));
    /// ```
    pub fn for_image(img_width: u32, img_height: u32, columns: i64, scale: f64) -> Result<Self> {
        if columns <= 0 {
            return Err(Error::InvalidWidth(columns));
        }

        if img_width == 0 || img_height == 0 {
            return Err(Error::InvalidImage {
                width: img_width,
                height: img_height,
            });
        }

        let aspect = f64::from(img_height) / f64::from(img_width);
        let rows = (aspect * columns as f64 * scale).floor();
        // NaN and negative products saturate to 0, huge ones to u64::MAX
        let rows = (rows as u64).max(1);

        let too_large = Error::GridTooLarge {
            columns: columns as u64,
            rows,
            limit: MAX_GRID_CELLS,
        };
        match (columns as u64).checked_mul(rows) {
            Some(cells) if cells <= MAX_GRID_CELLS => {}
            _ => return Err(too_large),
        }

        // Both factors are at most MAX_GRID_CELLS, which fits in u32
        Ok(Self {
            columns: columns as u32,
            rows: rows as u32,
        })
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}
