//! Assembling quantized rows into the final text block.

use std::fmt;

use super::dimensions::GridDimensions;
use super::quantize::luminance_to_char;
use super::ramp::Ramp;
use crate::error::{Error, Result};

/// Rendered ASCII art: one string per grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<String>,
    dimensions: GridDimensions,
}

impl Canvas {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }
}

/// Rows joined by a single `\n`, with no trailing newline.
impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// Render row-major luminance samples into a canvas.
///
/// Each row takes the next `dims.columns` samples and maps every one of
/// them through the ramp.
///
/// # Errors
/// - [`Error::InvalidWidth`] if the grid has no columns.
/// - [`Error::SampleCount`] if `samples` does not hold exactly
///   `columns * rows` values.
pub fn render(samples: &[u8], dims: GridDimensions, ramp: &Ramp) -> Result<Canvas> {
    if dims.columns == 0 {
        return Err(Error::InvalidWidth(0));
    }
    let expected = dims.cell_count();
    if samples.len() != expected {
        return Err(Error::SampleCount {
            expected,
            actual: samples.len(),
        });
    }

    let rows = samples
        .chunks_exact(dims.columns as usize)
        .map(|row| row.iter().map(|&s| luminance_to_char(s, ramp)).collect::<String>())
        .collect();

    Ok(Canvas {
        rows,
        dimensions: dims,
    })
}
