//! Error types for the conversion pipeline.

use std::path::PathBuf;

/// Errors produced while turning an image into ASCII art.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input path is not an existing regular file.
    #[error("image not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The character ramp has no characters.
    #[error("character ramp cannot be empty")]
    EmptyRamp,

    /// The requested column count is zero or negative.
    #[error("--width must be greater than 0, got {0}")]
    InvalidWidth(i64),

    /// The character grid would exceed [`MAX_GRID_CELLS`](crate::ascii::MAX_GRID_CELLS).
    #[error("character grid {columns}x{rows} is too large (limit {limit} cells)")]
    GridTooLarge { columns: u64, rows: u64, limit: u64 },

    /// The decoded image has a zero dimension.
    #[error("image has unusable dimensions {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    /// The image could not be opened or decoded.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The renderer got a sample buffer that does not match the grid.
    #[error("expected {expected} luminance samples, got {actual}")]
    SampleCount { expected: usize, actual: usize },

    /// Writing the rendered output failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_width_message_names_flag() {
        assert_eq!(
            Error::InvalidWidth(0).to_string(),
            "--width must be greater than 0, got 0"
        );
        assert_eq!(
            Error::InvalidWidth(-7).to_string(),
            "--width must be greater than 0, got -7"
        );
    }

    #[test]
    fn test_grid_too_large_message() {
        let err = Error::GridTooLarge {
            columns: 5000,
            rows: 4000,
            limit: 1 << 24,
        };
        assert_eq!(
            err.to_string(),
            "character grid 5000x4000 is too large (limit 16777216 cells)"
        );
    }
}
