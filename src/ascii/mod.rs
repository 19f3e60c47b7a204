//! ASCII renderer module for converting images to ASCII art.
//!
//! The pieces of the pipeline, in the order they run:
//!
//! 1. **Grayscale conversion** - RGB to luminance using BT.601
//! 2. **Grid dimensions** - Columns from the caller, rows from the aspect ratio
//! 3. **Character ramp** - Ordered characters, optionally inverted
//! 4. **Quantization** - Floor-divide luminance into ramp buckets
//! 5. **Rendering** - One string per row, joined with newlines
//!
//! Resampling to the grid lives in [`crate::backend`].

mod dimensions;
mod grayscale;
mod quantize;
mod ramp;
mod render;

pub use dimensions::{GridDimensions, DEFAULT_SCALE, DEFAULT_WIDTH, MAX_GRID_CELLS};
pub use grayscale::{luminance, to_grayscale};
pub use quantize::{luminance_to_char, map_to_chars, ramp_index};
pub use ramp::{Preset, Ramp, BLOCKS_RAMP, DEFAULT_RAMP, MINIMAL_RAMP, STANDARD_RAMP};
pub use render::{render, Canvas};
