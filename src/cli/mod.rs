//! Command-line interface definitions and helpers.

mod args;
mod commands;
mod enums;

pub use args::Args;
pub use commands::{run, write_to_file, RunError};
pub use enums::{RampPreset, ResizeFilter};
