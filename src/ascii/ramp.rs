//! Character ramp construction.

use crate::error::{Error, Result};

/// Standard ASCII density ramp (10 levels).
/// Ordered from the sparsest glyph (space) to the densest (@), so black
/// pixels stay blank. Works well on dark terminals.
pub const STANDARD_RAMP: &str = " .:-=+*#%@";

/// Block character ramp (5 levels) using Unicode shading blocks.
pub const BLOCKS_RAMP: &str = " ░▒▓█";

/// Minimal ramp (4 levels) for a clean, less noisy look.
pub const MINIMAL_RAMP: &str = " .:#";

/// Default ramp used when none is configured.
pub const DEFAULT_RAMP: &str = STANDARD_RAMP;

/// Ordered, non-empty sequence of characters used to draw luminance.
///
/// Index 0 is drawn for luminance 0 (black) and the last index for
/// luminance 255 (white). Call [`Ramp::inverted`] to flip the mapping for
/// light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    chars: Vec<char>,
}

impl Ramp {
    /// Build a ramp from a string, keeping the characters in input order.
    ///
    /// # Errors
    /// Returns [`Error::EmptyRamp`] if `chars` is empty.
    pub fn new(chars: &str) -> Result<Self> {
        if chars.is_empty() {
            return Err(Error::EmptyRamp);
        }
        Ok(Self {
            chars: chars.chars().collect(),
        })
    }

    /// Build a ramp and reverse it when `invert` is set.
    ///
    /// # Errors
    /// Returns [`Error::EmptyRamp`] if `chars` is empty.
    pub fn build(chars: &str, invert: bool) -> Result<Self> {
        let ramp = Self::new(chars)?;
        Ok(if invert { ramp.inverted() } else { ramp })
    }

    /// Reverse the ramp order.
    pub fn inverted(mut self) -> Self {
        self.chars.reverse();
        self
    }

    /// Number of levels in the ramp. Always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

/// Named ramp presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Standard ASCII density ramp (10 levels)
    #[default]
    Standard,
    /// Unicode shading blocks (5 levels)
    Blocks,
    /// Minimal ramp (4 levels)
    Minimal,
}

impl Preset {
    /// Get the ramp string for this preset.
    pub fn chars(&self) -> &'static str {
        match self {
            Preset::Standard => STANDARD_RAMP,
            Preset::Blocks => BLOCKS_RAMP,
            Preset::Minimal => MINIMAL_RAMP,
        }
    }

    /// Get a human-readable name for the preset.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Standard => "standard",
            Preset::Blocks => "blocks",
            Preset::Minimal => "minimal",
        }
    }

    /// Look up a preset by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Preset::Standard),
            "blocks" => Some(Preset::Blocks),
            "minimal" => Some(Preset::Minimal),
            _ => None,
        }
    }
}
