//! CLI enum types for preset and filter options.

use clap::ValueEnum;

use crate::ascii::Preset;
use crate::backend::Filter;

/// Named character ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RampPreset {
    #[default]
    Standard,
    Blocks,
    Minimal,
}

impl From<RampPreset> for Preset {
    fn from(p: RampPreset) -> Self {
        match p {
            RampPreset::Standard => Preset::Standard,
            RampPreset::Blocks => Preset::Blocks,
            RampPreset::Minimal => Preset::Minimal,
        }
    }
}

/// Resampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for Filter {
    fn from(f: ResizeFilter) -> Self {
        match f {
            ResizeFilter::Nearest => Filter::Nearest,
            ResizeFilter::Triangle => Filter::Triangle,
            ResizeFilter::CatmullRom => Filter::CatmullRom,
            ResizeFilter::Gaussian => Filter::Gaussian,
            ResizeFilter::Lanczos3 => Filter::Lanczos3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_to_ramp_preset() {
        assert_eq!(Preset::from(RampPreset::Standard), Preset::Standard);
        assert_eq!(Preset::from(RampPreset::Blocks), Preset::Blocks);
        assert_eq!(Preset::from(RampPreset::Minimal), Preset::Minimal);
    }

    #[test]
    fn test_filter_names_match_value_names() {
        for f in ResizeFilter::value_variants() {
            let name = f.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(Filter::from(*f).name(), name);
        }
    }
}
