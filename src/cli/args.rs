//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

use super::enums::{RampPreset, ResizeFilter};
use crate::config::Overrides;

/// Turn an image into ASCII art
#[derive(Parser, Debug)]
#[command(name = "ascii-face")]
#[command(version, about = "Turn an image into ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    ascii-face photo.jpg
    ascii-face photo.png --width 80 --chars \" .:#\" -o face.txt
    ascii-face logo.webp --preset blocks --invert")]
pub struct Args {
    /// Path to image file (jpg, png, webp, etc.)
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Output character width in columns [default: 120]
    #[arg(long, allow_negative_numbers = true, value_name = "INT")]
    pub width: Option<i64>,

    /// Characters from sparsest to densest; black pixels use the first one [default: " .:-=+*#%@"]
    #[arg(long, allow_hyphen_values = true, value_name = "STRING")]
    pub chars: Option<String>,

    /// Use a built-in character ramp instead of --chars
    #[arg(long, conflicts_with = "chars")]
    pub preset: Option<RampPreset>,

    /// Invert darkness mapping (dark pixels become dense characters)
    #[arg(long)]
    pub invert: bool,

    /// Vertical correction for terminal character aspect ratio [default: 0.55]
    #[arg(long, allow_negative_numbers = true, value_name = "FLOAT")]
    pub scale: Option<f64>,

    /// Resampling filter used to shrink the image [default: catmull-rom]
    #[arg(long)]
    pub filter: Option<ResizeFilter>,

    /// Save output to file instead of printing
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Args {
    /// Rendering values given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            width: self.width,
            chars: self.chars.clone(),
            preset: self.preset.map(Into::into),
            invert: self.invert,
            scale: self.scale,
            filter: self.filter.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::Preset;
    use crate::backend::Filter;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["ascii-face", "face.png"]);
        assert_eq!(args.image, PathBuf::from("face.png"));
        assert!(args.width.is_none());
        assert!(args.chars.is_none());
        assert!(args.preset.is_none());
        assert!(!args.invert);
        assert!(args.scale.is_none());
        assert!(args.filter.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert_eq!(args.overrides(), Overrides::default());
    }

    #[test]
    fn test_args_image_required() {
        assert!(Args::try_parse_from(["ascii-face"]).is_err());
    }

    #[test]
    fn test_args_width_and_scale() {
        let args = Args::parse_from(["ascii-face", "a.png", "--width", "80", "--scale", "0.4"]);
        assert_eq!(args.width, Some(80));
        assert_eq!(args.scale, Some(0.4));
    }

    #[test]
    fn test_args_negative_width_reaches_validation() {
        let args = Args::parse_from(["ascii-face", "a.png", "--width", "-5"]);
        assert_eq!(args.width, Some(-5));
    }

    #[test]
    fn test_args_empty_chars_accepted_by_parser() {
        let args = Args::parse_from(["ascii-face", "a.png", "--chars", ""]);
        assert_eq!(args.chars, Some(String::new()));
    }

    #[test]
    fn test_args_chars_starting_with_hyphen() {
        let args = Args::parse_from(["ascii-face", "a.png", "--chars", "-=#"]);
        assert_eq!(args.chars.as_deref(), Some("-=#"));
    }

    #[test]
    fn test_args_preset_conflicts_with_chars() {
        let res =
            Args::try_parse_from(["ascii-face", "a.png", "--chars", "ab", "--preset", "blocks"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_args_preset_and_filter_values() {
        let args = Args::parse_from([
            "ascii-face",
            "a.png",
            "--preset",
            "minimal",
            "--filter",
            "lanczos3",
        ]);
        let overrides = args.overrides();
        assert_eq!(overrides.preset, Some(Preset::Minimal));
        assert_eq!(overrides.filter, Some(Filter::Lanczos3));

        let args = Args::parse_from(["ascii-face", "a.png", "--filter", "catmull-rom"]);
        assert_eq!(args.filter, Some(ResizeFilter::CatmullRom));
    }

    #[test]
    fn test_args_output_short_and_long() {
        let args = Args::parse_from(["ascii-face", "a.png", "-o", "out.txt"]);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));

        let args = Args::parse_from(["ascii-face", "a.png", "--output", "out.txt"]);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_args_combined_options() {
        let args = Args::parse_from([
            "ascii-face",
            "a.png",
            "--width",
            "10",
            "--chars",
            " #",
            "--invert",
            "-c",
            "/tmp/ascii.toml",
            "-v",
        ]);
        assert_eq!(args.width, Some(10));
        assert_eq!(args.chars.as_deref(), Some(" #"));
        assert!(args.invert);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/ascii.toml")));
        assert!(args.verbose);
    }
}
