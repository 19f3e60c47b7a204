//! Top-level command handler: resolve settings, convert, emit.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::args::Args;
use crate::ascii::Canvas;
use crate::backend::RustBackend;
use crate::config::{Config, ConfigError};
use crate::convert::{ensure_image_file, Converter};
use crate::error::Error;

/// Failures surfaced to the user by the binary. Every one exits with code 1.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("Failed to convert image: {0}")]
    Convert(#[source] Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] Error),
}

/// Run one conversion described by `args`.
///
/// The input path is checked before anything else, so a missing file
/// never reaches the pipeline.
///
/// # Errors
/// See [`RunError`].
pub fn run(args: &Args) -> Result<(), RunError> {
    if let Err(Error::NotFound(path)) = ensure_image_file(&args.image) {
        return Err(RunError::NotFound(path));
    }

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let options = config.resolve(args.overrides());
    log::debug!("Resolved options: {:?}", options);

    let canvas = Converter::new(RustBackend::new(options.filter))
        .convert(&args.image, &options)
        .map_err(RunError::Convert)?;

    match &args.output {
        Some(path) => write_to_file(&canvas, path).map_err(RunError::Output)?,
        None => write_to_stdout(&canvas).map_err(RunError::Output)?,
    }
    Ok(())
}

/// Write the canvas to `path`, always followed by a trailing newline.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be written.
pub fn write_to_file(canvas: &Canvas, path: &Path) -> Result<(), Error> {
    std::fs::write(path, format!("{canvas}\n")).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Wrote {} rows to {}", canvas.rows().len(), path.display());
    Ok(())
}

fn write_to_stdout(canvas: &Canvas) -> Result<(), Error> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{canvas}")
        .and_then(|()| stdout.flush())
        .map_err(|source| Error::Io {
            path: PathBuf::from("<stdout>"),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{render, GridDimensions, Ramp};
    use clap::Parser;

    #[test]
    fn test_missing_image_reported_as_not_found() {
        let args = Args::parse_from(["ascii-face", "/no/such/face.png"]);
        let err = run(&args).unwrap_err();
        assert!(matches!(err, RunError::NotFound(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_missing_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("face.png");
        image::GrayImage::new(4, 4).save(&image).unwrap();

        let args = Args::parse_from([
            "ascii-face",
            image.to_str().unwrap(),
            "--config",
            "/no/such/config.toml",
        ]);
        assert!(matches!(run(&args).unwrap_err(), RunError::Config(_)));
    }

    #[test]
    fn test_conversion_failure_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("face.png");
        image::GrayImage::new(4, 4).save(&image).unwrap();

        let args = Args::parse_from(["ascii-face", image.to_str().unwrap(), "--width", "0"]);
        let err = run(&args).unwrap_err();
        assert!(err.to_string().starts_with("Failed to convert image:"));
    }

    #[test]
    fn test_write_to_file_appends_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let ramp = Ramp::new(" #").unwrap();
        let dims = GridDimensions { columns: 2, rows: 2 };
        let canvas = render(&[255, 0, 0, 255], dims, &ramp).unwrap();

        write_to_file(&canvas, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# \n #\n");
    }

    #[test]
    fn test_write_to_unwritable_path() {
        let ramp = Ramp::new("x").unwrap();
        let canvas = render(&[0], GridDimensions { columns: 1, rows: 1 }, &ramp).unwrap();
        let err = write_to_file(&canvas, Path::new("/no/such/dir/out.txt")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
