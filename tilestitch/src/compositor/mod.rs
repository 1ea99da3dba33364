//! Image compositing capability.
//!
//! This module defines the [`ImageCompositor`] trait which allows different
//! compositing backends to be used interchangeably: an in-process backend
//! built on the `image` crate, or an external ImageMagick process. The
//! stitching logic only depends on the trait, so it is unit-testable with
//! a fake compositor.

mod magick;
mod native;

pub use magick::MagickCompositor;
pub use native::NativeCompositor;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while compositing images.
#[derive(Debug, Error)]
pub enum CompositionError {
    /// An append operation was requested over an empty input list.
    #[error("no input images to composite")]
    NoInputs,

    /// The external compositing command could not be spawned.
    #[error("compositing command '{command}' not found: {message}")]
    ToolNotFound { command: String, message: String },

    /// The external compositing command exited with a failure status.
    #[error("compositing command '{command}' failed: {stderr}")]
    ToolFailed { command: String, stderr: String },

    /// Image decoding or encoding failed.
    #[error("image processing error: {0}")]
    Image(String),

    /// I/O error reading or writing an image file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<image::ImageError> for CompositionError {
    fn from(e: image::ImageError) -> Self {
        CompositionError::Image(e.to_string())
    }
}

/// Capability for concatenating images along one axis.
///
/// Implementations must produce a single output file from the given
/// inputs and report failure rather than leaving a partial artifact
/// behind silently.
///
/// # Implementors
///
/// - [`NativeCompositor`] - in-process compositing with the `image` crate
/// - [`MagickCompositor`] - spawns ImageMagick (`magick`/`convert`)
pub trait ImageCompositor {
    /// Stack the input images top-to-bottom into a single output image.
    ///
    /// Inputs narrower than the widest image are aligned to the left edge.
    fn append_vertical(&self, inputs: &[PathBuf], output: &Path) -> Result<(), CompositionError>;

    /// Concatenate the input images left-to-right into a single output image.
    ///
    /// Inputs shorter than the tallest image are aligned to the top edge.
    fn append_horizontal(&self, inputs: &[PathBuf], output: &Path)
        -> Result<(), CompositionError>;
}

impl<T: ImageCompositor + ?Sized> ImageCompositor for Box<T> {
    fn append_vertical(&self, inputs: &[PathBuf], output: &Path) -> Result<(), CompositionError> {
        (**self).append_vertical(inputs, output)
    }

    fn append_horizontal(
        &self,
        inputs: &[PathBuf],
        output: &Path,
    ) -> Result<(), CompositionError> {
        (**self).append_horizontal(inputs, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingCompositor;

    impl ImageCompositor for FailingCompositor {
        fn append_vertical(
            &self,
            _inputs: &[PathBuf],
            _output: &Path,
        ) -> Result<(), CompositionError> {
            Err(CompositionError::NoInputs)
        }

        fn append_horizontal(
            &self,
            _inputs: &[PathBuf],
            _output: &Path,
        ) -> Result<(), CompositionError> {
            Err(CompositionError::NoInputs)
        }
    }

    #[test]
    fn test_trait_object_usable() {
        let compositor: Box<dyn ImageCompositor> = Box::new(FailingCompositor);
        let result = compositor.append_vertical(&[], Path::new("out.png"));
        assert!(matches!(result, Err(CompositionError::NoInputs)));
    }

    #[test]
    fn test_composition_error_display() {
        let err = CompositionError::ToolFailed {
            command: "magick".to_string(),
            stderr: "unable to open image".to_string(),
        };
        assert!(err.to_string().contains("magick"));
        assert!(err.to_string().contains("unable to open image"));

        let err = CompositionError::NoInputs;
        assert_eq!(err.to_string(), "no input images to composite");
    }
}
