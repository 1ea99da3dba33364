//! ImageMagick-backed compositing.
//!
//! Spawns the ImageMagick CLI for each append operation:
//! `-append` stacks images vertically, `+append` concatenates them
//! horizontally. The process exit status is always checked and stderr is
//! surfaced in the error; a failed invocation never passes silently.
//!
//! Defaults to the ImageMagick 7 `magick` entry point; older systems can
//! select the legacy `convert` binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{CompositionError, ImageCompositor};

/// Compositor that shells out to ImageMagick.
#[derive(Debug, Clone)]
pub struct MagickCompositor {
    command: String,
}

impl Default for MagickCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl MagickCompositor {
    /// Create a compositor using the `magick` entry point.
    pub fn new() -> Self {
        Self {
            command: "magick".to_string(),
        }
    }

    /// Use a different ImageMagick binary (e.g., legacy `convert`).
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The configured ImageMagick binary name.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Check that the configured ImageMagick binary is runnable.
    pub fn available(&self) -> Result<(), CompositionError> {
        let result = Command::new(&self.command).arg("-version").output();

        match result {
            Ok(output) if output.status.success() => Ok(()),
            Ok(output) => Err(CompositionError::ToolFailed {
                command: self.command.clone(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            }),
            Err(e) => Err(CompositionError::ToolNotFound {
                command: self.command.clone(),
                message: e.to_string(),
            }),
        }
    }

    fn append(
        &self,
        mode: &str,
        inputs: &[PathBuf],
        output: &Path,
    ) -> Result<(), CompositionError> {
        if inputs.is_empty() {
            return Err(CompositionError::NoInputs);
        }

        debug!(
            command = %self.command,
            mode = mode,
            inputs = inputs.len(),
            output = %output.display(),
            "Running ImageMagick append"
        );

        let result = Command::new(&self.command)
            .arg(mode)
            .args(inputs)
            .arg(output)
            .output()
            .map_err(|e| CompositionError::ToolNotFound {
                command: self.command.clone(),
                message: e.to_string(),
            })?;

        if !result.status.success() {
            return Err(CompositionError::ToolFailed {
                command: self.command.clone(),
                stderr: String::from_utf8_lossy(&result.stderr).to_string(),
            });
        }

        Ok(())
    }
}

impl ImageCompositor for MagickCompositor {
    fn append_vertical(&self, inputs: &[PathBuf], output: &Path) -> Result<(), CompositionError> {
        self.append("-append", inputs, output)
    }

    fn append_horizontal(
        &self,
        inputs: &[PathBuf],
        output: &Path,
    ) -> Result<(), CompositionError> {
        self.append("+append", inputs, output)
    }
}
