//! CLI error types.

use thiserror::Error;

use tilestitch::compositor::CompositionError;
use tilestitch::stitcher::StitchError;

/// Errors surfaced to the user by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration problem (config file or flag resolution).
    #[error("configuration error: {0}")]
    Config(String),

    /// The selected compositing backend is unusable.
    #[error(transparent)]
    Compositor(#[from] CompositionError),

    /// The stitch run failed.
    #[error(transparent)]
    Stitch(#[from] StitchError),
}
