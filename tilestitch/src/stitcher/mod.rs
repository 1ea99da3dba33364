//! Two-pass tile stitching.
//!
//! Pass 1 stacks each column band of tiles into a row-strip image
//! (`<kind>-slice-<col>.png`); pass 2 concatenates the row-strips
//! left-to-right into the final `<kind>.png`. Row-strip names are
//! zero-padded to the grid's digit width so lexical and numeric ordering
//! agree, although ordering here is always explicit.
//!
//! Compositing goes through the [`ImageCompositor`](crate::compositor::ImageCompositor)
//! capability and every call is checked; a failed composite aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::compositor::{CompositionError, ImageCompositor};
use crate::discovery::{discover, DiscoveryError};
use crate::tile::GridExtent;

/// Errors that can occur during a stitch run.
#[derive(Debug, Error)]
pub enum StitchError {
    /// Tile discovery failed.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// A compositing step failed.
    #[error(transparent)]
    Composition(#[from] CompositionError),
}

/// Result of a completed stitch run.
#[derive(Debug, Clone)]
pub struct StitchReport {
    /// Kind tag that was stitched.
    pub kind: String,

    /// Grid extent of the discovered tiles.
    pub extent: GridExtent,

    /// Number of tiles composited.
    pub tile_count: usize,

    /// Row-strip files generated by pass 1, in column order.
    ///
    /// Already deleted from disk if the stitcher was configured not to
    /// keep them.
    pub slice_paths: Vec<PathBuf>,

    /// Path of the final stitched image.
    pub output_path: PathBuf,
}

/// Stitches a grid of tiles into a single image.
pub struct Stitcher<C: ImageCompositor> {
    compositor: C,
    keep_slices: bool,
}

impl<C: ImageCompositor> Stitcher<C> {
    /// Create a stitcher using the given compositing backend.
    ///
    /// Row-strip files are kept on disk by default.
    pub fn new(compositor: C) -> Self {
        Self {
            compositor,
            keep_slices: true,
        }
    }

    /// Configure whether row-strip files survive the run.
    pub fn with_keep_slices(mut self, keep_slices: bool) -> Self {
        self.keep_slices = keep_slices;
        self
    }

    /// Stitch all tiles of `kind` found in `input_dir`.
    ///
    /// Writes `<kind>-slice-<col>.png` per non-empty column band and the
    /// final `<kind>.png`, all into `input_dir`. Re-running over an
    /// unchanged directory regenerates the same filenames.
    ///
    /// # Errors
    ///
    /// Fatal on the first discovery, parse, or composition failure; there
    /// is no partial-success mode.
    pub fn stitch(&self, input_dir: &Path, kind: &str) -> Result<StitchReport, StitchError> {
        let tiles = discover(input_dir, kind)?;
        let extent = tiles.extent();
        let pad = extent.pad_width();

        info!(
            kind = kind,
            tiles = tiles.len(),
            width = extent.width,
            height = extent.height,
            "Stitching tile grid"
        );

        // Pass 1: stack each column band into a row-strip
        let mut slice_paths = Vec::new();
        for col in 0..=extent.width {
            let band = tiles.column(col);
            if band.is_empty() {
                warn!(kind = kind, col = col, "No tiles in column band, skipping");
                continue;
            }

            let inputs: Vec<PathBuf> = band.iter().map(|t| t.path.clone()).collect();
            let slice_path = input_dir.join(format!("{}-slice-{:0pad$}.png", kind, col, pad = pad));

            self.compositor.append_vertical(&inputs, &slice_path)?;
            debug!(
                col = col,
                tiles = inputs.len(),
                slice = %slice_path.display(),
                "Row-strip composited"
            );
            slice_paths.push(slice_path);
        }

        // Pass 2: concatenate the row-strips into the final image
        let output_path = input_dir.join(format!("{}.png", kind));
        self.compositor
            .append_horizontal(&slice_paths, &output_path)?;

        if !self.keep_slices {
            for slice in &slice_paths {
                if let Err(e) = fs::remove_file(slice) {
                    warn!(slice = %slice.display(), error = %e, "Failed to remove row-strip");
                }
            }
        }

        info!(
            kind = kind,
            slices = slice_paths.len(),
            output = %output_path.display(),
            "Stitch complete"
        );

        Ok(StitchReport {
            kind: kind.to_string(),
            extent,
            tile_count: tiles.len(),
            slice_paths,
            output_path,
        })
    }
}
