//! Tile discovery in a render output directory.
//!
//! Scans a directory for tile files of one kind and builds a sorted
//! [`TileSet`]. Discovery is explicit: all matches are collected, parsed,
//! and sorted by (col, row); no code downstream depends on filesystem
//! enumeration order.
//!
//! A filename that starts with `<kind>_` but doesn't encode two valid
//! integer indices aborts discovery rather than being skipped silently —
//! a malformed tile name usually means the render run is broken, and a
//! stitched image with a hole is worse than an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::tile::{parse_tile_filename, ParseError, TileRef, TileSet};

/// Errors that can occur during tile discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The input directory could not be read.
    #[error("cannot read input directory {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No tiles of the requested kind were found.
    #[error("no tiles matching '{kind}_*' found in {dir}")]
    NoTiles { dir: PathBuf, kind: String },

    /// A matching filename doesn't encode valid tile coordinates.
    #[error("tile filename '{filename}': {source}")]
    Parse {
        filename: String,
        #[source]
        source: ParseError,
    },
}

/// Discover all tiles of one kind in a directory.
///
/// Every directory entry whose file name starts with `<kind>_` must parse
/// as a tile name; anything else in the directory (other kinds, previously
/// generated row-strips, the final artifact) is ignored.
///
/// # Errors
///
/// - [`DiscoveryError::Unreadable`] if the directory cannot be listed
/// - [`DiscoveryError::Parse`] if a matching filename is malformed
/// - [`DiscoveryError::NoTiles`] if nothing matched
pub fn discover(input_dir: &Path, kind: &str) -> Result<TileSet, DiscoveryError> {
    let entries = fs::read_dir(input_dir).map_err(|e| DiscoveryError::Unreadable {
        path: input_dir.to_path_buf(),
        source: e,
    })?;

    let prefix = format!("{}_", kind);
    let mut tiles = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| DiscoveryError::Unreadable {
            path: input_dir.to_path_buf(),
            source: e,
        })?;

        let filename = entry.file_name();
        let filename = filename.to_string_lossy();

        if !filename.starts_with(&prefix) {
            continue;
        }

        let name = parse_tile_filename(&filename).map_err(|e| DiscoveryError::Parse {
            filename: filename.to_string(),
            source: e,
        })?;

        tiles.push(TileRef {
            kind: name.kind,
            col: name.col,
            row: name.row,
            path: entry.path(),
        });
    }

    if tiles.is_empty() {
        return Err(DiscoveryError::NoTiles {
            dir: input_dir.to_path_buf(),
            kind: kind.to_string(),
        });
    }

    let set = TileSet::new(kind, tiles);

    debug!(
        kind = kind,
        tiles = set.len(),
        width = set.extent().width,
        height = set.extent().height,
        "Tile discovery complete"
    );

    Ok(set)
}
