//! Tile grid model.
//!
//! A render run writes its output as a grid of tile images named
//! `{kind}_{col}_{row}.{ext}`. This module provides the types describing
//! a discovered grid: individual tile references, the grid extent, and
//! the sorted tile set the stitcher iterates over.

mod filename;

pub use filename::{parse_tile_filename, ParseError, TileName};

use std::path::PathBuf;

/// A discovered tile file positioned in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRef {
    /// Kind tag this tile belongs to (e.g., "colour").
    pub kind: String,
    /// Column index (X coordinate, increases rightward).
    pub col: u32,
    /// Row index (Y coordinate, increases downward).
    pub row: u32,
    /// Full path to the tile file.
    pub path: PathBuf,
}

/// The (max column, max row) bounds of a discovered tile grid.
///
/// A single tile at index 0 yields an extent of (0, 0); a grid of
/// (W+1) × (H+1) tiles yields (W, H).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridExtent {
    /// Maximum column index observed.
    pub width: u32,
    /// Maximum row index observed.
    pub height: u32,
}

impl GridExtent {
    /// Number of base-10 digits needed to print the larger of the two
    /// bounds, minimum 1.
    ///
    /// Generated row-strip filenames are zero-padded to this width so
    /// that lexical and numeric ordering agree (`00`, `01`, .. `09`, `10`).
    pub fn pad_width(&self) -> usize {
        let mut n = self.width.max(self.height);
        let mut digits = 1;
        while n >= 10 {
            n /= 10;
            digits += 1;
        }
        digits
    }
}

/// All tiles of one kind discovered in a directory, sorted by (col, row).
///
/// Discovery order is filesystem-dependent, so the constructor sorts
/// explicitly; nothing downstream relies on enumeration order.
#[derive(Debug, Clone)]
pub struct TileSet {
    kind: String,
    tiles: Vec<TileRef>,
    extent: GridExtent,
}

impl TileSet {
    /// Build a tile set from discovered tiles, sorting by (col, row)
    /// and computing the grid extent.
    pub fn new(kind: impl Into<String>, mut tiles: Vec<TileRef>) -> Self {
        tiles.sort_by_key(|t| (t.col, t.row));

        let extent = GridExtent {
            width: tiles.iter().map(|t| t.col).max().unwrap_or(0),
            height: tiles.iter().map(|t| t.row).max().unwrap_or(0),
        };

        Self {
            kind: kind.into(),
            tiles,
            extent,
        }
    }

    /// Kind tag of this tile set.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Grid extent (max column, max row).
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Number of discovered tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns true if no tiles were discovered.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles, sorted by (col, row).
    pub fn tiles(&self) -> &[TileRef] {
        &self.tiles
    }

    /// Tiles of one column band, in increasing row order.
    ///
    /// May be empty for a sparse grid; gaps are not validated.
    pub fn column(&self, col: u32) -> Vec<&TileRef> {
        self.tiles.iter().filter(|t| t.col == col).collect()
    }
}
