//! Tile filename parsing for render tile coordinates.
//!
//! Parses filenames in the renderer's output format:
//! `{kind}_{col}_{row}.{ext}`
//!
//! Examples:
//! - `colour_0_0.png` (top-left tile of the "colour" channel)
//! - `colour_10_3.png` (column 10, row 3)
//! - `depth_pass_2_7.png` (kind "depth_pass", column 2, row 7)
//!
//! The coordinates are unsigned grid indices; column increases rightward
//! and row increases downward. Indices are accepted at any digit width
//! (`colour_07_3.png` and `colour_7_3.png` name the same tile).
//!
//! The kind is whatever precedes the final two numeric segments, so kinds
//! containing underscores parse correctly.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Parsed tile filename containing grid coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileName {
    /// Kind tag (e.g., "colour"), everything before the coordinate segments
    pub kind: String,
    /// Tile column (X coordinate, increases rightward)
    pub col: u32,
    /// Tile row (Y coordinate, increases downward)
    pub row: u32,
}

/// Error parsing a tile filename.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Filename doesn't match the `{kind}_{col}_{row}.{ext}` pattern.
    #[error("filename doesn't match tile pattern '<kind>_<col>_<row>.<ext>'")]
    InvalidPattern,
    /// Column index is invalid.
    #[error("invalid column index: {0}")]
    InvalidColumn(String),
    /// Row index is invalid.
    #[error("invalid row index: {0}")]
    InvalidRow(String),
}

/// Get the tile filename regex pattern.
///
/// Pattern: `<kind>_<col>_<row>.<ext>`
/// Example: `colour_10_3.png`
///
/// We capture:
/// - Group "kind": kind tag (greedy, may itself contain underscores)
/// - Group "col": column index (unsigned integer)
/// - Group "row": row index (unsigned integer)
fn tile_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Pattern breakdown:
        // (?P<kind>.+)          - kind tag, greedy up to the last two segments
        // _(?P<col>\d+)         - column index
        // _(?P<row>\d+)         - row index
        // \.(?:[A-Za-z0-9]+)    - file extension
        Regex::new(r"^(?P<kind>.+)_(?P<col>\d+)_(?P<row>\d+)\.(?:[A-Za-z0-9]+)$").unwrap()
    })
}

/// Parse a tile filename to extract grid coordinates.
///
/// # Arguments
///
/// * `filename` - Bare file name to parse (e.g., "colour_10_3.png")
///
/// # Returns
///
/// Parsed kind and coordinates, or an error if the filename doesn't
/// encode two valid integer indices.
///
/// # Examples
///
/// ```
/// use tilestitch::tile::parse_tile_filename;
///
/// let tile = parse_tile_filename("colour_10_3.png").unwrap();
/// assert_eq!(tile.kind, "colour");
/// assert_eq!(tile.col, 10);
/// assert_eq!(tile.row, 3);
/// ```
pub fn parse_tile_filename(filename: &str) -> Result<TileName, ParseError> {
    let pattern = tile_pattern();

    let captures = pattern
        .captures(filename)
        .ok_or(ParseError::InvalidPattern)?;

    let kind = captures.name("kind").unwrap().as_str().to_string();

    let col_str = captures.name("col").unwrap().as_str();
    let col = col_str
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidColumn(col_str.to_string()))?;

    let row_str = captures.name("row").unwrap().as_str();
    let row = row_str
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidRow(row_str.to_string()))?;

    Ok(TileName { kind, col, row })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_tile() {
        let tile = parse_tile_filename("colour_0_0.png").unwrap();
        assert_eq!(tile.kind, "colour");
        assert_eq!(tile.col, 0);
        assert_eq!(tile.row, 0);
    }

    #[test]
    fn test_parse_multi_digit_indices() {
        let tile = parse_tile_filename("colour_10_3.png").unwrap();
        assert_eq!(tile.kind, "colour");
        assert_eq!(tile.col, 10);
        assert_eq!(tile.row, 3);
    }

    #[test]
    fn test_parse_zero_padded_indices() {
        // Padding on input is accepted; indices parse by integer value
        let tile = parse_tile_filename("colour_07_03.png").unwrap();
        assert_eq!(tile.col, 7);
        assert_eq!(tile.row, 3);
    }

    #[test]
    fn test_parse_kind_with_underscore() {
        let tile = parse_tile_filename("depth_pass_2_7.png").unwrap();
        assert_eq!(tile.kind, "depth_pass");
        assert_eq!(tile.col, 2);
        assert_eq!(tile.row, 7);
    }

    #[test]
    fn test_parse_numeric_kind_segment() {
        // Greedy kind capture: only the final two segments are coordinates
        let tile = parse_tile_filename("colour_1_2_3.png").unwrap();
        assert_eq!(tile.kind, "colour_1");
        assert_eq!(tile.col, 2);
        assert_eq!(tile.row, 3);
    }

    #[test]
    fn test_parse_other_extensions() {
        let tile = parse_tile_filename("colour_4_5.jpeg").unwrap();
        assert_eq!(tile.col, 4);
        assert_eq!(tile.row, 5);

        let tile = parse_tile_filename("colour_4_5.tif").unwrap();
        assert_eq!(tile.col, 4);
        assert_eq!(tile.row, 5);
    }

    #[test]
    fn test_parse_invalid_missing_row() {
        let result = parse_tile_filename("colour_5.png");
        assert!(matches!(result, Err(ParseError::InvalidPattern)));
    }

    #[test]
    fn test_parse_invalid_non_numeric_indices() {
        let result = parse_tile_filename("colour_a_b.png");
        assert!(matches!(result, Err(ParseError::InvalidPattern)));
    }

    #[test]
    fn test_parse_invalid_negative_index() {
        let result = parse_tile_filename("colour_-1_0.png");
        assert!(matches!(result, Err(ParseError::InvalidPattern)));
    }

    #[test]
    fn test_parse_invalid_no_extension() {
        let result = parse_tile_filename("colour_1_2");
        assert!(matches!(result, Err(ParseError::InvalidPattern)));
    }

    #[test]
    fn test_parse_invalid_empty_filename() {
        let result = parse_tile_filename("");
        assert!(matches!(result, Err(ParseError::InvalidPattern)));
    }

    #[test]
    fn test_parse_invalid_unrelated_file() {
        let result = parse_tile_filename("readme.txt");
        assert!(matches!(result, Err(ParseError::InvalidPattern)));
    }

    #[test]
    fn test_parse_col_overflow() {
        let result = parse_tile_filename("colour_9999999999999_0.png");
        assert!(matches!(result, Err(ParseError::InvalidColumn(_))));
    }

    #[test]
    fn test_parse_row_overflow() {
        let result = parse_tile_filename("colour_0_9999999999999.png");
        assert!(matches!(result, Err(ParseError::InvalidRow(_))));
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidPattern;
        assert!(err.to_string().contains("doesn't match"));

        let err = ParseError::InvalidColumn("9999999999999".to_string());
        assert_eq!(err.to_string(), "invalid column index: 9999999999999");

        let err = ParseError::InvalidRow("9999999999999".to_string());
        assert_eq!(err.to_string(), "invalid row index: 9999999999999");
    }

    #[test]
    fn test_tile_name_equality() {
        let a = parse_tile_filename("colour_1_2.png").unwrap();
        let b = parse_tile_filename("colour_01_02.png").unwrap();
        assert_eq!(a, b);

        let c = parse_tile_filename("colour_2_1.png").unwrap();
        assert_ne!(a, c);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_formatted_names_always_parse(
                kind in "[a-z]{1,12}",
                col in 0u32..=1_000_000,
                row in 0u32..=1_000_000
            ) {
                let filename = format!("{}_{}_{}.png", kind, col, row);
                let tile = parse_tile_filename(&filename)?;
                prop_assert_eq!(tile.kind, kind);
                prop_assert_eq!(tile.col, col);
                prop_assert_eq!(tile.row, row);
            }

            #[test]
            fn test_padded_names_parse_to_same_coords(
                col in 0u32..=9999,
                row in 0u32..=9999,
                pad in 1usize..=8
            ) {
                let filename = format!("colour_{:0w$}_{:0w$}.png", col, row, w = pad);
                let tile = parse_tile_filename(&filename)?;
                prop_assert_eq!(tile.col, col);
                prop_assert_eq!(tile.row, row);
            }
        }
    }
}
