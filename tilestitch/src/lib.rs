//! TileStitch - stitch grids of rendered image tiles into a single image.
//!
//! A renderer that works in tiles writes its output as a grid of files
//! named `{kind}_{col}_{row}.{ext}`. This library discovers such a grid,
//! stacks each column band into a row-strip image, and concatenates the
//! row-strips into one final image.
//!
//! Compositing is a capability ([`compositor::ImageCompositor`]) with an
//! in-process backend built on the `image` crate and an ImageMagick
//! subprocess backend.
//!
//! # Example
//!
//! ```no_run
//! use tilestitch::compositor::NativeCompositor;
//! use tilestitch::stitcher::Stitcher;
//! use std::path::Path;
//!
//! let stitcher = Stitcher::new(NativeCompositor::new());
//! let report = stitcher.stitch(Path::new("render/out"), "colour")?;
//! println!("stitched {} tiles into {}", report.tile_count, report.output_path.display());
//! # Ok::<(), tilestitch::stitcher::StitchError>(())
//! ```

pub mod compositor;
pub mod config;
pub mod discovery;
pub mod logging;
pub mod stitcher;
pub mod tile;
