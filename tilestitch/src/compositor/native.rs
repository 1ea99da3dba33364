//! In-process compositing built on the `image` crate.
//!
//! Loads every input into an `RgbaImage`, lays them out along the
//! requested axis, and saves the result. The output format is inferred
//! from the output path's extension.

use std::path::{Path, PathBuf};

use image::{GenericImage, RgbaImage};
use tracing::debug;

use super::{CompositionError, ImageCompositor};

/// Compositor that concatenates images in memory.
///
/// Deterministic and dependency-free at runtime, at the cost of holding
/// one full strip of tiles in memory per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeCompositor;

impl NativeCompositor {
    pub fn new() -> Self {
        Self
    }

    fn load_all(inputs: &[PathBuf]) -> Result<Vec<RgbaImage>, CompositionError> {
        if inputs.is_empty() {
            return Err(CompositionError::NoInputs);
        }
        inputs
            .iter()
            .map(|path| Ok(image::open(path)?.to_rgba8()))
            .collect()
    }

    fn save(canvas: &RgbaImage, output: &Path) -> Result<(), CompositionError> {
        canvas.save(output)?;
        debug!(
            output = %output.display(),
            width = canvas.width(),
            height = canvas.height(),
            "Composited image written"
        );
        Ok(())
    }
}

impl ImageCompositor for NativeCompositor {
    fn append_vertical(&self, inputs: &[PathBuf], output: &Path) -> Result<(), CompositionError> {
        let images = Self::load_all(inputs)?;

        let width = images.iter().map(|i| i.width()).max().unwrap_or(0);
        let height = images.iter().map(|i| i.height()).sum();

        let mut canvas = RgbaImage::new(width, height);
        let mut y = 0;
        for img in &images {
            canvas
                .copy_from(img, 0, y)
                .map_err(|e| CompositionError::Image(e.to_string()))?;
            y += img.height();
        }

        Self::save(&canvas, output)
    }

    fn append_horizontal(
        &self,
        inputs: &[PathBuf],
        output: &Path,
    ) -> Result<(), CompositionError> {
        let images = Self::load_all(inputs)?;

        let width = images.iter().map(|i| i.width()).sum();
        let height = images.iter().map(|i| i.height()).max().unwrap_or(0);

        let mut canvas = RgbaImage::new(width, height);
        let mut x = 0;
        for img in &images {
            canvas
                .copy_from(img, x, 0)
                .map_err(|e| CompositionError::Image(e.to_string()))?;
            x += img.width();
        }

        Self::save(&canvas, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    fn write_tile(dir: &Path, name: &str, width: u32, height: u32, shade: u8) -> PathBuf {
        let img = RgbaImage::from_pixel(width, height, Rgba([shade, shade, shade, 255]));
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_append_vertical_stacks_heights() {
        let temp = TempDir::new().unwrap();
        let a = write_tile(temp.path(), "a.png", 4, 3, 10);
        let b = write_tile(temp.path(), "b.png", 4, 5, 20);
        let out = temp.path().join("out.png");

        NativeCompositor::new()
            .append_vertical(&[a, b], &out)
            .unwrap();

        let result = image::open(&out).unwrap().to_rgba8();
        assert_eq!(result.width(), 4);
        assert_eq!(result.height(), 8);
        // First input on top, second below it
        assert_eq!(result.get_pixel(0, 0)[0], 10);
        assert_eq!(result.get_pixel(0, 3)[0], 20);
    }

    #[test]
    fn test_append_horizontal_sums_widths() {
        let temp = TempDir::new().unwrap();
        let a = write_tile(temp.path(), "a.png", 3, 4, 10);
        let b = write_tile(temp.path(), "b.png", 5, 4, 20);
        let out = temp.path().join("out.png");

        NativeCompositor::new()
            .append_horizontal(&[a, b], &out)
            .unwrap();

        let result = image::open(&out).unwrap().to_rgba8();
        assert_eq!(result.width(), 8);
        assert_eq!(result.height(), 4);
        assert_eq!(result.get_pixel(0, 0)[0], 10);
        assert_eq!(result.get_pixel(3, 0)[0], 20);
    }

    #[test]
    fn test_append_vertical_uneven_widths_left_aligned() {
        let temp = TempDir::new().unwrap();
        let a = write_tile(temp.path(), "a.png", 6, 2, 10);
        let b = write_tile(temp.path(), "b.png", 2, 2, 20);
        let out = temp.path().join("out.png");

        NativeCompositor::new()
            .append_vertical(&[a, b], &out)
            .unwrap();

        let result = image::open(&out).unwrap().to_rgba8();
        assert_eq!(result.width(), 6);
        assert_eq!(result.height(), 4);
        // Area right of the narrow image stays transparent
        assert_eq!(result.get_pixel(5, 3)[3], 0);
    }

    #[test]
    fn test_append_single_input() {
        let temp = TempDir::new().unwrap();
        let a = write_tile(temp.path(), "a.png", 2, 2, 10);
        let out = temp.path().join("out.png");

        NativeCompositor::new()
            .append_vertical(&[a], &out)
            .unwrap();

        let result = image::open(&out).unwrap().to_rgba8();
        assert_eq!((result.width(), result.height()), (2, 2));
    }

    #[test]
    fn test_append_empty_inputs() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out.png");

        let result = NativeCompositor::new().append_vertical(&[], &out);
        assert!(matches!(result, Err(CompositionError::NoInputs)));
    }

    #[test]
    fn test_append_unreadable_input() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.png");
        let out = temp.path().join("out.png");

        let result = NativeCompositor::new().append_vertical(&[missing], &out);
        assert!(result.is_err());
    }
}
