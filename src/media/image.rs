// SPDX-License-Identifier: MPL-2.0
//! Source image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, Result};
use crate::media::image_transform;
use image_rs::{DynamicImage, RgbaImage};
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A decoded source picture, already fitted to the canvas width.
///
/// Decoding and downscaling happen once per loaded file; every redraw starts
/// from the fitted bitmap. Pixels are stored in an `Arc` so messages carrying
/// the image stay cheap to clone.
#[derive(Debug, Clone)]
pub struct SourceImage {
    original_width: u32,
    original_height: u32,
    fitted: Arc<RgbaImage>,
}

impl SourceImage {
    /// Builds a source image from an already decoded picture.
    #[must_use]
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let (original_width, original_height) = rgba.dimensions();
        let fitted = image_transform::fit_to_canvas(&rgba);
        Self {
            original_width,
            original_height,
            fitted: Arc::new(fitted),
        }
    }

    /// Decodes encoded bytes (PNG, JPEG, GIF, WebP, BMP).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the bytes are not a supported image.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let image = image_rs::load_from_memory(bytes)?;
        Ok(Self::from_dynamic(&image))
    }

    /// Dimensions of the file as decoded, before fitting.
    #[must_use]
    pub fn original_dimensions(&self) -> (u32, u32) {
        (self.original_width, self.original_height)
    }

    /// The bitmap scaled to the canvas width (never upscaled).
    #[must_use]
    pub fn fitted(&self) -> &RgbaImage {
        &self.fitted
    }
}

/// Load an image from the given path.
///
/// Supports common raster formats as well as SVG, which is rasterized at its
/// intrinsic size using resvg.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Image`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Image`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let bytes = fs::read(path)?;

    if extension.eq_ignore_ascii_case("svg") {
        rasterize_svg(&bytes)
    } else {
        SourceImage::decode(&bytes)
    }
}

fn rasterize_svg(svg_data: &[u8]) -> Result<SourceImage> {
    let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())
        .map_err(|e| Error::Image(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Image("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Image("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let rgba = image_transform::pixmap_to_rgba(&pixmap);
    Ok(SourceImage::from_dynamic(&DynamicImage::ImageRgba8(rgba)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.original_dimensions(), (4, 2));
        assert_eq!(data.fitted().dimensions(), (4, 2));
    }

    #[test]
    fn wide_png_is_fitted_on_load() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("wide.png");
        RgbaImage::from_pixel(1200, 300, Rgba([0, 0, 255, 255]))
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.original_dimensions(), (1200, 300));
        assert_eq!(data.fitted().dimensions(), (600, 150));
    }

    #[test]
    fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let data = load_image(&svg_path).expect("svg should load successfully");
        assert_eq!(data.original_dimensions(), (6, 3));
        assert_eq!(data.fitted().get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_image_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn load_svg_with_zero_dimensions_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("zero.svg");
        let svg = r"<svg xmlns='http://www.w3.org/2000/svg' width='0' height='10'></svg>";
        fs::write(&svg_path, svg).expect("write svg");

        match load_image(&svg_path) {
            Err(Error::Image(_)) => {}
            other => panic!("expected Image error, got {other:?}"),
        }
    }
}
