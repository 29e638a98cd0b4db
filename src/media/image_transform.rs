// SPDX-License-Identifier: MPL-2.0
//! Pixel-level transformations used by the composer: canvas fitting,
//! the contrast filter, and conversions to and from `tiny_skia` pixmaps.

use crate::domain::editing::ContrastPercent;
use crate::error::{Error, Result};
use image_rs::{imageops::FilterType, Rgba, RgbaImage};
use tiny_skia::{ColorU8, Pixmap};

/// Widest canvas the composer will produce, in pixels.
pub const MAX_CANVAS_WIDTH: u32 = 600;

// ==========================================================================
// Canvas fitting
// ==========================================================================

/// Computes the canvas size for a source of the given dimensions.
///
/// The scale is `min(1, MAX_CANVAS_WIDTH / width)`: wide images shrink
/// uniformly to exactly `MAX_CANVAS_WIDTH`, narrower ones keep their size.
/// Fractional results are truncated, and both sides stay at least 1 pixel.
#[must_use]
pub fn fit_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width <= MAX_CANVAS_WIDTH {
        return (width.max(1), height.max(1));
    }

    let scale = f64::from(MAX_CANVAS_WIDTH) / f64::from(width);
    // height * scale < height, so the cast cannot overflow
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let fitted_height = (f64::from(height) * scale) as u32;
    (MAX_CANVAS_WIDTH, fitted_height.max(1))
}

/// Returns a copy of `image` fitted to the canvas width.
#[must_use]
pub fn fit_to_canvas(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let (fitted_width, fitted_height) = fit_dimensions(width, height);
    if (fitted_width, fitted_height) == (width, height) {
        return image.clone();
    }
    image_rs::imageops::resize(image, fitted_width, fitted_height, FilterType::Lanczos3)
}

// ==========================================================================
// Contrast filter
// ==========================================================================

/// Builds the per-channel lookup table for a contrast percentage.
///
/// Matches the CSS `contrast()` filter: `c' = (c - 0.5) * p + 0.5` on
/// normalized channels, clamped to the displayable range.
fn contrast_table(contrast: ContrastPercent) -> [u8; 256] {
    let factor = contrast.as_factor();
    let mut table = [0u8; 256];
    for (value, slot) in table.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let adjusted = (value as f32 - 127.5) * factor + 127.5;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            *slot = adjusted.round().clamp(0.0, 255.0) as u8;
        }
    }
    table
}

/// Applies the contrast filter in place. Alpha is left untouched.
pub fn apply_contrast(image: &mut RgbaImage, contrast: ContrastPercent) {
    if contrast.is_neutral() {
        return;
    }

    let table = contrast_table(contrast);
    for Rgba([r, g, b, _]) in image.pixels_mut() {
        *r = table[usize::from(*r)];
        *g = table[usize::from(*g)];
        *b = table[usize::from(*b)];
    }
}

// ==========================================================================
// Pixmap conversions
// ==========================================================================

/// Copies straight-alpha RGBA pixels into a premultiplied pixmap.
///
/// # Errors
///
/// Returns [`Error::Render`] if the pixmap cannot be allocated
/// (zero-sized or absurdly large image).
pub fn rgba_to_pixmap(image: &RgbaImage) -> Result<Pixmap> {
    let (width, height) = image.dimensions();
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| Error::Render(format!("cannot allocate {width}x{height} pixmap")))?;

    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Ok(pixmap)
}

/// Copies a premultiplied pixmap back into straight-alpha RGBA pixels.
#[must_use]
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let color = src.demultiply();
        *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }
    image
}
