// SPDX-License-Identifier: MPL-2.0
//! Meme composition.
//!
//! [`render`] is the single redraw routine: it starts from the fitted source
//! bitmap, applies the contrast filter, then draws the caption outline and
//! fill on top. Every call is a full redraw; nothing is cached between calls.

use crate::domain::editing::ContrastPercent;
use crate::error::Result;
use crate::media::image::SourceImage;
use crate::media::image_transform;
use crate::media::text_overlay::{Caption, TextRasterizer};
use image_rs::RgbaImage;
use std::sync::Arc;

/// The rendered canvas: what the user sees, downloads and uploads.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    pixels: Arc<RgbaImage>,
}

impl Composite {
    #[must_use]
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Straight-alpha RGBA bytes, row-major.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    #[must_use]
    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Redraws the canvas for the given source and caption settings.
///
/// # Errors
///
/// Returns [`crate::error::Error::Render`] if the canvas cannot be allocated
/// or the caption cannot be laid out.
pub fn render(
    source: &SourceImage,
    contrast: ContrastPercent,
    caption: &Caption<'_>,
    rasterizer: &TextRasterizer,
) -> Result<Composite> {
    let mut base = source.fitted().clone();
    image_transform::apply_contrast(&mut base, contrast);

    if caption.is_blank() {
        return Ok(Composite::new(base));
    }

    let mut pixmap = image_transform::rgba_to_pixmap(&base)?;
    rasterizer.draw(&mut pixmap, caption)?;
    Ok(Composite::new(image_transform::pixmap_to_rgba(&pixmap)))
}
