// SPDX-License-Identifier: MPL-2.0
//! Image handling for the meme canvas.
//!
//! Loading and fitting the source picture, drawing the caption, applying the
//! contrast filter and exporting the result.

pub mod compose;
pub mod export;
pub mod image;
pub mod image_transform;
pub mod text_overlay;

// Re-export commonly used types
pub use compose::{render, Composite};
pub use image::{load_image, SourceImage};
pub use image_transform::MAX_CANVAS_WIDTH;
pub use text_overlay::{Caption, TextRasterizer};
