// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and editor constants.

use crate::domain::editing::{contrast_bounds, TextColor, TextPosition};

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Origin of the gallery backend when `[backend] origin` is not set.
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://127.0.0.1:5000";

// ==========================================================================
// Editor Defaults
// ==========================================================================

/// Initial caption color.
pub const DEFAULT_TEXT_COLOR: TextColor = TextColor::WHITE;

/// Initial contrast percentage.
pub const DEFAULT_CONTRAST_PERCENT: u16 = contrast_bounds::DEFAULT;

/// Initial caption anchor, in canvas pixels.
pub const DEFAULT_TEXT_POSITION: TextPosition = TextPosition { x: 50.0, y: 50.0 };

/// Preset colors offered next to the hex input.
pub const COLOR_SWATCHES: [TextColor; 6] = [
    TextColor::WHITE,
    TextColor::from_rgb(0, 0, 0),
    TextColor::from_rgb(0xff, 0xd7, 0x00),
    TextColor::from_rgb(0xe5, 0x39, 0x35),
    TextColor::from_rgb(0x43, 0xa0, 0x47),
    TextColor::from_rgb(0x1e, 0x88, 0xe5),
];

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 750.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_text_position_matches_domain_default() {
        assert_eq!(DEFAULT_TEXT_POSITION, TextPosition::default());
    }

    #[test]
    fn swatches_start_with_default_color() {
        assert_eq!(COLOR_SWATCHES[0], DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn default_window_fits_the_canvas() {
        assert!(WINDOW_DEFAULT_WIDTH > crate::media::MAX_CANVAS_WIDTH as f32);
    }
}
