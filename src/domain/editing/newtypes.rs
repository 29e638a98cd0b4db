// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for editing values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Contrast Bounds
// =============================================================================

/// Contrast bounds (0% to 200%).
pub mod contrast_bounds {
    /// Minimum contrast percentage (flat gray).
    pub const MIN: u16 = 0;
    /// Maximum contrast percentage.
    pub const MAX: u16 = 200;
    /// Default (identity) contrast percentage.
    pub const DEFAULT: u16 = 100;
}

// =============================================================================
// ContrastPercent
// =============================================================================

/// Contrast percentage, guaranteed to be within valid range (0%–200%).
///
/// 100% leaves the image untouched, 0% collapses every channel to mid-gray
/// and 200% doubles the distance of each channel from mid-gray.
///
/// # Example
///
/// ```
/// use iced_meme::domain::editing::ContrastPercent;
///
/// assert_eq!(ContrastPercent::new(150).value(), 150);
/// assert_eq!(ContrastPercent::new(500).value(), 200);
/// assert!(ContrastPercent::default().is_neutral());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastPercent(u16);

impl ContrastPercent {
    /// Creates a new contrast value, clamping to the valid range.
    #[must_use]
    pub fn new(percent: u16) -> Self {
        Self(percent.clamp(contrast_bounds::MIN, contrast_bounds::MAX))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Returns the contrast as a multiplier (e.g., 100% → 1.0, 200% → 2.0).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    /// Returns whether this contrast leaves the image unchanged.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        self.0 == contrast_bounds::DEFAULT
    }
}

impl Default for ContrastPercent {
    fn default() -> Self {
        Self(contrast_bounds::DEFAULT)
    }
}

// =============================================================================
// TextColor
// =============================================================================

/// Caption fill color, stored as opaque 8-bit RGB.
///
/// Parsed from and displayed as a CSS hex string (`#rrggbb`, `#rgb` accepted
/// on input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColor {
    r: u8,
    g: u8,
    b: u8,
}

/// Error returned when a string is not a valid hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColor(pub String);

impl fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color: {:?}", self.0)
    }
}

impl std::error::Error for InvalidColor {}

impl TextColor {
    /// Opaque white, the default caption color.
    pub const WHITE: Self = Self::from_rgb(0xff, 0xff, 0xff);

    /// Creates a color from its 8-bit channels.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the `(r, g, b)` channels.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Returns the lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for TextColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for TextColor {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidColor(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self::from_rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            // #rgb expands each nibble: #f80 == #ff8800
            3 => {
                let nibble = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

// =============================================================================
// TextPosition
// =============================================================================

/// Caption anchor in canvas pixels: horizontal center and text baseline.
///
/// Not clamped: a drag may place the caption outside the visible canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPosition {
    pub x: f32,
    pub y: f32,
}

impl TextPosition {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for TextPosition {
    fn default() -> Self {
        Self::new(50.0, 50.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
