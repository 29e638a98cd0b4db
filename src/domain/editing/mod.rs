// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for meme editing:
//! - [`ContrastPercent`]: Contrast filter percentage
//! - [`TextColor`]: Caption fill color
//! - [`TextPosition`]: Caption anchor on the canvas

pub mod newtypes;

pub use newtypes::{contrast_bounds, ContrastPercent, InvalidColor, TextColor, TextPosition};
