// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`editor`] - Meme editor: controls, canvas and caption dragging
//! - [`gallery`] - Saved memes with share links
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod editor;
pub mod gallery;
pub mod notifications;
pub mod theming;
