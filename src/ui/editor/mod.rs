// SPDX-License-Identifier: MPL-2.0
//! Meme editor screen.
//!
//! This module follows a "state down, messages up" pattern: widgets emit
//! [`Message`]s, [`State::update`] applies the local ones and returns an
//! [`Event`] for anything the application shell must perform (file dialog,
//! export, network).

pub mod drag;
mod state;
mod view;

pub use drag::DragController;
pub use state::State;

use crate::domain::editing::TextColor;
use iced::Point;

/// Messages emitted directly by the editor widgets.
#[derive(Debug, Clone)]
pub enum Message {
    ChooseImage,
    TextChanged(String),
    ColorInputChanged(String),
    SwatchSelected(TextColor),
    ContrastChanged(u16),
    CanvasPressed,
    /// Pointer position relative to the canvas origin.
    CanvasMoved(Point),
    CanvasReleased,
    Download,
    Save,
    ShowGallery,
}

/// Requests the editor hands back to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    PickImage,
    Download,
    Save,
    ShowGallery,
}
