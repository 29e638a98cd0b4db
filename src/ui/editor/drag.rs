// SPDX-License-Identifier: MPL-2.0
//! Caption drag controller.
//!
//! Two states: a press on the canvas starts dragging, every move while
//! dragging relocates the caption to the pointer, a release stops.

use crate::domain::editing::TextPosition;
use iced::Point;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragController {
    #[default]
    Idle,
    Dragging,
}

impl DragController {
    pub fn press(&mut self) {
        *self = DragController::Dragging;
    }

    pub fn release(&mut self) {
        *self = DragController::Idle;
    }

    /// Pointer moved to `position` (canvas-relative).
    ///
    /// Returns the new caption anchor while dragging, `None` when idle. The
    /// position is not clamped to the canvas.
    #[must_use]
    pub fn move_to(&self, position: Point) -> Option<TextPosition> {
        match self {
            DragController::Dragging => Some(TextPosition::new(position.x, position.y)),
            DragController::Idle => None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragController::Dragging)
    }
}
