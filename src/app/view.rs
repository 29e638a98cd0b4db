// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The editor and, once requested, the gallery share one scrollable column;
//! toasts are layered on top of it.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::editor::State as EditorState;
use crate::ui::gallery::State as GalleryState;
use crate::ui::notifications::{Manager, Toast};
use iced::{
    alignment,
    widget::{Column, Container, Scrollable, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub editor: &'a EditorState,
    pub gallery: &'a GalleryState,
    pub notifications: &'a Manager,
}

/// Renders the editor, the gallery when shown, and the toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(ctx.editor.view(ctx.i18n).map(Message::Editor));

    if ctx.gallery.is_visible() {
        column = column.push(ctx.gallery.view(ctx.i18n).map(Message::Gallery));
    }

    let content = Scrollable::new(
        Container::new(column)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::MD),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
