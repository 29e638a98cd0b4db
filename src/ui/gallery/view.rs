// SPDX-License-Identifier: MPL-2.0
use super::{GalleryEntry, Message, ShareTarget, State, Thumbnail};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, container, image, text, Column, Row};
use iced::{Element, Length};

/// Thumbnails per row.
const COLUMNS: usize = 3;

impl State {
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("gallery-heading")).size(typography::TITLE_MD));

        if self.entries.is_empty() {
            return content
                .push(text(i18n.tr("gallery-empty")).size(typography::BODY))
                .into();
        }

        let items: Vec<Element<'a, Message>> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| entry_card(index, entry, i18n))
            .collect();

        let mut items = items.into_iter().peekable();
        while items.peek().is_some() {
            let row = Row::with_children(items.by_ref().take(COLUMNS)).spacing(spacing::SM);
            content = content.push(row);
        }

        content.into()
    }
}

fn entry_card<'a>(index: usize, entry: &'a GalleryEntry, i18n: &'a I18n) -> Element<'a, Message> {
    let placeholder = |key: &str| -> Element<'a, Message> {
        container(text(i18n.tr(key)).size(typography::CAPTION))
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .padding(spacing::MD)
            .into()
    };

    let preview: Element<'a, Message> = match &entry.thumbnail {
        Thumbnail::Ready(handle) => image(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .into(),
        Thumbnail::Loading => placeholder("gallery-thumbnail-loading"),
        Thumbnail::Unavailable => placeholder("gallery-thumbnail-unavailable"),
    };

    let share = |label: String, target: ShareTarget| {
        button(text(label).size(typography::CAPTION))
            .on_press(Message::Share { index, target })
            .padding([spacing::XXS, spacing::XS])
            .style(button::secondary)
    };

    let actions = Row::new()
        .spacing(spacing::XXS)
        .push(share(i18n.tr("gallery-share-facebook"), ShareTarget::Facebook))
        .push(share(i18n.tr("gallery-share-whatsapp"), ShareTarget::WhatsApp))
        .push(share(i18n.tr("gallery-copy-link"), ShareTarget::Link));

    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
        .push(preview)
        .push(actions)
        .into()
}
