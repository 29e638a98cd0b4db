// SPDX-License-Identifier: MPL-2.0
//! Editor layout: controls on top, canvas below, actions under the canvas.

use super::{Message, State};
use crate::app::config::COLOR_SWATCHES;
use crate::domain::editing::{contrast_bounds, TextColor};
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use iced::widget::{button, container, image, mouse_area, slider, text, text_input, Column, Row};
use iced::{alignment, mouse, Color, Element, Length, Theme};

impl State {
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let choose_button = button(text(i18n.tr("editor-choose-image")))
            .on_press(Message::ChooseImage)
            .padding([spacing::XS, spacing::MD]);

        let text_row = Column::new()
            .spacing(spacing::XXS)
            .push(text(i18n.tr("editor-text-label")).size(typography::CAPTION))
            .push(
                text_input(&i18n.tr("editor-text-placeholder"), self.text())
                    .on_input(Message::TextChanged)
                    .padding(spacing::XS)
                    .size(typography::BODY),
            );

        let mut color_row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(text(i18n.tr("editor-color-label")).size(typography::BODY))
            .push(
                text_input("#ffffff", self.color_input())
                    .on_input(Message::ColorInputChanged)
                    .padding(spacing::XXS)
                    .size(typography::BODY)
                    .width(Length::Fixed(sizing::COLOR_INPUT_WIDTH)),
            );
        for swatch in COLOR_SWATCHES {
            color_row = color_row.push(swatch_button(swatch, swatch == self.color()));
        }

        let percent = self.contrast().value().to_string();
        let contrast_row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                text(i18n.tr_with_args("editor-contrast-label", &[("percent", &percent)]))
                    .size(typography::BODY),
            )
            .push(
                slider(
                    f32::from(contrast_bounds::MIN)..=f32::from(contrast_bounds::MAX),
                    f32::from(self.contrast().value()),
                    contrast_message,
                )
                .step(1.0)
                .width(Length::Fixed(sizing::CONTRAST_SLIDER_WIDTH)),
            );

        let mut content = Column::new()
            .spacing(spacing::MD)
            .push(text(i18n.tr("editor-heading")).size(typography::TITLE_MD))
            .push(choose_button)
            .push(text_row)
            .push(color_row)
            .push(contrast_row)
            .push(self.canvas(i18n));

        if self.has_image() {
            content = content.push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(button(text(i18n.tr("editor-download"))).on_press(Message::Download))
                    .push(button(text(i18n.tr("editor-save"))).on_press(Message::Save)),
            );
        }

        content
            .push(
                button(text(i18n.tr("editor-show-gallery")))
                    .on_press(Message::ShowGallery)
                    .style(button::secondary),
            )
            .into()
    }

    fn canvas<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let (Some(handle), Some(composite)) = (self.handle(), self.composite()) else {
            return container(text(i18n.tr("editor-no-image")).size(typography::BODY))
                .padding(spacing::LG)
                .into();
        };

        #[allow(clippy::cast_precision_loss)]
        let picture = image(handle.clone())
            .width(Length::Fixed(composite.width() as f32))
            .height(Length::Fixed(composite.height() as f32));

        let interaction = if self.is_dragging() {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        };

        Column::new()
            .spacing(spacing::XXS)
            .push(
                mouse_area(picture)
                    .on_press(Message::CanvasPressed)
                    .on_release(Message::CanvasReleased)
                    .on_move(Message::CanvasMoved)
                    .interaction(interaction),
            )
            .push(text(i18n.tr("editor-drag-hint")).size(typography::CAPTION))
            .into()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn contrast_message(value: f32) -> Message {
    Message::ContrastChanged(value.round().clamp(0.0, f32::from(u16::MAX)) as u16)
}

fn swatch_button<'a>(color: TextColor, selected: bool) -> Element<'a, Message> {
    let (r, g, b) = color.rgb();
    let fill = Color::from_rgb8(r, g, b);

    button(text(""))
        .on_press(Message::SwatchSelected(color))
        .width(Length::Fixed(sizing::SWATCH))
        .height(Length::Fixed(sizing::SWATCH))
        .style(move |theme: &Theme, _status| button::Style {
            background: Some(fill.into()),
            border: iced::Border {
                color: if selected {
                    theme.palette().primary
                } else {
                    theme.extended_palette().background.strong.color
                },
                width: if selected {
                    border::WIDTH_MD
                } else {
                    border::WIDTH_SM
                },
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_values_round_to_whole_percent() {
        assert!(matches!(contrast_message(149.6), Message::ContrastChanged(150)));
        assert!(matches!(contrast_message(0.2), Message::ContrastChanged(0)));
    }
}
