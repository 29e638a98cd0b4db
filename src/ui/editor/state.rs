// SPDX-License-Identifier: MPL-2.0
//! Editor state and the redraw it drives.

use super::drag::DragController;
use super::{Event, Message};
use crate::app::config::{DEFAULT_CONTRAST_PERCENT, DEFAULT_TEXT_COLOR, DEFAULT_TEXT_POSITION};
use crate::domain::editing::{ContrastPercent, TextColor, TextPosition};
use crate::media::{self, Caption, Composite, SourceImage, TextRasterizer};
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything the canvas depends on, plus the last rendered composite.
pub struct State {
    source: Option<SourceImage>,
    source_path: Option<PathBuf>,
    text: String,
    color: TextColor,
    /// Raw content of the hex field; may be mid-edit and invalid.
    color_input: String,
    contrast: ContrastPercent,
    position: TextPosition,
    drag: DragController,
    composite: Option<Composite>,
    handle: Option<Handle>,
    rasterizer: Arc<TextRasterizer>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("source_path", &self.source_path)
            .field("text", &self.text)
            .field("color", &self.color)
            .field("contrast", &self.contrast)
            .field("position", &self.position)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates an empty editor with the localized default caption.
    #[must_use]
    pub fn new(default_text: impl Into<String>, rasterizer: Arc<TextRasterizer>) -> Self {
        Self {
            source: None,
            source_path: None,
            text: default_text.into(),
            color: DEFAULT_TEXT_COLOR,
            color_input: DEFAULT_TEXT_COLOR.to_hex(),
            contrast: ContrastPercent::new(DEFAULT_CONTRAST_PERCENT),
            position: DEFAULT_TEXT_POSITION,
            drag: DragController::default(),
            composite: None,
            handle: None,
            rasterizer,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ChooseImage => return Event::PickImage,
            Message::TextChanged(text) => {
                self.text = text;
                self.refresh_composite();
            }
            Message::ColorInputChanged(input) => {
                let parsed = input.parse::<TextColor>();
                self.color_input = input;
                if let Ok(color) = parsed {
                    self.set_color(color);
                }
            }
            Message::SwatchSelected(color) => {
                self.color_input = color.to_hex();
                self.set_color(color);
            }
            Message::ContrastChanged(value) => {
                self.contrast = ContrastPercent::new(value);
                self.refresh_composite();
            }
            Message::CanvasPressed => self.drag.press(),
            Message::CanvasMoved(point) => {
                if let Some(position) = self.drag.move_to(point) {
                    self.position = position;
                    self.refresh_composite();
                }
            }
            Message::CanvasReleased => self.drag.release(),
            Message::Download if self.composite.is_some() => return Event::Download,
            Message::Save if self.composite.is_some() => return Event::Save,
            Message::Download | Message::Save => {}
            Message::ShowGallery => return Event::ShowGallery,
        }
        Event::None
    }

    /// Replaces the source picture and redraws.
    pub fn set_image(&mut self, path: PathBuf, source: SourceImage) {
        let (width, height) = source.original_dimensions();
        log::info!("Loaded {} ({width}x{height})", path.display());
        self.source = Some(source);
        self.source_path = Some(path);
        self.refresh_composite();
    }

    fn set_color(&mut self, color: TextColor) {
        if self.color != color {
            self.color = color;
            self.refresh_composite();
        }
    }

    /// Full redraw from the cached source. Without a source nothing is drawn.
    pub fn refresh_composite(&mut self) {
        let Some(source) = &self.source else {
            return;
        };

        let caption = Caption {
            text: &self.text,
            color: self.color,
            position: self.position,
        };

        // A failed caption still leaves the picture at the current contrast;
        // the canvas never keeps a frame from older settings.
        let rendered = media::render(source, self.contrast, &caption, &self.rasterizer)
            .or_else(|err| {
                log::warn!("Caption could not be drawn, showing the image only: {err}");
                let bare = Caption { text: "", ..caption };
                media::render(source, self.contrast, &bare, &self.rasterizer)
            });

        match rendered {
            Ok(composite) => {
                self.handle = Some(Handle::from_rgba(
                    composite.width(),
                    composite.height(),
                    composite.rgba_bytes().to_vec(),
                ));
                self.composite = Some(composite);
            }
            Err(err) => {
                log::warn!("Canvas redraw failed: {err}");
                self.composite = None;
                self.handle = None;
            }
        }
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn color(&self) -> TextColor {
        self.color
    }

    #[must_use]
    pub fn color_input(&self) -> &str {
        &self.color_input
    }

    #[must_use]
    pub fn contrast(&self) -> ContrastPercent {
        self.contrast
    }

    #[must_use]
    pub fn position(&self) -> TextPosition {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn composite(&self) -> Option<&Composite> {
        self.composite.as_ref()
    }

    pub(super) fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;
    use image_rs::{DynamicImage, Rgba, RgbaImage};

    fn editor() -> State {
        State::new("Your text here", Arc::new(TextRasterizer::without_fonts()))
    }

    fn gray_source(width: u32, height: u32) -> SourceImage {
        SourceImage::from_dynamic(&DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([100, 150, 200, 255]),
        )))
    }

    fn loaded_editor(width: u32, height: u32) -> State {
        let mut state = editor();
        state.set_image(PathBuf::from("cat.png"), gray_source(width, height));
        state
    }

    #[test]
    fn starts_with_defaults_and_no_canvas() {
        let state = editor();
        assert_eq!(state.text(), "Your text here");
        assert_eq!(state.color(), TextColor::WHITE);
        assert_eq!(state.color_input(), "#ffffff");
        assert_eq!(state.contrast().value(), 100);
        assert_eq!(state.position(), TextPosition::new(50.0, 50.0));
        assert!(!state.is_dragging());
        assert!(!state.has_image());
        assert!(state.composite().is_none());
    }

    #[test]
    fn edits_without_image_do_not_render() {
        let mut state = editor();
        state.update(Message::TextChanged("hello".into()));
        state.update(Message::ContrastChanged(150));
        assert!(state.composite().is_none());
        assert_eq!(state.text(), "hello");
    }

    #[test]
    fn loading_an_image_renders_a_fitted_canvas() {
        let state = loaded_editor(1200, 400);
        let composite = state.composite().expect("composite");
        assert_eq!((composite.width(), composite.height()), (600, 200));
        assert!(state.handle().is_some());
    }

    #[test]
    fn contrast_change_redraws_with_new_percentage() {
        let mut state = loaded_editor(10, 10);
        state.update(Message::ContrastChanged(0));

        let composite = state.composite().expect("composite");
        assert_eq!(composite.as_image().get_pixel(0, 0).0, [128, 128, 128, 255]);
    }

    #[test]
    fn control_characters_in_caption_do_not_freeze_the_canvas() {
        let mut state = loaded_editor(10, 10);
        state.update(Message::TextChanged("x\u{1}".into()));
        state.update(Message::ContrastChanged(0));

        let composite = state.composite().expect("composite");
        assert_eq!(composite.as_image().get_pixel(0, 0).0, [128, 128, 128, 255]);

        state.update(Message::ContrastChanged(200));
        let composite = state.composite().expect("composite");
        assert_eq!(composite.as_image().get_pixel(0, 0).0, [73, 173, 255, 255]);
    }

    #[test]
    fn contrast_is_clamped_to_range() {
        let mut state = editor();
        state.update(Message::ContrastChanged(500));
        assert_eq!(state.contrast().value(), 200);
    }

    #[test]
    fn invalid_color_input_keeps_previous_color() {
        let mut state = editor();
        state.update(Message::ColorInputChanged("#12".into()));
        assert_eq!(state.color_input(), "#12");
        assert_eq!(state.color(), TextColor::WHITE);

        state.update(Message::ColorInputChanged("#123456".into()));
        assert_eq!(state.color(), TextColor::from_rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn swatch_updates_color_and_field() {
        let mut state = editor();
        state.update(Message::SwatchSelected(TextColor::from_rgb(0, 0, 0)));
        assert_eq!(state.color(), TextColor::from_rgb(0, 0, 0));
        assert_eq!(state.color_input(), "#000000");
    }

    #[test]
    fn drag_sequence_moves_caption_then_stops() {
        let mut state = loaded_editor(300, 200);

        state.update(Message::CanvasMoved(Point::new(10.0, 10.0)));
        assert_eq!(state.position(), TextPosition::new(50.0, 50.0));

        state.update(Message::CanvasPressed);
        state.update(Message::CanvasMoved(Point::new(120.0, 80.5)));
        assert_eq!(state.position(), TextPosition::new(120.0, 80.5));

        state.update(Message::CanvasReleased);
        state.update(Message::CanvasMoved(Point::new(5.0, 5.0)));
        assert_eq!(state.position(), TextPosition::new(120.0, 80.5));
    }

    #[test]
    fn export_events_require_an_image() {
        let mut empty = editor();
        assert_eq!(empty.update(Message::Download), Event::None);
        assert_eq!(empty.update(Message::Save), Event::None);

        let mut loaded = loaded_editor(20, 20);
        assert_eq!(loaded.update(Message::Download), Event::Download);
        assert_eq!(loaded.update(Message::Save), Event::Save);
    }

    #[test]
    fn shell_requests_are_forwarded() {
        let mut state = editor();
        assert_eq!(state.update(Message::ChooseImage), Event::PickImage);
        assert_eq!(state.update(Message::ShowGallery), Event::ShowGallery);
    }
}
