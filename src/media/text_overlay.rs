// SPDX-License-Identifier: MPL-2.0
//! Caption rasterization.
//!
//! The caption is described as a one-element SVG document and drawn by resvg
//! straight onto the canvas pixmap. `paint-order="stroke"` reproduces the
//! outline-then-fill order of a 2D canvas `strokeText` + `fillText` pair.

use crate::domain::editing::{TextColor, TextPosition};
use crate::error::{Error, Result};
use quick_xml::escape::escape;
use resvg::usvg;
use std::borrow::Cow;
use std::fmt;
use tiny_skia::{Pixmap, Transform};

/// Caption font size in pixels.
pub const FONT_SIZE_PX: f32 = 30.0;

/// Width of the black outline drawn under the fill.
pub const STROKE_WIDTH_PX: f32 = 2.0;

/// Font families tried in order; the first one installed wins.
pub const FONT_FAMILY: &str = "Arial, 'Liberation Sans', Helvetica, 'DejaVu Sans', sans-serif";

/// Outline color of the caption.
const STROKE_COLOR: &str = "#000000";

/// What to write on the canvas and where.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Caption<'a> {
    pub text: &'a str,
    pub color: TextColor,
    /// Horizontal center and baseline of the text.
    pub position: TextPosition,
}

impl Caption<'_> {
    /// Returns true when drawing this caption would not change any pixel.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Characters allowed in XML 1.0 character data.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Drops characters an SVG document cannot carry (C0 controls, `U+FFFE`,
/// `U+FFFF`). They have no glyph, so the drawn caption is unchanged.
fn xml_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

/// Builds the SVG document describing `caption` on a `width` x `height` canvas.
#[must_use]
pub fn caption_svg(width: u32, height: u32, caption: &Caption<'_>) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" text-anchor="middle" "#,
            r#"fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}" paint-order="stroke" "#,
            r#"xml:space="preserve">{text}</text></svg>"#
        ),
        w = width,
        h = height,
        x = caption.position.x,
        y = caption.position.y,
        family = FONT_FAMILY,
        size = FONT_SIZE_PX,
        fill = caption.color.to_hex(),
        stroke = STROKE_COLOR,
        stroke_width = STROKE_WIDTH_PX,
        text = escape(xml_text(caption.text).as_ref()),
    )
}

/// Draws captions with a font database loaded once per session.
pub struct TextRasterizer {
    options: usvg::Options<'static>,
}

impl fmt::Debug for TextRasterizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextRasterizer")
            .field("font_faces", &self.font_count())
            .finish()
    }
}

impl Default for TextRasterizer {
    fn default() -> Self {
        Self::with_system_fonts()
    }
}

impl TextRasterizer {
    /// Creates a rasterizer backed by the fonts installed on this machine.
    #[must_use]
    pub fn with_system_fonts() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        log::debug!(
            "Loaded {} font faces for caption rendering",
            options.fontdb.len()
        );
        Self { options }
    }

    /// Creates a rasterizer with an empty font database.
    ///
    /// Captions render as nothing; useful where only the image path matters.
    #[must_use]
    pub fn without_fonts() -> Self {
        Self {
            options: usvg::Options::default(),
        }
    }

    /// Number of font faces available to captions.
    #[must_use]
    pub fn font_count(&self) -> usize {
        self.options.fontdb.len()
    }

    /// Draws `caption` over the current content of `pixmap`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the generated SVG cannot be parsed.
    pub fn draw(&self, pixmap: &mut Pixmap, caption: &Caption<'_>) -> Result<()> {
        if caption.is_blank() {
            return Ok(());
        }

        let svg = caption_svg(pixmap.width(), pixmap.height(), caption);
        let tree =
            usvg::Tree::from_str(&svg, &self.options).map_err(|e| Error::Render(e.to_string()))?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caption(text: &str) -> Caption<'_> {
        Caption {
            text,
            color: TextColor::from_rgb(0xff, 0x00, 0x80),
            position: TextPosition::new(120.5, 64.0),
        }
    }

    #[test]
    fn svg_places_text_centered_on_position() {
        let svg = caption_svg(300, 200, &caption("hello"));
        assert!(svg.contains(r#"width="300" height="200""#));
        assert!(svg.contains(r#"x="120.5" y="64""#));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(">hello</text>"));
    }

    #[test]
    fn svg_strokes_before_filling() {
        let svg = caption_svg(10, 10, &caption("x"));
        assert!(svg.contains(r##"fill="#ff0080""##));
        assert!(svg.contains(r##"stroke="#000000""##));
        assert!(svg.contains(r#"stroke-width="2""#));
        assert!(svg.contains(r#"paint-order="stroke""#));
        assert!(svg.contains(r#"font-size="30""#));
    }

    #[test]
    fn svg_escapes_markup_in_text() {
        let svg = caption_svg(10, 10, &caption(r#"<b>"Tom" & 'Jerry'</b>"#));
        assert!(!svg.contains("<b>"));
        assert!(svg.contains("&lt;b&gt;"));
        assert!(svg.contains("&amp;"));
    }

    #[test]
    fn svg_output_parses_as_document() {
        let svg = caption_svg(40, 20, &caption("a < b"));
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default());
        assert!(tree.is_ok());
    }

    #[test]
    fn svg_drops_characters_xml_cannot_carry() {
        let svg = caption_svg(40, 20, &caption("a\u{1}b\u{b}c\u{c}d\u{FFFE}e\u{FFFF}"));
        assert!(svg.contains(">abcde</text>"));
        assert!(usvg::Tree::from_str(&svg, &usvg::Options::default()).is_ok());
    }

    #[test]
    fn svg_keeps_tabs_newlines_and_astral_characters() {
        assert_eq!(xml_text("a\tb\nc\r😀"), "a\tb\nc\r😀");
        assert!(matches!(xml_text("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn blank_caption_leaves_pixels_untouched() {
        let rasterizer = TextRasterizer::without_fonts();
        let mut pixmap = Pixmap::new(8, 8).expect("pixmap");
        pixmap.fill(tiny_skia::Color::from_rgba8(10, 20, 30, 255));
        let before = pixmap.clone();

        rasterizer
            .draw(&mut pixmap, &caption("   "))
            .expect("blank caption draws nothing");
        assert_eq!(pixmap.data(), before.data());
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(caption("").is_blank());
        assert!(caption(" \t").is_blank());
        assert!(!caption(" a ").is_blank());
    }
}
