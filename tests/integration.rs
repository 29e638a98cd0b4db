// SPDX-License-Identifier: MPL-2.0
use iced_meme::app::config::{self, Config, GeneralConfig, DEFAULT_BACKEND_ORIGIN};
use iced_meme::domain::editing::{ContrastPercent, TextColor, TextPosition};
use iced_meme::i18n::I18n;
use iced_meme::media::{self, export, Caption, TextRasterizer, MAX_CANVAS_WIDTH};
use iced_meme::ui::theming::ThemeMode;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use tempfile::tempdir;

fn write_png(path: &std::path::Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([120, 140, 160, 255]))
        .save_with_format(path, ImageFormat::Png)
        .expect("write fixture");
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("editor-default-text"), "Your text here");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Light,
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("editor-default-text"), "Votre texte ici");
}

#[test]
fn test_cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let dir = tempdir().expect("temp dir");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(&config_path, "[general]\ntheme_mode = \"Dark\"\n").expect("write config");

    let loaded = config::load_from_path(&config_path).expect("load config");

    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.backend.origin, DEFAULT_BACKEND_ORIGIN);
    assert!(loaded.export.directory.is_none());
}

#[test]
fn test_wide_image_is_fitted_and_exported() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("wide.png");
    write_png(&input, 1200, 400);

    let source = media::load_image(&input).expect("load fixture");
    assert_eq!(source.original_dimensions(), (1200, 400));

    let caption = Caption {
        text: "",
        color: TextColor::default(),
        position: TextPosition::default(),
    };
    let composite = media::render(
        &source,
        ContrastPercent::default(),
        &caption,
        &TextRasterizer::without_fonts(),
    )
    .expect("render");
    assert_eq!((composite.width(), composite.height()), (MAX_CANVAS_WIDTH, 200));

    let out_dir = dir.path().join("downloads");
    let written = export::save_download(&composite, &out_dir).expect("download");
    assert_eq!(written, out_dir.join("meme.png"));

    let reread = image_rs::open(&written).expect("decode export").to_rgba8();
    assert_eq!(reread.dimensions(), (MAX_CANVAS_WIDTH, 200));
    let Rgba([r, g, b, a]) = *reread.get_pixel(10, 10);
    assert!(r.abs_diff(120) <= 1 && g.abs_diff(140) <= 1 && b.abs_diff(160) <= 1);
    assert_eq!(a, 255);
}

#[test]
fn test_small_image_is_not_upscaled() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("small.png");
    write_png(&input, 300, 150);

    let source = media::load_image(&input).expect("load fixture");

    assert_eq!(source.fitted().dimensions(), (300, 150));
}

#[test]
fn test_zero_contrast_flattens_to_gray() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("flat.png");
    write_png(&input, 20, 10);
    let source = media::load_image(&input).expect("load fixture");

    let caption = Caption {
        text: "   ",
        color: TextColor::default(),
        position: TextPosition::default(),
    };
    let composite = media::render(
        &source,
        ContrastPercent::new(0),
        &caption,
        &TextRasterizer::without_fonts(),
    )
    .expect("render");

    let pixel = composite.as_image().get_pixel(5, 5);
    for channel in &pixel.0[..3] {
        assert!((i16::from(*channel) - 128).abs() <= 1, "channel {channel}");
    }
    assert_eq!(pixel.0[3], 255);
}

#[test]
fn test_data_url_is_png() {
    let dir = tempdir().expect("temp dir");
    let input = dir.path().join("tiny.png");
    write_png(&input, 4, 4);
    let source = media::load_image(&input).expect("load fixture");
    let caption = Caption {
        text: "",
        color: TextColor::default(),
        position: TextPosition::default(),
    };
    let composite = media::render(
        &source,
        ContrastPercent::default(),
        &caption,
        &TextRasterizer::without_fonts(),
    )
    .expect("render");

    let url = export::to_data_url(&composite).expect("data url");

    assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    assert!(media::load_image(dir.path().join("nope.png")).is_err());
}
