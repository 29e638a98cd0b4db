// SPDX-License-Identifier: MPL-2.0
//! Canvas export: PNG encoding, data URLs and the `meme.png` download.

use crate::error::Result;
use crate::media::compose::Composite;
use base64::Engine as _;
use image_rs::ImageFormat;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// File name used for every download.
pub const DOWNLOAD_FILE_NAME: &str = "meme.png";

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Encodes the canvas as PNG bytes.
///
/// # Errors
///
/// Returns [`crate::error::Error::Image`] if encoding fails.
pub fn encode_png(composite: &Composite) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    composite
        .as_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encodes the canvas as a `data:image/png;base64,...` URL.
///
/// # Errors
///
/// Returns [`crate::error::Error::Image`] if PNG encoding fails.
pub fn to_data_url(composite: &Composite) -> Result<String> {
    let png = encode_png(composite)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(png);
    Ok(format!("{PNG_DATA_URL_PREFIX}{encoded}"))
}

/// Writes the canvas as [`DOWNLOAD_FILE_NAME`] inside `directory`,
/// creating the directory if needed and replacing any previous download.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save_download(composite: &Composite, directory: &Path) -> Result<PathBuf> {
    fs::create_dir_all(directory)?;
    let path = directory.join(DOWNLOAD_FILE_NAME);
    let png = encode_png(composite)?;
    fs::write(&path, png)?;
    log::info!("Exported meme to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn composite() -> Composite {
        Composite::new(RgbaImage::from_pixel(3, 2, Rgba([200, 100, 50, 255])))
    }

    #[test]
    fn encode_png_produces_decodable_image() {
        let png = encode_png(&composite()).expect("encode");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image_rs::load_from_memory(&png).expect("decode").to_rgba8();
        assert_eq!(&decoded, composite().as_image());
    }

    #[test]
    fn data_url_has_png_prefix_and_base64_payload() {
        let url = to_data_url(&composite()).expect("data url");
        let payload = url
            .strip_prefix("data:image/png;base64,")
            .expect("png data url prefix");
        let png = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .expect("valid base64");
        assert_eq!(png, encode_png(&composite()).expect("encode"));
    }

    #[test]
    fn save_download_writes_meme_png() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let target = temp_dir.path().join("Downloads");

        let path = save_download(&composite(), &target).expect("download");
        assert_eq!(path, target.join("meme.png"));
        assert!(path.exists());
    }

    #[test]
    fn save_download_replaces_previous_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(DOWNLOAD_FILE_NAME), b"stale").expect("seed file");

        let path = save_download(&composite(), temp_dir.path()).expect("download");
        let written = fs::read(path).expect("read back");
        assert_ne!(written, b"stale");
    }
}
