// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and startup flags.

use crate::application::port::{GalleryError, SaveOutcome};
use crate::application::query::ThumbnailResult;
use crate::error::Error;
use crate::media::SourceImage;
use crate::ui::{editor, gallery, notifications};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Editor(editor::Message),
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// File dialog closed; `None` when cancelled.
    ImageFileSelected(Option<PathBuf>),
    ImageLoaded {
        path: PathBuf,
        result: Result<SourceImage, Error>,
    },
    SaveCompleted(Result<SaveOutcome, GalleryError>),
    GalleryListed(Result<Vec<String>, GalleryError>),
    ThumbnailsFetched(Vec<ThumbnailResult>),
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
    /// Takes precedence over `ICED_MEME_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Takes precedence over `ICED_MEME_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
