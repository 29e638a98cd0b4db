// SPDX-License-Identifier: MPL-2.0
//! Gallery of memes stored by the backend.
//!
//! The listing is fetched on demand; each entry keeps its server path, the
//! absolute display URL and, once downloaded, a thumbnail.

pub mod share;
mod view;

use iced::widget::image::Handle;

pub use share::{encode_component, facebook_share_url, whatsapp_share_url};

/// Download state of an entry's preview.
#[derive(Debug, Clone, Default)]
pub enum Thumbnail {
    #[default]
    Loading,
    Ready(Handle),
    Unavailable,
}

impl Thumbnail {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Thumbnail::Ready(_))
    }
}

#[derive(Debug, Clone)]
pub struct GalleryEntry {
    pub path: String,
    pub url: String,
    pub thumbnail: Thumbnail,
}

/// Where a share button sends the entry's URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Facebook,
    WhatsApp,
    Link,
}

impl ShareTarget {
    /// Text placed on the clipboard for `display_url`.
    #[must_use]
    pub fn link_for(self, display_url: &str) -> String {
        match self {
            ShareTarget::Facebook => facebook_share_url(display_url),
            ShareTarget::WhatsApp => whatsapp_share_url(display_url),
            ShareTarget::Link => display_url.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Share { index: usize, target: ShareTarget },
}

/// Requests the gallery hands back to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    CopyToClipboard(String),
}

#[derive(Debug, Default)]
pub struct State {
    entries: Vec<GalleryEntry>,
    visible: bool,
}

/// Absolute URL of a stored meme: the origin with the server path appended.
#[must_use]
pub fn display_url(origin: &str, path: &str) -> String {
    format!("{origin}{path}")
}

impl State {
    /// Replaces the listing and shows the gallery.
    ///
    /// Returns the display URLs whose thumbnails should be fetched.
    pub fn populate(&mut self, origin: &str, paths: Vec<String>) -> Vec<String> {
        self.entries = paths
            .into_iter()
            .map(|path| GalleryEntry {
                url: display_url(origin, &path),
                path,
                thumbnail: Thumbnail::Loading,
            })
            .collect();
        self.visible = true;
        self.entries.iter().map(|entry| entry.url.clone()).collect()
    }

    /// Attaches downloaded thumbnail bytes to every entry showing `url`.
    pub fn set_thumbnail(&mut self, url: &str, bytes: Vec<u8>) {
        let handle = Handle::from_bytes(bytes);
        for entry in self.entries.iter_mut().filter(|entry| entry.url == url) {
            entry.thumbnail = Thumbnail::Ready(handle.clone());
        }
    }

    /// Marks the preview of every entry showing `url` as unavailable.
    pub fn set_thumbnail_failed(&mut self, url: &str) {
        for entry in self.entries.iter_mut().filter(|entry| entry.url == url) {
            entry.thumbnail = Thumbnail::Unavailable;
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Share { index, target } => self
                .entries
                .get(index)
                .map_or(Event::None, |entry| {
                    Event::CopyToClipboard(target.link_for(&entry.url))
                }),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
