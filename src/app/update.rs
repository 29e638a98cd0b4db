// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application root.

use super::Message;
use crate::application::port::{GalleryError, GalleryService, SaveOutcome};
use crate::application::query::{fetch_thumbnails, ThumbnailResult};
use crate::error::Error;
use crate::i18n::I18n;
use crate::infrastructure::HttpGalleryClient;
use crate::media::{self, export, SourceImage};
use crate::ui::editor::{self, State as EditorState};
use crate::ui::gallery::{self, State as GalleryState};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::{Path, PathBuf};

/// Extensions offered by the "Choose image" dialog.
const DIALOG_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub editor: &'a mut EditorState,
    pub gallery: &'a mut GalleryState,
    pub notifications: &'a mut notifications::Manager,
    pub backend: Option<&'a HttpGalleryClient>,
    pub export_dir: &'a Path,
}

pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Editor(message) => handle_editor_message(ctx, message),
        Message::Gallery(message) => handle_gallery_message(ctx, message),
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::ImageFileSelected(Some(path)) => load_image_task(path),
        Message::ImageFileSelected(None) => Task::none(),
        Message::ImageLoaded { path, result } => {
            handle_image_loaded(ctx, path, result);
            Task::none()
        }
        Message::SaveCompleted(result) => {
            ctx.notifications.push(save_notification(&result));
            Task::none()
        }
        Message::GalleryListed(result) => handle_gallery_listed(ctx, result),
        Message::ThumbnailsFetched(results) => {
            handle_thumbnails_fetched(ctx, results);
            Task::none()
        }
        Message::Tick(_) => {
            ctx.notifications.tick();
            Task::none()
        }
    }
}

fn handle_editor_message(ctx: &mut UpdateContext<'_>, message: editor::Message) -> Task<Message> {
    match ctx.editor.update(message) {
        editor::Event::None => Task::none(),
        editor::Event::PickImage => open_image_dialog(ctx.i18n.tr("dialog-image-filter")),
        editor::Event::Download => {
            handle_download(ctx);
            Task::none()
        }
        editor::Event::Save => handle_save(ctx),
        editor::Event::ShowGallery => handle_show_gallery(ctx),
    }
}

fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    match ctx.gallery.update(message) {
        gallery::Event::None => Task::none(),
        gallery::Event::CopyToClipboard(contents) => {
            ctx.notifications
                .push(Notification::info("notification-link-copied"));
            iced::clipboard::write(contents)
        }
    }
}

fn open_image_dialog(filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, &DIALOG_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::ImageFileSelected,
    )
}

/// Decodes `path` off the update loop.
pub fn load_image_task(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let result = media::load_image(&path);
            (path, result)
        },
        |(path, result)| Message::ImageLoaded { path, result },
    )
}

/// A picture that cannot be decoded leaves the editor untouched; only a
/// warning is logged.
fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    path: PathBuf,
    result: Result<SourceImage, Error>,
) {
    match result {
        Ok(source) => ctx.editor.set_image(path, source),
        Err(err) => log::warn!("Could not load {}: {err}", path.display()),
    }
}

fn handle_download(ctx: &mut UpdateContext<'_>) {
    let Some(composite) = ctx.editor.composite() else {
        return;
    };

    let notification = match export::save_download(composite, ctx.export_dir) {
        Ok(path) => Notification::success("notification-download-success")
            .with_arg("path", path.display().to_string()),
        Err(err) => {
            let target = ctx.export_dir.join(export::DOWNLOAD_FILE_NAME);
            log::error!("Download to {} failed: {err}", target.display());
            Notification::error("notification-download-error")
                .with_arg("path", target.display().to_string())
        }
    };
    ctx.notifications.push(notification);
}

fn handle_save(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(composite) = ctx.editor.composite() else {
        return Task::none();
    };

    let data_url = match export::to_data_url(composite) {
        Ok(url) => url,
        Err(err) => {
            log::error!("Could not encode the meme: {err}");
            ctx.notifications
                .push(Notification::error("notification-save-error"));
            return Task::none();
        }
    };

    let Some(client) = ctx.backend.cloned() else {
        ctx.notifications
            .push(Notification::error("notification-server-unreachable"));
        return Task::none();
    };

    log::info!("Uploading meme ({} bytes)", data_url.len());
    Task::perform(
        async move { client.save(data_url).await },
        Message::SaveCompleted,
    )
}

/// Maps a save result to the toast shown to the user.
pub fn save_notification(result: &Result<SaveOutcome, GalleryError>) -> Notification {
    match result {
        Ok(SaveOutcome::Saved(message)) => {
            log::info!("Meme saved: {message}");
            Notification::success("notification-save-success")
        }
        Ok(SaveOutcome::Rejected) => Notification::error("notification-save-error"),
        Err(err) => {
            log::warn!("{err}");
            Notification::error("notification-server-unreachable")
        }
    }
}

fn handle_show_gallery(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(client) = ctx.backend.cloned() else {
        ctx.notifications
            .push(Notification::error("notification-gallery-error"));
        return Task::none();
    };

    Task::perform(async move { client.list().await }, Message::GalleryListed)
}

fn handle_gallery_listed(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<String>, GalleryError>,
) -> Task<Message> {
    let (paths, client) = match (result, ctx.backend) {
        (Ok(paths), Some(client)) => (paths, client.clone()),
        (Ok(_), None) => return Task::none(),
        (Err(err), _) => {
            log::warn!("{err}");
            ctx.notifications
                .push(Notification::error("notification-gallery-error"));
            return Task::none();
        }
    };

    let urls = ctx.gallery.populate(client.origin(), paths);
    if urls.is_empty() {
        return Task::none();
    }

    Task::perform(fetch_thumbnails(client, urls), Message::ThumbnailsFetched)
}

fn handle_thumbnails_fetched(ctx: &mut UpdateContext<'_>, results: Vec<ThumbnailResult>) {
    for (url, result) in results {
        match result {
            Ok(bytes) => ctx.gallery.set_thumbnail(&url, bytes),
            Err(err) => {
                log::warn!("Thumbnail {url}: {err}");
                ctx.gallery.set_thumbnail_failed(&url);
            }
        }
    }
}
