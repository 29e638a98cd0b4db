// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the editor, the gallery, localization and
//! notifications, and translates messages into side effects like file
//! dialogs, exports and backend requests.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::I18n;
use crate::infrastructure::HttpGalleryClient;
use crate::media::TextRasterizer;
use crate::ui::editor::State as EditorState;
use crate::ui::gallery::State as GalleryState;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    editor: EditorState,
    gallery: GalleryState,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Directory receiving `meme.png`.
    export_dir: PathBuf,
    /// `None` when the HTTP client could not be built; backend actions then fail fast.
    backend: Option<HttpGalleryClient>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("editor_has_image", &self.editor.has_image())
            .field("gallery_visible", &self.gallery.is_visible())
            .field("theme_mode", &self.theme_mode)
            .field("export_dir", &self.export_dir)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    if let Some(data_dir) = paths::get_app_data_dir() {
        crate::diagnostics::install_panic_hook(data_dir);
    }

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally starts loading the image
    /// given on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = Self::from_config(i18n, &config, Arc::new(TextRasterizer::with_system_fonts()));

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = match flags.file_path {
            Some(path) => update::load_image_task(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn from_config(i18n: I18n, config: &config::Config, rasterizer: Arc<TextRasterizer>) -> Self {
        let backend = match HttpGalleryClient::new(config.backend.origin.clone()) {
            Ok(client) => {
                log::info!("Gallery backend at {}", config.backend.origin);
                Some(client)
            }
            Err(err) => {
                log::error!("Gallery backend unavailable: {err}");
                None
            }
        };

        Self {
            editor: EditorState::new(i18n.tr("editor-default-text"), rasterizer),
            i18n,
            gallery: GalleryState::default(),
            notifications: notifications::Manager::new(),
            theme_mode: config.general.theme_mode,
            export_dir: config.export.download_dir(),
            backend,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self
            .editor
            .source_path()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
        {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            editor: &mut self.editor,
            gallery: &mut self.gallery,
            notifications: &mut self.notifications,
            backend: self.backend.as_ref(),
            export_dir: &self.export_dir,
        };
        update::handle_message(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            editor: &self.editor,
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }
}
