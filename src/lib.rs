// SPDX-License-Identifier: MPL-2.0
//! `iced_meme` is a small meme editor built with the Iced GUI framework.
//!
//! Pick a picture, type a caption, drag it into place, tune the contrast,
//! then download the result or upload it to a gallery backend that lists
//! previously saved memes with share links.

#![doc(html_root_url = "https://docs.rs/iced_meme/0.1.0")]

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
