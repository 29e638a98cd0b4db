// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! # Available Services
//!
//! - [`thumbnails`]: Concurrent download of gallery previews

pub mod thumbnails;

// Re-export main types
pub use thumbnails::{fetch_thumbnails, ThumbnailResult};
