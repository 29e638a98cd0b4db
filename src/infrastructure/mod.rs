// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Gallery backend over HTTP (implements [`GalleryService`])
//!
//! [`GalleryService`]: crate::application::port::GalleryService

pub mod http;

// Re-export main types for convenience
pub use http::HttpGalleryClient;
