// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only plain data (strings, bytes, JSON values), ensuring the
//! application layer remains independent of concrete HTTP clients.
//!
//! # Available Ports
//!
//! - [`gallery`]: Remote meme storage (save, list, fetch)
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can be moved into Iced tasks
//! - Methods return `Result` with port-specific error types

pub mod gallery;

// Re-export main types for convenience
pub use gallery::{GalleryError, GalleryService, SaveOutcome};
