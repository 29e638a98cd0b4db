// SPDX-License-Identifier: MPL-2.0
//! Gallery backend port definition.
//!
//! This module defines the [`GalleryService`] trait for the remote service
//! that stores memes and lists them back.
//!
//! # Design Notes
//!
//! - Methods return `Send` futures so callers can hand them to `Task::perform`
//! - Every call is single-shot: no retry, no timeout, no cancellation
//! - Response interpretation ([`SaveOutcome::from_response`]) is pure so it can
//!   be shared by every adapter

use serde_json::Value;
use std::fmt;
use std::future::Future;

// =============================================================================
// GalleryError
// =============================================================================

/// Errors that can occur while talking to the gallery service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// The request could not be sent or the response could not be read.
    Transport(String),

    /// The service answered with something that is not the expected JSON.
    InvalidResponse(String),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Transport(msg) => write!(f, "Gallery request failed: {msg}"),
            GalleryError::InvalidResponse(msg) => write!(f, "Unexpected gallery response: {msg}"),
        }
    }
}

impl std::error::Error for GalleryError {}

// =============================================================================
// SaveOutcome
// =============================================================================

/// How the service answered a save request that completed at the HTTP level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The response carried a truthy `message`; holds its text form.
    Saved(String),

    /// The response parsed but had no truthy `message` (e.g. `{"error": ...}`).
    Rejected,
}

impl SaveOutcome {
    /// Interprets a decoded JSON save response.
    ///
    /// A `null` body cannot be inspected at all and is reported as
    /// [`GalleryError::InvalidResponse`]; any other value is `Saved` only when
    /// it is an object whose `message` field is truthy.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidResponse`] for a `null` body.
    pub fn from_response(body: &Value) -> Result<Self, GalleryError> {
        match body {
            Value::Null => Err(GalleryError::InvalidResponse(
                "save response is null".to_string(),
            )),
            Value::Object(fields) => match fields.get("message") {
                Some(message) if is_truthy(message) => Ok(SaveOutcome::Saved(match message {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })),
                _ => Ok(SaveOutcome::Rejected),
            },
            _ => Ok(SaveOutcome::Rejected),
        }
    }

    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy, everything else
/// (including empty arrays and objects) is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// =============================================================================
// GalleryService
// =============================================================================

/// Remote meme storage.
pub trait GalleryService: Clone + Send + Sync + 'static {
    /// Uploads a PNG data URL (`data:image/png;base64,...`).
    fn save(
        &self,
        image_data_url: String,
    ) -> impl Future<Output = Result<SaveOutcome, GalleryError>> + Send;

    /// Lists the stored memes as server-relative paths (e.g. `/saved_memes/a.png`).
    fn list(&self) -> impl Future<Output = Result<Vec<String>, GalleryError>> + Send;

    /// Downloads the raw bytes behind an absolute display URL.
    fn fetch_image(&self, url: String)
        -> impl Future<Output = Result<Vec<u8>, GalleryError>> + Send;

    /// Absolute origin that list paths are relative to, without trailing slash.
    fn origin(&self) -> &str;
}
