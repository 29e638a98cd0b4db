// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the gallery backend.
//!
//! The backend exposes two endpoints relative to its origin:
//!
//! - `POST /save` with a JSON body `{"image": "<png data URL>"}`
//! - `GET /gallery` returning a JSON array of server-relative image paths
//!
//! Stored images are then served as static files under the same origin.

use crate::application::port::{GalleryError, GalleryService, SaveOutcome};
use serde::Serialize;
use serde_json::Value;
use std::future::Future;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("IcedMeme/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct SaveRequest<'a> {
    image: &'a str,
}

/// [`GalleryService`] backed by a `reqwest` client.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpGalleryClient {
    client: reqwest::Client,
    origin: String,
}

impl HttpGalleryClient {
    /// Creates a client for the backend at `origin` (e.g. `http://127.0.0.1:5000`).
    ///
    /// A trailing slash on the origin is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Transport`] if the HTTP client cannot be built
    /// (for instance when no TLS backend is available).
    pub fn new(origin: impl Into<String>) -> Result<Self, GalleryError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GalleryError::Transport(e.to_string()))?;

        let origin = origin.into().trim_end_matches('/').to_string();

        Ok(Self { client, origin })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}

impl GalleryService for HttpGalleryClient {
    fn save(
        &self,
        image_data_url: String,
    ) -> impl Future<Output = Result<SaveOutcome, GalleryError>> + Send {
        let request = self
            .client
            .post(self.endpoint("/save"))
            .json(&SaveRequest {
                image: &image_data_url,
            });

        async move {
            // The status code is not inspected: error bodies are still JSON
            // and are classified by their content.
            let response = request
                .send()
                .await
                .map_err(|e| GalleryError::Transport(e.to_string()))?;

            let body: Value = response
                .json()
                .await
                .map_err(|e| GalleryError::InvalidResponse(e.to_string()))?;

            log::debug!("Save response: {body}");
            SaveOutcome::from_response(&body)
        }
    }

    fn list(&self) -> impl Future<Output = Result<Vec<String>, GalleryError>> + Send {
        let request = self.client.get(self.endpoint("/gallery"));

        async move {
            let response = request
                .send()
                .await
                .map_err(|e| GalleryError::Transport(e.to_string()))?;

            let paths: Vec<String> = response
                .json()
                .await
                .map_err(|e| GalleryError::InvalidResponse(e.to_string()))?;

            log::debug!("Gallery lists {} image(s)", paths.len());
            Ok(paths)
        }
    }

    fn fetch_image(
        &self,
        url: String,
    ) -> impl Future<Output = Result<Vec<u8>, GalleryError>> + Send {
        let request = self.client.get(url);

        async move {
            let response = request
                .send()
                .await
                .map_err(|e| GalleryError::Transport(e.to_string()))?;

            if !response.status().is_success() {
                return Err(GalleryError::InvalidResponse(format!(
                    "HTTP status: {}",
                    response.status()
                )));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| GalleryError::Transport(e.to_string()))?;

            Ok(bytes.to_vec())
        }
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_origin() {
        let client = HttpGalleryClient::new("http://127.0.0.1:5000/").expect("client");
        assert_eq!(client.origin(), "http://127.0.0.1:5000");
        assert_eq!(client.endpoint("/save"), "http://127.0.0.1:5000/save");
    }

    #[test]
    fn save_request_serializes_image_field() {
        let body = serde_json::to_value(SaveRequest {
            image: "data:image/png;base64,AAAA",
        })
        .expect("serialize");
        assert_eq!(body, serde_json::json!({"image": "data:image/png;base64,AAAA"}));
    }

    #[test]
    fn user_agent_names_the_application() {
        assert!(USER_AGENT.starts_with("IcedMeme/"));
    }
}
