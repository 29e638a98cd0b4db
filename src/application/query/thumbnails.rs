// SPDX-License-Identifier: MPL-2.0
//! Gallery preview downloads.

use crate::application::port::{GalleryError, GalleryService};
use futures_util::future::join_all;

/// Outcome of one preview download, keyed by its display URL.
pub type ThumbnailResult = (String, Result<Vec<u8>, GalleryError>);

/// Downloads every URL concurrently and returns the results in input order.
///
/// Failures are reported per URL; one broken image never hides the others.
pub async fn fetch_thumbnails<G: GalleryService>(
    service: G,
    urls: Vec<String>,
) -> Vec<ThumbnailResult> {
    let requests = urls.into_iter().map(|url| {
        let service = service.clone();
        async move {
            let result = service.fetch_image(url.clone()).await;
            (url, result)
        }
    });
    join_all(requests).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::SaveOutcome;
    use std::future::Future;

    #[derive(Clone)]
    struct FakeGallery;

    impl GalleryService for FakeGallery {
        fn save(
            &self,
            _image_data_url: String,
        ) -> impl Future<Output = Result<SaveOutcome, GalleryError>> + Send {
            async { Ok(SaveOutcome::Rejected) }
        }

        fn list(&self) -> impl Future<Output = Result<Vec<String>, GalleryError>> + Send {
            async { Ok(Vec::new()) }
        }

        fn fetch_image(
            &self,
            url: String,
        ) -> impl Future<Output = Result<Vec<u8>, GalleryError>> + Send {
            async move {
                if url.ends_with("broken.png") {
                    Err(GalleryError::Transport("connection reset".into()))
                } else {
                    Ok(url.into_bytes())
                }
            }
        }

        fn origin(&self) -> &str {
            "http://gallery.test"
        }
    }

    #[tokio::test]
    async fn results_keep_input_order_and_isolate_failures() {
        let urls = vec![
            "http://gallery.test/a.png".to_string(),
            "http://gallery.test/broken.png".to_string(),
            "http://gallery.test/c.png".to_string(),
        ];

        let results = fetch_thumbnails(FakeGallery, urls.clone()).await;

        let keys: Vec<&str> = results.iter().map(|(url, _)| url.as_str()).collect();
        assert_eq!(keys, urls.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(results[0].1, Ok(b"http://gallery.test/a.png".to_vec()));
        assert!(results[1].1.is_err());
        assert!(results[2].1.is_ok());
    }

    #[tokio::test]
    async fn empty_input_yields_no_requests() {
        assert!(fetch_thumbnails(FakeGallery, Vec::new()).await.is_empty());
    }
}
