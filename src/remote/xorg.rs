//! HTTP fetcher for X.org release directory pages

use std::time::Duration;

use tracing::warn;

use crate::config::{DEFAULT_BASE_URL, FETCH_TIMEOUT_SECS, ReconcileConfig};
use crate::error::FetchError;
use crate::remote::listing::ListingParser;
use crate::remote::source::{ReleaseSource, RemotePackage};

/// Fetches the `src/everything/` listing of one X.org release
pub struct XorgReleases {
    client: reqwest::Client,
    base_url: String,
    config: ReconcileConfig,
    parser: ListingParser,
}

impl XorgReleases {
    /// Creates a new XorgReleases fetcher with a custom base URL
    pub fn new(base_url: &str, config: ReconcileConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("xorg-reconcile")
                .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            config,
            parser: ListingParser::new(),
        }
    }

    fn listing_url(&self) -> String {
        format!(
            "{}/releases/{}/src/everything/",
            self.base_url, self.config.release
        )
    }
}

impl Default for XorgReleases {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, ReconcileConfig::default())
    }
}

#[async_trait::async_trait]
impl ReleaseSource for XorgReleases {
    async fn fetch_packages(&self) -> Result<Vec<RemotePackage>, FetchError> {
        let url = self.listing_url();

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Upstream returned status {}: {}", status, url);
            return Err(FetchError::Status { status, url });
        }

        let body = response.text().await?;
        Ok(self.parser.parse(&body, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn fixture_config() -> ReconcileConfig {
        ReconcileConfig {
            release: "X11R7.7".to_string(),
            remote_excludes: vec!["xf86-video-glint".to_string()],
            ..ReconcileConfig::default()
        }
    }

    #[tokio::test]
    async fn fetch_packages_parses_listing_anchors() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/releases/X11R7.7/src/everything/")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(
                r#"<html><body>
                    <a href="?C=N;O=D">Name</a>
                    <a href="libX11-1.4.99.1.tar.bz2">libX11-1.4.99.1.tar.bz2</a>
                    <a href="xf86-video-glint-1.2.8.tar.bz2">xf86-video-glint-1.2.8.tar.bz2</a>
                    <a href="xtrans-1.2.7.tar.bz2">xtrans-1.2.7.tar.bz2</a>
                </body></html>"#,
            )
            .create_async()
            .await;

        let source = XorgReleases::new(&server.url(), fixture_config());
        let packages = source.fetch_packages().await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            packages,
            vec![
                RemotePackage {
                    name: "libX11".to_string(),
                    version: "1.4.99.1".to_string(),
                },
                RemotePackage {
                    name: "xtrans".to_string(),
                    version: "1.2.7".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn fetch_packages_fails_on_non_success_status() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/releases/X11R7.7/src/everything/")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let source = XorgReleases::new(&server.url(), fixture_config());
        let result = source.fetch_packages().await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(FetchError::Status { status, .. }) if status == reqwest::StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn fetch_packages_returns_empty_for_listing_without_archives() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/releases/X11R7.7/src/everything/")
            .with_status(200)
            .with_body(r#"<html><body><a href="/releases/">Parent Directory</a></body></html>"#)
            .create_async()
            .await;

        let source = XorgReleases::new(&server.url(), fixture_config());
        let packages = source.fetch_packages().await.unwrap();

        mock.assert_async().await;
        assert!(packages.is_empty());
    }
}
