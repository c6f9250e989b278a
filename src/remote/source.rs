//! Source trait for fetching the upstream release listing

#[cfg(test)]
use mockall::automock;

use crate::error::FetchError;

/// An archive file found in the upstream listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePackage {
    pub name: String,
    pub version: String,
}

/// Trait for fetching the released packages of one upstream release
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches the release listing and returns one entry per archive file,
    /// in document order.
    ///
    /// # Returns
    /// * `Ok(Vec<RemotePackage>)` - Parsed archive names with their versions
    /// * `Err(FetchError)` - If the listing cannot be retrieved
    async fn fetch_packages(&self) -> Result<Vec<RemotePackage>, FetchError>;
}
