//! Recipe content providers
//!
//! A devfile references its object lists by relative path; where that path
//! resolves to depends on how the devfile arrived (a checked-out directory,
//! a factory URL, or nowhere at all for the bare API). The provider is the
//! injected capability that turns a reference into raw text.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Failure of a content provider while fetching a reference
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Maps a devfile reference to raw recipe content
pub trait ContentProvider {
    fn fetch(&self, reference: &str) -> Result<String, FetchError>;
}

/// The content capability handed to the applier.
///
/// `Unavailable` is an explicit marker for invocation contexts that cannot
/// fetch anything (the bare conversion API), so the missing-provider path is
/// a typed branch rather than a null check.
#[derive(Clone, Copy)]
pub enum ContentSource<'a> {
    Unavailable,
    Provider(&'a dyn ContentProvider),
}

/// Resolves references against a base directory on disk
pub struct FileContentProvider {
    base: PathBuf,
}

impl FileContentProvider {
    /// Provider rooted at the given directory, typically the devfile's own
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl ContentProvider for FileContentProvider {
    fn fetch(&self, reference: &str) -> Result<String, FetchError> {
        let path = self.base.join(reference);
        debug!("Reading recipe content from {}", path.display());
        Ok(fs::read_to_string(path)?)
    }
}

/// Resolves references against a base URL with blocking HTTP
pub struct UrlContentProvider {
    base: String,
    client: reqwest::blocking::Client,
}

impl UrlContentProvider {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl ContentProvider for UrlContentProvider {
    fn fetch(&self, reference: &str) -> Result<String, FetchError> {
        let url = format!("{}/{}", self.base.trim_end_matches('/'), reference);
        info!("Fetching recipe content from {}", url);

        let response = self.client.get(&url).send()?;
        let response = response.error_for_status()?;

        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_provider_reads_relative_reference() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("deploy")).unwrap();
        fs::write(temp.path().join("deploy/app.yaml"), "kind: List\nitems: []\n").unwrap();

        let provider = FileContentProvider::new(temp.path());
        let content = provider.fetch("deploy/app.yaml").unwrap();
        assert_eq!(content, "kind: List\nitems: []\n");
    }

    #[test]
    fn test_file_provider_missing_file_is_a_fetch_error() {
        let temp = TempDir::new().unwrap();
        let provider = FileContentProvider::new(temp.path());
        assert!(provider.fetch("nope.yaml").is_err());
    }

    #[test]
    fn test_url_provider_fetches_content() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/recipes/app.yaml")
            .with_status(200)
            .with_body("kind: List\nitems: []\n")
            .create();

        let provider = UrlContentProvider::new(format!("{}/recipes", server.url()));
        let content = provider.fetch("app.yaml").unwrap();

        assert_eq!(content, "kind: List\nitems: []\n");
        mock.assert();
    }

    #[test]
    fn test_url_provider_maps_http_failure_to_fetch_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/recipes/app.yaml")
            .with_status(404)
            .create();

        let provider = UrlContentProvider::new(format!("{}/recipes", server.url()));
        assert!(provider.fetch("app.yaml").is_err());
    }
}
