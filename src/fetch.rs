//! Resource fetching.
//!
//! The page controller never talks to the network directly; it goes
//! through the [`Fetcher`] trait so the same boot sequence runs against a
//! live site over HTTP or a local site directory. Fetches always bypass
//! caches, matching the front-end's `cache: "no-store"` behavior.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors produced while fetching a resource.
///
/// All of these are fail-soft at the loader level: they get logged and the
/// page keeps whatever content it already had.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to load {path}: {code}")]
    Status { path: String, code: u16 },

    #[error("failed to load {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("resource not found: {path}")]
    NotFound { path: String },

    #[error("resource path escapes the site root: {path}")]
    OutsideRoot { path: String },
}

/// Fetch a site resource as text.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the resource at a site-absolute path (e.g. `/posts.json`),
    /// bypassing any cache.
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

// ============================================================================
// HTTP Fetcher
// ============================================================================

/// Fetches resources from a live site over HTTP.
pub struct HttpFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher rooted at a base URL (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let response = self
            .client
            .get(&url)
            .header("Cache-Control", "no-store")
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                path: path.to_owned(),
                source: e.into(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_owned(),
                code: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Transport {
            path: path.to_owned(),
            source: e.into(),
        })
    }
}

// ============================================================================
// Directory Fetcher
// ============================================================================

/// Fetches resources from a local site directory.
///
/// Site-absolute paths resolve under the root; anything that would escape
/// the root (`..` components) is rejected.
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    /// Create a fetcher rooted at a site output directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a site-absolute resource path to a local file path.
    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        if escapes {
            return Err(FetchError::OutsideRoot {
                path: path.to_owned(),
            });
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl Fetcher for DirFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let local = self.resolve(path)?;
        if !local.is_file() {
            return Err(FetchError::NotFound {
                path: path.to_owned(),
            });
        }
        std::fs::read_to_string(&local).map_err(|e| FetchError::Transport {
            path: path.to_owned(),
            source: e.into(),
        })
    }
}
