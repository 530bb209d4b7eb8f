//! Post index loading.
//!
//! Fetches the JSON post index, keeps it in the boot-scoped [`PostStore`],
//! and kicks off a search pass for whatever query is pending in the URL so
//! deep-linked searches resolve once the data arrives.

use crate::{
    config::FrontConfig,
    fetch::Fetcher,
    log,
    page::Page,
    search,
};
use serde::Deserialize;

/// Shown in the posts region when the index is empty or not an array.
const NO_POSTS_MARKUP: &str = "<p>No posts yet.</p>";

/// Minimal metadata record describing one content item in the index.
///
/// Sourced verbatim from the site's `posts.json`; only `url` is required.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PostSummary {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub url: String,
}

/// Boot-scoped post state.
///
/// Created empty, populated once by the index load, never cleared.
/// `loaded` is true iff `posts` reflects the last successfully fetched
/// index; search is a no-op until then.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Vec<PostSummary>,
    loaded: bool,
}

impl PostStore {
    /// Create an empty, not-yet-loaded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored posts, in source array order.
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    /// Whether the index load has completed.
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// Store a fetched index and mark it loaded.
    ///
    /// This is the single mutation point; only the load-completion handler
    /// calls it.
    pub fn set_posts(&mut self, posts: Vec<PostSummary>) {
        self.posts = posts;
        self.loaded = true;
    }
}

/// Fetch the raw post index document.
///
/// Returns `None` (silently) when the posts anchor is absent, and `None`
/// with a log line when the fetch fails. The caller decides what to do
/// with the payload via [`apply_post_index`].
pub async fn fetch_post_index(
    fetcher: &dyn Fetcher,
    page: &Page,
    config: &FrontConfig,
) -> Option<String> {
    if !page.dom.contains(&config.page.posts) {
        return None;
    }

    match fetcher.fetch_text(&config.resources.posts).await {
        Ok(raw) => Some(raw),
        Err(err) => {
            log!("error"; "{err}");
            None
        }
    }
}

/// Decode a fetched index payload and apply it to the page.
///
/// - payload that is not valid JSON: logged, nothing changes (fail-soft);
/// - payload that is not an array, or an empty array: renders the
///   "no posts" placeholder; the store stays unloaded;
/// - otherwise: stores the posts, marks them loaded, and applies the
///   pending query from the URL.
pub fn apply_post_index(page: &mut Page, store: &mut PostStore, config: &FrontConfig, raw: &str) {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            log!("error"; "failed to decode {}: {err}", config.resources.posts);
            return;
        }
    };

    let items = match value.as_array() {
        Some(items) if !items.is_empty() => items.clone(),
        _ => {
            page.dom.set_inner_html(&config.page.posts, NO_POSTS_MARKUP);
            return;
        }
    };

    let posts: Vec<PostSummary> = match serde_json::from_value(serde_json::Value::Array(items)) {
        Ok(posts) => posts,
        Err(err) => {
            log!("error"; "failed to decode {}: {err}", config.resources.posts);
            return;
        }
    };

    store.set_posts(posts);
    search::apply_pending(page, store, config);
}

/// Fetch and apply the post index in one step.
pub async fn load_posts(
    fetcher: &dyn Fetcher,
    page: &mut Page,
    store: &mut PostStore,
    config: &FrontConfig,
) {
    if let Some(raw) = fetch_post_index(fetcher, page, config).await {
        apply_post_index(page, store, config, raw.as_str());
    }
}
