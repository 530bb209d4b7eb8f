//! Page-load orchestration.
//!
//! `PageController` owns the document-ready sequence: the header, footer
//! and post index fetches go out together, unordered; their effects are
//! then applied on the single execution context, each fetch fully resolved
//! before its own injection. The search listeners bind once the header
//! region has settled, and the index completion applies whatever query was
//! pending in the URL.

use crate::{
    config::FrontConfig,
    fetch::Fetcher,
    page::Page,
    partial,
    posts::{self, PostStore},
    search::{self, Applied, SearchEvent},
};

/// Composes the partial loads, the index load and the search wiring over
/// one page model.
pub struct PageController<'a> {
    fetcher: &'a dyn Fetcher,
    config: &'a FrontConfig,
}

impl<'a> PageController<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, config: &'a FrontConfig) -> Self {
        Self { fetcher, config }
    }

    /// Run the document-ready sequence against a page.
    ///
    /// Returns the post store the boot produced; subsequent search events
    /// read from it. Every load is fail-soft, so boot itself cannot fail.
    pub async fn boot(&self, page: &mut Page) -> PostStore {
        let cfg = self.config;
        let mut store = PostStore::new();

        // Independent, unordered fetches
        let (header, footer, index) = tokio::join!(
            partial::fetch_partial(self.fetcher, page, &cfg.page.header, &cfg.resources.header),
            partial::fetch_partial(self.fetcher, page, &cfg.page.footer, &cfg.resources.footer),
            posts::fetch_post_index(self.fetcher, page, cfg),
        );

        if let Some(html) = header {
            partial::inject_partial(page, &cfg.page.header, &html);
        }
        // Search controls live in the header region; wire them up once it
        // has settled
        search::bind(page, cfg);

        if let Some(html) = footer {
            partial::inject_partial(page, &cfg.page.footer, &html);
        }

        if let Some(raw) = index {
            posts::apply_post_index(page, &mut store, cfg, &raw);
        }

        store
    }

    /// Forward a user interaction to the search controller.
    pub fn handle_event(
        &self,
        page: &mut Page,
        store: &PostStore,
        event: SearchEvent,
    ) -> Option<Applied> {
        search::handle_event(page, store, self.config, event)
    }
}
