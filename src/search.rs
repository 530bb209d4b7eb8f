//! Search over the post index.
//!
//! Two observable states: idle (no query, full list) and filtered. The
//! active query is mirrored three ways: into the visible input, into the
//! URL's query parameter, and into the rendered list. Off the home page a
//! query never filters in place; it navigates to the home page and carries
//! the query along.

use crate::{
    config::FrontConfig,
    page::Page,
    posts::{PostStore, PostSummary},
    render::render_posts,
};

/// User interactions the search controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// Enter pressed in the input, or the search button activated
    Submit,
    /// Reset control activated
    Reset,
    /// Collapsible search panel toggled (pure UI state)
    TogglePanel,
}

/// What an `apply` pass did, for callers that care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Off the home page: navigated to the home page with the query attached
    Redirected(String),
    /// Index not loaded yet; the pending query stays in the URL
    Pending,
    /// Rendered on the home page; carries the number of posts shown
    Rendered(usize),
}

/// Set up the initial search UI state on a freshly injected header.
///
/// The collapsible panel starts closed. Anchors that are absent are left
/// alone, as everywhere else.
pub fn bind(page: &mut Page, config: &FrontConfig) {
    if !page.dom.contains(&config.page.input) {
        return;
    }
    page.dom.set_attr(&config.page.toggle, "aria-expanded", "false");
    page.dom.set_attr(&config.page.panel, "hidden", "");
}

/// Dispatch a user interaction.
///
/// No-op when the search input is absent from the page.
pub fn handle_event(
    page: &mut Page,
    store: &PostStore,
    config: &FrontConfig,
    event: SearchEvent,
) -> Option<Applied> {
    if !page.dom.contains(&config.page.input) {
        return None;
    }

    match event {
        SearchEvent::Submit => {
            let query = page.dom.input_value(&config.page.input).to_owned();
            Some(apply(page, store, config, &query))
        }
        SearchEvent::Reset => Some(apply(page, store, config, "")),
        SearchEvent::TogglePanel => {
            toggle_panel(page, config);
            None
        }
    }
}

/// Apply a search query to the page.
///
/// The contract, in order:
/// 1. trim the query and reflect it into the input;
/// 2. off the home page, navigate home with the (possibly empty) query
///    encoded as a URL parameter - filtering never happens elsewhere;
/// 3. before the index has loaded, do nothing - load completion re-applies
///    the pending query;
/// 4. an empty query renders the full list and removes the URL parameter
///    in place; a non-empty one filters, renders, and sets the parameter
///    in place.
pub fn apply(page: &mut Page, store: &PostStore, config: &FrontConfig, query: &str) -> Applied {
    let query = query.trim();
    page.dom.set_input_value(&config.page.input, query);

    if !page.location.is_home() {
        let target = format!(
            "/?{}={}",
            config.search.param,
            urlencoding::encode(query)
        );
        page.location.navigate(&target);
        return Applied::Redirected(target);
    }

    if !store.loaded() {
        return Applied::Pending;
    }

    if query.is_empty() {
        render_posts(page, config, store.posts());
        page.location.remove_query_param(&config.search.param);
        return Applied::Rendered(store.posts().len());
    }

    let filtered = filter_posts(store.posts(), query);
    let shown = filtered.len();
    render_posts(page, config, &filtered);
    page.location
        .replace_query_param(&config.search.param, query);
    Applied::Rendered(shown)
}

/// Apply whatever query is currently pending in the URL.
///
/// This is the pass the index load triggers on completion, and the source
/// of truth when no explicit query is supplied.
pub fn apply_pending(page: &mut Page, store: &PostStore, config: &FrontConfig) -> Applied {
    let pending = page
        .location
        .query_param(&config.search.param)
        .unwrap_or_default()
        .to_owned();
    apply(page, store, config, &pending)
}

/// Filter posts whose title, description or slug contains the query as a
/// case-insensitive substring.
pub fn filter_posts(posts: &[PostSummary], query: &str) -> Vec<PostSummary> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            field_contains(&post.title, &needle)
                || field_contains(&post.description, &needle)
                || field_contains(&post.slug, &needle)
        })
        .cloned()
        .collect()
}

fn field_contains(field: &Option<String>, needle: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|value| value.to_lowercase().contains(needle))
}

/// Flip the collapsible panel open or closed; focus the input on open.
/// Search state is untouched.
fn toggle_panel(page: &mut Page, config: &FrontConfig) {
    let opening = page.dom.attr(&config.page.toggle, "aria-expanded") != Some("true");
    page.dom.set_attr(
        &config.page.toggle,
        "aria-expanded",
        if opening { "true" } else { "false" },
    );
    if opening {
        page.dom.remove_attr(&config.page.panel, "hidden");
        page.dom.focus(&config.page.input);
    } else {
        page.dom.set_attr(&config.page.panel, "hidden", "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(title: &str, slug: &str, url: &str) -> PostSummary {
        PostSummary {
            title: Some(title.to_owned()),
            slug: Some(slug.to_owned()),
            description: None,
            date: None,
            url: url.to_owned(),
        }
    }

    fn sample_posts() -> Vec<PostSummary> {
        vec![
            summary("Rust Tips", "rust-tips", "/a"),
            summary("Go Basics", "go-basics", "/b"),
        ]
    }

    fn loaded_store(posts: Vec<PostSummary>) -> PostStore {
        let mut store = PostStore::new();
        store.set_posts(posts);
        store
    }

    fn home(config: &FrontConfig) -> Page {
        Page::skeleton(config, "/")
    }

    // ------------------------------------------------------------------------
    // filter_posts
    // ------------------------------------------------------------------------

    #[test]
    fn test_filter_case_insensitive() {
        let posts = sample_posts();
        let result = filter_posts(&posts, "RUST");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].url, "/a");
    }

    #[test]
    fn test_filter_matches_description_and_slug() {
        let mut posts = sample_posts();
        posts[1].description = Some("also touches on rust interop".to_owned());
        assert_eq!(filter_posts(&posts, "rust").len(), 2);
        assert_eq!(filter_posts(&posts, "go-bas").len(), 1);
    }

    #[test]
    fn test_filter_result_is_subset_preserving_order() {
        let posts = sample_posts();
        let result = filter_posts(&posts, "s");
        for (i, post) in result.iter().enumerate() {
            assert!(posts.contains(post));
            if i > 0 {
                let prev = posts.iter().position(|p| p == &result[i - 1]).unwrap();
                let this = posts.iter().position(|p| p == post).unwrap();
                assert!(prev < this);
            }
        }
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_posts(&sample_posts(), "zig").is_empty());
    }

    // ------------------------------------------------------------------------
    // apply
    // ------------------------------------------------------------------------

    #[test]
    fn test_apply_filters_and_sets_url_param() {
        let config = FrontConfig::default();
        let mut page = home(&config);
        let store = loaded_store(sample_posts());

        let applied = apply(&mut page, &store, &config, "rust");
        assert_eq!(applied, Applied::Rendered(1));

        let list = page.dom.inner_html("posts-list").unwrap();
        assert!(list.contains("Rust Tips"));
        assert!(!list.contains("Go Basics"));
        assert_eq!(page.location.query_param("q"), Some("rust"));
        assert!(page.location.navigations().is_empty(), "no full navigation");
    }

    #[test]
    fn test_apply_trims_and_reflects_into_input() {
        let config = FrontConfig::default();
        let mut page = home(&config);
        let store = loaded_store(sample_posts());

        apply(&mut page, &store, &config, "  rust  ");
        assert_eq!(page.dom.input_value("posts-search-input"), "rust");
        assert_eq!(page.location.query_param("q"), Some("rust"));
    }

    #[test]
    fn test_apply_empty_restores_full_list_and_clears_param() {
        let config = FrontConfig::default();
        let mut page = home(&config);
        let store = loaded_store(sample_posts());

        apply(&mut page, &store, &config, "rust");
        let applied = apply(&mut page, &store, &config, "");
        assert_eq!(applied, Applied::Rendered(2));

        let list = page.dom.inner_html("posts-list").unwrap();
        assert!(list.contains("Rust Tips"));
        assert!(list.contains("Go Basics"));
        assert_eq!(page.location.query_param("q"), None);
        assert_eq!(page.location.href(), "/");
    }

    #[test]
    fn test_apply_idempotent() {
        let config = FrontConfig::default();
        let mut page = home(&config);
        let store = loaded_store(sample_posts());

        apply(&mut page, &store, &config, "rust");
        let first_list = page.dom.inner_html("posts-list").unwrap().to_owned();
        let first_href = page.location.href();

        apply(&mut page, &store, &config, "rust");
        assert_eq!(page.dom.inner_html("posts-list").unwrap(), first_list);
        assert_eq!(page.location.href(), first_href);
    }

    #[test]
    fn test_apply_off_home_navigates_without_rendering() {
        let config = FrontConfig::default();
        let mut page = Page::skeleton(&config, "/blog/post-1");
        let store = loaded_store(sample_posts());

        let applied = apply(&mut page, &store, &config, "foo");
        assert_eq!(applied, Applied::Redirected("/?q=foo".to_owned()));
        assert_eq!(page.location.navigations(), ["/?q=foo"]);
        // no in-page render happened
        assert_eq!(page.dom.inner_html("posts-list"), Some(""));
    }

    #[test]
    fn test_apply_off_home_with_empty_query_still_navigates() {
        let config = FrontConfig::default();
        let mut page = Page::skeleton(&config, "/about");
        let store = loaded_store(sample_posts());

        let applied = apply(&mut page, &store, &config, "");
        assert_eq!(applied, Applied::Redirected("/?q=".to_owned()));
    }

    #[test]
    fn test_apply_before_load_is_noop() {
        let config = FrontConfig::default();
        let mut page = home(&config);
        let store = PostStore::new();

        let applied = apply(&mut page, &store, &config, "rust");
        assert_eq!(applied, Applied::Pending);
        assert_eq!(page.dom.inner_html("posts-list"), Some(""));
    }

    #[test]
    fn test_apply_pending_reads_url_param() {
        let config = FrontConfig::default();
        let mut page = Page::skeleton(&config, "/?q=go");
        let store = loaded_store(sample_posts());

        let applied = apply_pending(&mut page, &store, &config);
        assert_eq!(applied, Applied::Rendered(1));
        assert!(page.dom.inner_html("posts-list").unwrap().contains("Go Basics"));
    }

    #[test]
    fn test_url_roundtrip() {
        let config = FrontConfig::default();
        let mut page = home(&config);
        let store = loaded_store(sample_posts());

        apply(&mut page, &store, &config, " rust tips ");
        assert_eq!(page.location.query_param("q"), Some("rust tips"));
        apply(&mut page, &store, &config, "");
        assert_eq!(page.location.query_param("q"), None);
    }

    // ------------------------------------------------------------------------
    // events and panel
    // ------------------------------------------------------------------------

    #[test]
    fn test_submit_uses_input_value() {
        let config = FrontConfig::default();
        let mut page = home(&config);
        let store = loaded_store(sample_posts());

        page.dom.set_input_value("posts-search-input", "go");
        let applied = handle_event(&mut page, &store, &config, SearchEvent::Submit);
        assert_eq!(applied, Some(Applied::Rendered(1)));
    }

    #[test]
    fn test_reset_restores_full_list() {
        let config = FrontConfig::default();
        let mut page = home(&config);
        let store = loaded_store(sample_posts());

        apply(&mut page, &store, &config, "rust");
        let applied = handle_event(&mut page, &store, &config, SearchEvent::Reset);
        assert_eq!(applied, Some(Applied::Rendered(2)));
        assert_eq!(page.dom.input_value("posts-search-input"), "");
    }

    #[test]
    fn test_events_noop_without_input_anchor() {
        let config = FrontConfig::default();
        let mut page = Page::default();
        let store = loaded_store(sample_posts());

        let applied = handle_event(&mut page, &store, &config, SearchEvent::Submit);
        assert_eq!(applied, None);
    }

    #[test]
    fn test_toggle_panel_opens_focuses_and_closes() {
        let config = FrontConfig::default();
        let mut page = home(&config);
        let store = PostStore::new();
        bind(&mut page, &config);

        assert_eq!(page.dom.attr("posts-search-toggle", "aria-expanded"), Some("false"));
        assert!(page.dom.attr("posts-search-panel", "hidden").is_some());

        handle_event(&mut page, &store, &config, SearchEvent::TogglePanel);
        assert_eq!(page.dom.attr("posts-search-toggle", "aria-expanded"), Some("true"));
        assert!(page.dom.attr("posts-search-panel", "hidden").is_none());
        assert_eq!(page.dom.focused(), Some("posts-search-input"));

        handle_event(&mut page, &store, &config, SearchEvent::TogglePanel);
        assert_eq!(page.dom.attr("posts-search-toggle", "aria-expanded"), Some("false"));
        assert!(page.dom.attr("posts-search-panel", "hidden").is_some());
    }

    #[test]
    fn test_toggle_does_not_touch_search_state() {
        let config = FrontConfig::default();
        let mut page = home(&config);
        let store = loaded_store(sample_posts());

        apply(&mut page, &store, &config, "rust");
        let list_before = page.dom.inner_html("posts-list").unwrap().to_owned();

        handle_event(&mut page, &store, &config, SearchEvent::TogglePanel);
        assert_eq!(page.dom.inner_html("posts-list").unwrap(), list_before);
        assert_eq!(page.location.query_param("q"), Some("rust"));
    }
}
