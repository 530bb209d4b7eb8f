//! Static HTML partial injection.
//!
//! A partial is a fragment (header, footer) fetched as text and injected
//! verbatim into its placeholder region. Failures are fail-soft: the
//! region keeps whatever content it already had.

use crate::{fetch::Fetcher, log, page::Page};

/// Fetch the partial for a target region.
///
/// Returns the markup to inject, or `None` when the region is absent from
/// the page (a normal condition, silent) or the fetch failed (logged).
pub async fn fetch_partial(
    fetcher: &dyn Fetcher,
    page: &Page,
    target_id: &str,
    path: &str,
) -> Option<String> {
    if !page.dom.contains(target_id) {
        return None;
    }

    match fetcher.fetch_text(path).await {
        Ok(html) => Some(html),
        Err(err) => {
            log!("error"; "{err}");
            None
        }
    }
}

/// Inject fetched markup into its region, replacing prior content.
pub fn inject_partial(page: &mut Page, target_id: &str, html: &str) {
    page.dom.set_inner_html(target_id, html);
}

/// Fetch and inject in one step. No retries, no caching.
pub async fn load_partial(fetcher: &dyn Fetcher, page: &mut Page, target_id: &str, path: &str) {
    if let Some(html) = fetch_partial(fetcher, page, target_id, path).await {
        inject_partial(page, target_id, &html);
    }
}
