//! Post list rendering.
//!
//! Pure conversion from post summaries to the markup assigned to the list
//! container. All interpolated fields are HTML-escaped; the post index is
//! site data today, but nothing guarantees it stays that way.

use crate::{config::FrontConfig, page::Page, posts::PostSummary};

/// Shown in the list container when rendering an empty sequence.
const EMPTY_LIST_MARKUP: &str = "<p>No posts found.</p>";

/// Render post summaries into the list container.
///
/// Per item: the title falls back to the slug, then to `Untitled`; the date
/// renders only when present; the description only when present and
/// non-empty. An empty input renders a placeholder instead of an empty
/// list. A missing list anchor is a silent no-op.
pub fn render_posts(page: &mut Page, config: &FrontConfig, posts: &[PostSummary]) {
    let list_id = &config.page.list;
    if !page.dom.contains(list_id) {
        return;
    }

    if posts.is_empty() {
        page.dom.set_inner_html(list_id, EMPTY_LIST_MARKUP);
        return;
    }

    let items: Vec<String> = posts.iter().map(render_card).collect();
    page.dom.set_inner_html(list_id, items.join("\n"));
}

/// Render a single post card.
fn render_card(post: &PostSummary) -> String {
    let title = post
        .title
        .as_deref()
        .or(post.slug.as_deref())
        .unwrap_or("Untitled");

    let mut card = String::from("<article class=\"post-card\">\n");
    card.push_str(&format!(
        "<h2><a href=\"{}\">{}</a></h2>\n",
        escape_html(&post.url),
        escape_html(title),
    ));
    if let Some(date) = &post.date {
        card.push_str(&format!(
            "<small class=\"muted\">{}</small>\n",
            escape_html(date)
        ));
    }
    if let Some(description) = &post.description
        && !description.is_empty()
    {
        card.push_str(&format!("<p>{}</p>\n", escape_html(description)));
    }
    card.push_str("</article>");
    card
}

/// Escape text for interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
