//! The `render` command: boot the controller headlessly and emit HTML.
//!
//! Builds the standard page skeleton, runs the document-ready sequence
//! against the configured site (local directory or live base URL), and
//! substitutes the settled regions into the embedded page template.

use crate::{
    config::FrontConfig,
    controller::PageController,
    fetch::{DirFetcher, Fetcher, HttpFetcher},
    log,
    page::Page,
    render::escape_html,
};
use anyhow::{Context, Result};
use std::path::Path;

/// Page template the assembled regions are substituted into
const PAGE_TEMPLATE: &str = include_str!("embed/page.html");

/// Options for one render pass.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Query to deep-link into the page URL before boot
    pub query: Option<String>,
    /// Page path to boot on
    pub path: String,
}

/// Run the render command: assemble and write the page.
pub fn run_render(config: &FrontConfig, options: &RenderOptions, output: Option<&Path>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let html = runtime.block_on(assemble_page(config, options));

    match output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("render"; "wrote {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

/// Boot the page controller and return the assembled document HTML.
///
/// A query, when given, is attached to the URL rather than typed in, so it
/// goes through the same pending-query path a deep link would.
pub async fn assemble_page(config: &FrontConfig, options: &RenderOptions) -> String {
    let fetcher: Box<dyn Fetcher> = match &config.site.base_url {
        Some(base_url) => Box::new(HttpFetcher::new(base_url)),
        None => Box::new(DirFetcher::new(&config.site.dir)),
    };

    let url = match options.query.as_deref() {
        Some(query) if !query.trim().is_empty() => format!(
            "{}?{}={}",
            options.path,
            config.search.param,
            urlencoding::encode(query.trim())
        ),
        _ => options.path.clone(),
    };

    let mut page = Page::skeleton(config, &url);
    let controller = PageController::new(fetcher.as_ref(), config);
    controller.boot(&mut page).await;

    to_html(&page, config)
}

/// Substitute the page regions into the embedded template.
fn to_html(page: &Page, config: &FrontConfig) -> String {
    let region = |id: &str| page.dom.inner_html(id).unwrap_or_default().to_owned();

    #[allow(clippy::literal_string_with_formatting_args)]
    // These are template placeholders, not format args
    PAGE_TEMPLATE
        .replace("{header}", &region(&config.page.header))
        .replace("{posts}", &region(&config.page.posts))
        .replace("{list}", &region(&config.page.list))
        .replace("{footer}", &region(&config.page.footer))
        .replace("{query}", &escape_html(page.dom.input_value(&config.page.input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("components")).unwrap();
        fs::write(
            dir.path().join("components/header.html"),
            "<nav>site header</nav>",
        )
        .unwrap();
        fs::write(
            dir.path().join("components/footer.html"),
            "<p>site footer</p>",
        )
        .unwrap();
        fs::write(
            dir.path().join("posts.json"),
            r#"[{"title":"Rust Tips","slug":"rust-tips","url":"/a"},
                {"title":"Go Basics","slug":"go-basics","url":"/b"}]"#,
        )
        .unwrap();
        dir
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn test_assemble_full_page() {
        let site = fixture_site();
        let mut config = FrontConfig::default();
        config.site.dir = site.path().to_path_buf();

        let options = RenderOptions {
            query: None,
            path: "/".to_owned(),
        };
        let html = runtime().block_on(assemble_page(&config, &options));

        assert!(html.contains("<nav>site header</nav>"));
        assert!(html.contains("<p>site footer</p>"));
        assert!(html.contains("Rust Tips"));
        assert!(html.contains("Go Basics"));
    }

    #[test]
    fn test_assemble_with_query_filters() {
        let site = fixture_site();
        let mut config = FrontConfig::default();
        config.site.dir = site.path().to_path_buf();

        let options = RenderOptions {
            query: Some("rust".to_owned()),
            path: "/".to_owned(),
        };
        let html = runtime().block_on(assemble_page(&config, &options));

        assert!(html.contains("Rust Tips"));
        assert!(!html.contains("Go Basics"));
        // the query shows up in the input field
        assert!(html.contains(r#"value="rust""#));
    }

    #[test]
    fn test_assemble_empty_index() {
        let site = fixture_site();
        fs::write(site.path().join("posts.json"), "[]").unwrap();
        let mut config = FrontConfig::default();
        config.site.dir = site.path().to_path_buf();

        let options = RenderOptions {
            query: None,
            path: "/".to_owned(),
        };
        let html = runtime().block_on(assemble_page(&config, &options));
        assert!(html.contains("No posts yet."));
    }

    #[test]
    fn test_assemble_missing_resources_is_fail_soft() {
        let site = tempfile::tempdir().unwrap();
        let mut config = FrontConfig::default();
        config.site.dir = site.path().to_path_buf();

        let options = RenderOptions {
            query: None,
            path: "/".to_owned(),
        };
        let html = runtime().block_on(assemble_page(&config, &options));
        // regions stay empty, the document itself still assembles
        assert!(html.contains("<div id=\"header-space\"></div>"));
    }
}
