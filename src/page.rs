//! The page model: document plus location.
//!
//! This is the explicit application state the controller mutates. Nothing
//! in the crate reaches for globals; a `Page` is created at boot, threaded
//! through the loaders and the search controller, and read back out at the
//! end.

use crate::{browser::Location, config::FrontConfig, dom::Document};

/// One modeled page: its document and its location bar.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub dom: Document,
    pub location: Location,
}

impl Page {
    /// Create a page from parts.
    pub fn new(dom: Document, location: Location) -> Self {
        Self { dom, location }
    }

    /// Build the standard home-page skeleton: every anchor element the
    /// front-end script knows about, all empty, at the given URL.
    pub fn skeleton(config: &FrontConfig, url: &str) -> Self {
        let mut dom = Document::new();
        let page = &config.page;
        for id in [
            page.header.as_str(),
            page.footer.as_str(),
            page.posts.as_str(),
            page.list.as_str(),
            page.input.as_str(),
            page.button.as_str(),
            page.reset.as_str(),
            page.toggle.as_str(),
            page.panel.as_str(),
        ] {
            dom.add_element(id);
        }
        Self::new(dom, Location::parse(url))
    }
}
