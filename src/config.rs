//! Configuration for the front-end assembly.
//!
//! Loaded from `blogfront.toml` when present; every field has a default so
//! the file is optional. CLI flags override file values via
//! [`FrontConfig::update_with_cli`].

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default values for configuration fields, used by serde.
mod defaults {
    use std::path::PathBuf;

    pub mod site {
        use super::PathBuf;

        pub fn dir() -> PathBuf {
            "public".into()
        }
    }

    pub mod resources {
        pub fn header() -> String {
            "/components/header.html".into()
        }

        pub fn footer() -> String {
            "/components/footer.html".into()
        }

        pub fn posts() -> String {
            "/posts.json".into()
        }
    }

    pub mod page {
        pub fn header() -> String {
            "header-space".into()
        }

        pub fn footer() -> String {
            "footer-space".into()
        }

        pub fn posts() -> String {
            "posts-space".into()
        }

        pub fn list() -> String {
            "posts-list".into()
        }

        pub fn input() -> String {
            "posts-search-input".into()
        }

        pub fn button() -> String {
            "posts-search-button".into()
        }

        pub fn reset() -> String {
            "posts-reset-button".into()
        }

        pub fn toggle() -> String {
            "posts-search-toggle".into()
        }

        pub fn panel() -> String {
            "posts-search-panel".into()
        }
    }

    pub mod search {
        pub fn param() -> String {
            "q".into()
        }
    }

    pub mod serve {
        pub fn interface() -> String {
            "127.0.0.1".into()
        }

        pub fn port() -> u16 {
            8080
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct FrontConfig {
    pub site: SiteSection,
    pub resources: ResourceSection,
    pub page: PageSection,
    pub search: SearchSection,
    pub serve: ServeSection,
}

/// `[site]` - where the site lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Local site output directory (used by `serve` and `render --site`)
    pub dir: PathBuf,
    /// Base URL of a live site (used by `render --base-url`)
    pub base_url: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            dir: defaults::site::dir(),
            base_url: None,
        }
    }
}

/// `[resources]` - site-absolute paths of the fetched resources.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceSection {
    pub header: String,
    pub footer: String,
    pub posts: String,
}

impl Default for ResourceSection {
    fn default() -> Self {
        Self {
            header: defaults::resources::header(),
            footer: defaults::resources::footer(),
            posts: defaults::resources::posts(),
        }
    }
}

/// `[page]` - element ids the controller anchors on.
///
/// Each feature activates only when its anchor exists, so the same
/// controller is safe on pages that implement a subset of the UI.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageSection {
    pub header: String,
    pub footer: String,
    pub posts: String,
    pub list: String,
    pub input: String,
    pub button: String,
    pub reset: String,
    pub toggle: String,
    pub panel: String,
}

impl Default for PageSection {
    fn default() -> Self {
        Self {
            header: defaults::page::header(),
            footer: defaults::page::footer(),
            posts: defaults::page::posts(),
            list: defaults::page::list(),
            input: defaults::page::input(),
            button: defaults::page::button(),
            reset: defaults::page::reset(),
            toggle: defaults::page::toggle(),
            panel: defaults::page::panel(),
        }
    }
}

/// `[search]` - URL query parameter mirroring the active search term.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSection {
    pub param: String,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            param: defaults::search::param(),
        }
    }
}

/// `[serve]` - preview server binding.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServeSection {
    pub interface: String,
    pub port: u16,
}

impl Default for ServeSection {
    fn default() -> Self {
        Self {
            interface: defaults::serve::interface(),
            port: defaults::serve::port(),
        }
    }
}

impl FrontConfig {
    /// Load configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Fold CLI overrides into the configuration.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Render { site, base_url, .. } => {
                if let Some(site) = site {
                    self.site.dir = site.clone();
                }
                if let Some(base_url) = base_url {
                    self.site.base_url = Some(base_url.clone());
                }
            }
            Commands::Serve { interface, port } => {
                if let Some(interface) = interface {
                    self.serve.interface = interface.clone();
                }
                if let Some(port) = port {
                    self.serve.port = *port;
                }
            }
        }
    }
}
