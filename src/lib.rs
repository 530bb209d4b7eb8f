//! Blogfront - page-assembly engine for a static blog front-end.
//!
//! The library models what the blog's client-side script does at page
//! load: fetch static HTML partials and a JSON post index, inject them
//! into placeholder regions, render the post list, and filter it through
//! a search query mirrored into the URL. The page (document + location)
//! is an explicit value, the network sits behind the [`fetch::Fetcher`]
//! trait, and every load is fail-soft.
//!
//! The `blogfront` binary drives this against a real site: `render`
//! assembles the home page headlessly, `serve` previews the site
//! directory locally.

pub mod assemble;
pub mod browser;
pub mod cli;
pub mod config;
pub mod controller;
pub mod dom;
pub mod fetch;
pub mod log;
pub mod page;
pub mod partial;
pub mod posts;
pub mod render;
pub mod search;
pub mod serve;
