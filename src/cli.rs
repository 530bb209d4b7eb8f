//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Blogfront page-assembly CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: blogfront.toml)
    #[arg(short = 'C', long, default_value = "blogfront.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Assemble the home page (partials + post list) and emit HTML
    Render {
        /// Search query to apply after the page boots
        #[arg(short, long)]
        query: Option<String>,

        /// Page path to boot on (search redirects home from elsewhere)
        #[arg(long, default_value = "/")]
        path: String,

        /// Write the assembled HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Local site directory to fetch resources from
        #[arg(long)]
        site: Option<PathBuf>,

        /// Base URL of a live site to fetch resources from
        #[arg(long = "base-url", conflicts_with = "site")]
        base_url: Option<String>,
    },

    /// Serve the site directory so fetch paths resolve locally
    Serve {
        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_render(&self) -> bool {
        matches!(self.command, Commands::Render { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
}
