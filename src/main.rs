//! Blogfront - page assembly for a static blog front-end.

use anyhow::Result;
use blogfront::{
    assemble::{RenderOptions, run_render},
    cli::{Cli, Commands},
    config::FrontConfig,
    serve::serve_site,
};
use clap::Parser;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Render {
            query,
            path,
            output,
            ..
        } => {
            let options = RenderOptions {
                query: query.clone(),
                path: path.clone(),
            };
            run_render(&config, &options, output.as_deref())
        }
        Commands::Serve { .. } => serve_site(&config),
    }
}

/// Load configuration, fold in CLI overrides, and anchor relative paths
/// at the project root.
fn load_config(cli: &Cli) -> Result<FrontConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        FrontConfig::from_path(&config_path)?
    } else {
        FrontConfig::default()
    };
    config.update_with_cli(cli);

    if config.site.dir.is_relative() {
        config.site.dir = root.join(&config.site.dir);
    }

    Ok(config)
}
