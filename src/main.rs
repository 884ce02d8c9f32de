//! awaf - navigation config tree for the Apex Well-Architected Framework docs.

#![allow(dead_code)]

mod cli;
mod config;
mod export;
mod logger;
mod nav;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;
    debug!("config"; "loaded {}", config.config_path.display());

    match &cli.command {
        Commands::Init { force, dry } => cli::init::init_config(&config, *force, *dry),
        Commands::Validate { .. } => cli::validate::validate_site(&config),
        Commands::Export { args } => cli::export::export_site(&config, args),
        Commands::Show => {
            cli::show::show_site(&config);
            Ok(())
        }
    }
}
