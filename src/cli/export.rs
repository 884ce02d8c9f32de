//! `awaf export`: write the renderer config.

use anyhow::{Context, Result};
use std::fs;

use super::ExportArgs;
use crate::config::{ConfigError, SiteConfig};
use crate::export::ExternalConfig;
use crate::{log, nav};

/// Export the site config, refusing a tree that breaks an invariant.
pub fn export_site(config: &SiteConfig, args: &ExportArgs) -> Result<()> {
    nav::validate(&config.tree())
        .map_err(ConfigError::from)
        .context("refusing to export, run `awaf validate` for the full report")?;

    let output = ExternalConfig::from(config).render(args.format, args.pretty)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("export"; "wrote {}", path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}
