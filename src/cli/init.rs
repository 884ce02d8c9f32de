//! `awaf init`: write the built-in site as `awaf.toml`.

use anyhow::{Context, Result, bail};
use std::fs;

use crate::config::SiteConfig;
use crate::log;

/// Write the built-in configuration to `config.config_path`.
///
/// If `dry_run` is true, only prints the config to stdout.
pub fn init_config(config: &SiteConfig, force: bool, dry_run: bool) -> Result<()> {
    let content = render(config)?;

    if dry_run {
        print!("{content}");
        return Ok(());
    }

    let path = &config.config_path;
    if path.exists() && !force {
        bail!(
            "`{}` already exists, pass --force to overwrite",
            path.display()
        );
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

fn render(config: &SiteConfig) -> Result<String> {
    Ok(format!(
        "# awaf navigation config (v{})\n\n{}",
        env!("CARGO_PKG_VERSION"),
        config.to_toml()?
    ))
}
