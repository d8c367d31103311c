pub mod check;
pub mod generate;

use anyhow::{Context, Result};
use favicon_kit_core::{Config, Site, discover_sites, load_config};
use std::path::Path;

/// Load configuration for `root` and discover its sites
pub fn load_sites(root: &Path, config_path: Option<&Path>) -> Result<(Config, Vec<Site>)> {
    let config = load_config(root, config_path).with_context(|| match config_path {
        Some(path) => format!("Failed to load config {}", path.display()),
        None => format!("Failed to load config for {}", root.display()),
    })?;

    let sites = discover_sites(root, &config.site)
        .with_context(|| format!("Failed to scan sites in {}", root.display()))?;

    Ok((config, sites))
}
