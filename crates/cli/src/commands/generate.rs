use anyhow::{Context, Result};
use favicon_kit_core::{Config, Site, relative_display};
use favicon_kit_generator::write_favicon;
use favicon_kit_patcher::ensure_favicon_link;
use std::path::{Path, PathBuf};

use super::load_sites;

/// Outcome of a generate run
#[derive(Debug, Default)]
pub struct RunReport {
    pub sites: usize,
    /// Entry points that received a favicon link, in processing order
    pub updated: Vec<PathBuf>,
}

/// Write every favicon and patch every entry point, one site at a time
pub fn generate_all(sites: &[Site], config: &Config) -> Result<RunReport> {
    let total = sites.len();
    let mut report = RunReport {
        sites: total,
        updated: Vec::new(),
    };

    for (index, site) in sites.iter().enumerate() {
        let favicon = write_favicon(site, index, total, config).with_context(|| {
            format!("Failed to write favicon for {}", site.directory.display())
        })?;

        for html in site.entry_points(&config.site) {
            if !html.is_file() {
                tracing::debug!(path = %html.display(), "no entry point, skipping patch");
                continue;
            }

            let changed = ensure_favicon_link(&html, &favicon.href)
                .with_context(|| format!("Failed to patch {}", html.display()))?;
            if changed {
                report.updated.push(html);
            }
        }
    }

    Ok(report)
}

/// Render the human summary printed after a run
pub fn format_summary(report: &RunReport, root: &Path) -> String {
    let mut out = format!("Generated favicons for {} sites.\n", report.sites);
    if !report.updated.is_empty() {
        out.push_str("Updated HTML files:\n");
        for path in &report.updated {
            out.push_str(&format!(" - {}\n", relative_display(path, root)));
        }
    }
    out
}

pub fn run(path: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let (config, sites) = load_sites(&path, config_path.as_deref())?;
    let report = generate_all(&sites, &config)?;
    print!("{}", format_summary(&report, &path));
    Ok(())
}
