use anyhow::{Context, Result};
use favicon_kit_core::{Config, Site, relative_display};
use favicon_kit_patcher::plan_patch;
use std::fs;
use std::path::{Path, PathBuf};

use super::load_sites;

/// What generate would do to one entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Missing,
    WouldPatch,
    Unchanged,
}

#[derive(Debug)]
pub struct SitePlan {
    pub label: String,
    pub favicon: PathBuf,
    pub href: String,
    pub entries: Vec<(PathBuf, EntryStatus)>,
}

/// Plan a run without writing anything
pub fn plan_sites(sites: &[Site], config: &Config) -> Result<Vec<SitePlan>> {
    let mut plans = Vec::with_capacity(sites.len());

    for site in sites {
        let href = site.favicon_href(&config.favicon);
        let mut entries = Vec::new();

        for html in site.entry_points(&config.site) {
            let status = if !html.is_file() {
                EntryStatus::Missing
            } else {
                let content = fs::read_to_string(&html)
                    .with_context(|| format!("Failed to read {}", html.display()))?;
                match plan_patch(&content, &href) {
                    Some(_) => EntryStatus::WouldPatch,
                    None => EntryStatus::Unchanged,
                }
            };
            entries.push((html, status));
        }

        plans.push(SitePlan {
            label: site.label.clone(),
            favicon: site.favicon_path(&config.favicon),
            href,
            entries,
        });
    }

    Ok(plans)
}

fn format_plan(plans: &[SitePlan], root: &Path) -> String {
    let mut out = String::new();
    let mut pending = 0;

    for plan in plans {
        out.push_str(&format!(
            "[{}] {}\n",
            plan.label,
            relative_display(&plan.favicon, root)
        ));
        for (html, status) in &plan.entries {
            let note = match status {
                EntryStatus::Missing => "missing, skipped",
                EntryStatus::WouldPatch => {
                    pending += 1;
                    "would link"
                }
                EntryStatus::Unchanged => "unchanged",
            };
            out.push_str(&format!(
                "    {} ({}, href {})\n",
                relative_display(html, root),
                note,
                plan.href
            ));
        }
    }

    out.push_str(&format!(
        "{} sites, {} HTML files would be updated.\n",
        plans.len(),
        pending
    ));
    out
}

pub fn run(path: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let (config, sites) = load_sites(&path, config_path.as_deref())?;
    let plans = plan_sites(&sites, &config)?;
    print!("{}", format_plan(&plans, &path));
    Ok(())
}
