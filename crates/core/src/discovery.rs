use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::types::Site;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use walkdir::WalkDir;

/// Two ASCII digits followed by a hyphen, e.g. `05-travel`
static SITE_DIR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-").expect("valid site directory pattern"));

/// Whether a directory name follows the numbered-site convention
pub fn is_site_dir_name(name: &str) -> bool {
    SITE_DIR_PATTERN.is_match(name)
}

/// Label for a numbered site: everything before the first hyphen
pub fn site_label(name: &str) -> &str {
    name.split('-').next().unwrap_or(name)
}

/// Scan `root` for numbered site directories.
///
/// The root itself is always the first site, followed by the immediate
/// subdirectories matching `NN-` in lexicographic order.
pub fn discover_sites(root: &Path, config: &SiteConfig) -> Result<Vec<Site>> {
    if !root.is_dir() {
        return Err(Error::InvalidRoot(root.to_path_buf()));
    }

    let mut sites = vec![Site::root(root.to_path_buf(), config.root_label.clone())];

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // A dangling link or loop among the children is skipped; only
            // failures reading the root itself abort the scan.
            Err(err) if err.depth() > 0 && err.path().is_some() => {
                tracing::warn!(
                    path = %err.path().map(|p| p.display().to_string()).unwrap_or_default(),
                    error = %err,
                    "skipping unreadable entry"
                );
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 directory name");
            continue;
        };

        if !is_site_dir_name(name) {
            tracing::debug!(name, "not a numbered site directory");
            continue;
        }

        let label = site_label(name).to_string();
        tracing::debug!(name, label = %label, "discovered site");
        sites.push(Site::numbered(entry.path().to_path_buf(), label));
    }

    Ok(sites)
}
