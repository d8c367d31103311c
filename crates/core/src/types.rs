use crate::config::{FaviconConfig, SiteConfig};
use std::path::{Path, PathBuf};

/// A directory that receives its own favicon and entry point patch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub directory: PathBuf,
    pub label: String,
    /// True for the pseudo-site representing the scanned root itself
    pub root: bool,
}

impl Site {
    pub fn root(directory: PathBuf, label: impl Into<String>) -> Self {
        Site {
            directory,
            label: label.into(),
            root: true,
        }
    }

    pub fn numbered(directory: PathBuf, label: impl Into<String>) -> Self {
        Site {
            directory,
            label: label.into(),
            root: false,
        }
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    /// Directory the favicon is written into
    pub fn favicon_dir(&self, favicon: &FaviconConfig) -> PathBuf {
        if self.root {
            self.directory.clone()
        } else {
            self.directory.join(&favicon.assets_dir)
        }
    }

    pub fn favicon_path(&self, favicon: &FaviconConfig) -> PathBuf {
        self.favicon_dir(favicon).join(&favicon.file_name)
    }

    /// Value of the `href` attribute, relative to the site's entry points
    pub fn favicon_href(&self, favicon: &FaviconConfig) -> String {
        if self.root {
            favicon.file_name.clone()
        } else {
            format!(
                "{}/{}",
                favicon.assets_dir.trim_end_matches('/'),
                favicon.file_name
            )
        }
    }

    /// HTML files to patch for this site; they may not exist
    pub fn entry_points(&self, site: &SiteConfig) -> Vec<PathBuf> {
        site.entry_points
            .iter()
            .map(|entry| self.directory.join(entry))
            .collect()
    }
}

/// Gradient endpoints as `#RRGGBB` strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPair {
    pub background: String,
    pub accent: String,
}

/// Display a path relative to the scanned root, falling back to the full path
pub fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
