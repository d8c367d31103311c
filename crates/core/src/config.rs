use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the site root when no explicit config is given
pub const CONFIG_FILE_NAME: &str = "favicon-kit.toml";

/// Complete tool configuration
///
/// Every section and field is optional; the defaults reproduce the
/// built-in behavior (root label "WP", `images/favicon.svg`, fixed palette).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub favicon: FaviconConfig,
    pub colors: ColorConfig,
}

/// Site discovery settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Label rendered on the root pseudo-site's icon
    pub root_label: String,
    /// HTML entry points patched for each site, relative to the site directory
    pub entry_points: Vec<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            root_label: "WP".to_string(),
            entry_points: vec![PathBuf::from("index.html")],
        }
    }
}

/// Favicon file placement
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FaviconConfig {
    pub file_name: String,
    /// Subdirectory holding the favicon for numbered sites (the root writes beside its index)
    pub assets_dir: String,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        FaviconConfig {
            file_name: "favicon.svg".to_string(),
            assets_dir: "images".to_string(),
        }
    }
}

/// HSV palette parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background_saturation: f64,
    pub background_value: f64,
    pub accent_saturation: f64,
    pub accent_value: f64,
    pub accent_hue_offset: f64,
}

impl Default for ColorConfig {
    fn default() -> Self {
        ColorConfig {
            background_saturation: 0.55,
            background_value: 0.78,
            accent_saturation: 0.65,
            accent_value: 0.85,
            accent_hue_offset: 0.12,
        }
    }
}

/// Resolve the configuration for a site root.
///
/// An explicit path must exist. Without one, `<root>/favicon-kit.toml` is used
/// when present, otherwise the defaults.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => parse_config_toml(path),
        None => {
            let candidate = root.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "using site config");
                parse_config_toml(&candidate)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Parse a config file from a path
pub fn parse_config_toml<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Parse config from a string (useful for testing)
pub fn parse_config_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.site.root_label.trim().is_empty() {
        return Err(Error::ConfigParse(
            "Empty label in 'site.root_label' field".to_string(),
        ));
    }

    if config.site.entry_points.is_empty() {
        return Err(Error::ConfigParse(
            "'site.entry_points' must list at least one file".to_string(),
        ));
    }
    for entry in &config.site.entry_points {
        validate_path(&entry.to_string_lossy(), "site.entry_points")?;
    }

    validate_path(&config.favicon.file_name, "favicon.file_name")?;
    if Path::new(&config.favicon.file_name).components().count() != 1 {
        return Err(Error::ConfigParse(format!(
            "'favicon.file_name' must be a plain file name, got '{}'. Use 'favicon.assets_dir' for directories.",
            config.favicon.file_name
        )));
    }
    validate_path(&config.favicon.assets_dir, "favicon.assets_dir")?;

    let colors = &config.colors;
    for (value, field) in [
        (colors.background_saturation, "colors.background_saturation"),
        (colors.background_value, "colors.background_value"),
        (colors.accent_saturation, "colors.accent_saturation"),
        (colors.accent_value, "colors.accent_value"),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::ConfigParse(format!(
                "'{}' must be between 0 and 1, got {}",
                field, value
            )));
        }
    }
    if !colors.accent_hue_offset.is_finite() {
        return Err(Error::ConfigParse(
            "'colors.accent_hue_offset' must be a finite number".to_string(),
        ));
    }

    Ok(())
}

/// Validate a path string from the config file.
///
/// Generated files and patched entry points must stay inside the site
/// directory, so absolute paths and `..` components are rejected.
fn validate_path(path_str: &str, field_name: &str) -> Result<()> {
    let path = Path::new(path_str);

    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    if path.is_absolute() {
        return Err(Error::ConfigParse(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    for component in path.components() {
        if component == std::path::Component::ParentDir {
            return Err(Error::ConfigParse(format!(
                "Parent directory references (..) not allowed in '{}': '{}'",
                field_name, path_str
            )));
        }
    }

    Ok(())
}
