// Favicon generation: palette derivation, SVG template, file placement

pub mod color;
pub mod svg;

use favicon_kit_core::{ColorPair, Config, Result, Site};
use std::fs;
use std::path::PathBuf;

pub use color::{hex_color, hsv_to_rgb, palette_for_index};
pub use svg::render_svg;

/// A favicon written for one site
#[derive(Debug, Clone)]
pub struct GeneratedFavicon {
    pub path: PathBuf,
    pub href: String,
    pub colors: ColorPair,
}

/// Render and write the favicon for the site at `index` of `total`.
///
/// Any existing favicon is overwritten. For numbered sites the assets
/// directory is created first.
pub fn write_favicon(
    site: &Site,
    index: usize,
    total: usize,
    config: &Config,
) -> Result<GeneratedFavicon> {
    let colors = palette_for_index(index, total, &config.colors);
    let dir = site.favicon_dir(&config.favicon);
    if !site.is_root() {
        fs::create_dir_all(&dir)?;
    }

    let path = site.favicon_path(&config.favicon);
    fs::write(&path, render_svg(&colors, &site.label))?;
    tracing::debug!(
        path = %path.display(),
        background = %colors.background,
        accent = %colors.accent,
        "wrote favicon"
    );

    Ok(GeneratedFavicon {
        path,
        href: site.favicon_href(&config.favicon),
        colors,
    })
}
