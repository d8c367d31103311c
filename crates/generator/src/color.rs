use favicon_kit_core::{ColorConfig, ColorPair};

/// Convert HSV (all components in [0, 1]) to RGB channels in [0, 1]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Scale a [0, 1] channel to 0..=255, truncating toward zero
fn channel_byte(channel: f64) -> u8 {
    (channel * 255.0) as u8
}

/// Format an HSV color as `#RRGGBB` with uppercase hex digits
pub fn hex_color(h: f64, s: f64, v: f64) -> String {
    let (r, g, b) = hsv_to_rgb(h, s, v);
    format!(
        "#{:02X}{:02X}{:02X}",
        channel_byte(r),
        channel_byte(g),
        channel_byte(b)
    )
}

/// Position on the color wheel for the site at `index` of `total`
pub fn hue_for_index(index: usize, total: usize) -> f64 {
    (index as f64 / total.max(1) as f64) % 1.0
}

/// Gradient colors for the site at `index` of `total`
pub fn palette_for_index(index: usize, total: usize, colors: &ColorConfig) -> ColorPair {
    let hue = hue_for_index(index, total);
    let accent_hue = (hue + colors.accent_hue_offset).rem_euclid(1.0);

    ColorPair {
        background: hex_color(hue, colors.background_saturation, colors.background_value),
        accent: hex_color(accent_hue, colors.accent_saturation, colors.accent_value),
    }
}
