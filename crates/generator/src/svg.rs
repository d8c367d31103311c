use favicon_kit_core::ColorPair;

/// Render the favicon document: rounded gradient square, translucent
/// ridge shape, centered label.
pub fn render_svg(colors: &ColorPair, label: &str) -> String {
    let svg = format!(
        r##"<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'>
  <defs>
    <linearGradient id='grad' x1='0%' y1='0%' x2='100%' y2='100%'>
      <stop offset='0%' stop-color='{background}' />
      <stop offset='100%' stop-color='{accent}' />
    </linearGradient>
  </defs>
  <rect width='100' height='100' rx='18' fill='url(#grad)' />
  <path d='M5 70 L35 40 L55 60 L95 20 L95 95 L5 95 Z' fill='rgba(255, 255, 255, 0.22)' />
  <text x='50' y='63' font-family="'Segoe UI', sans-serif" font-size='46' font-weight='700' text-anchor='middle' fill='#FFFFFF'>
    {label}
  </text>
</svg>"##,
        background = colors.background,
        accent = colors.accent,
        label = escape_xml(label),
    );

    let mut out = svg.trim().to_string();
    out.push('\n');
    out
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
