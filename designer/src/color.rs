//! Shared color helpers for furniture fills and outlines.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Channels used when an item carries an unparseable color.
pub const FALLBACK_RGB: (u8, u8, u8) = (0x88, 0x88, 0x88);

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => Some((channel(&hex[0..1].repeat(2))?, channel(&hex[1..2].repeat(2))?, channel(&hex[2..3].repeat(2))?)),
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

fn channel(pair: &str) -> Option<u8> {
    match u8::from_str_radix(pair, 16) {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

/// Scale every channel toward black by `amount` in `[0, 1]`.
#[must_use]
pub fn darken(hex: &str, amount: f64) -> String {
    let k = 1.0 - amount.clamp(0.0, 1.0);
    map_channels(hex, |c| c * k)
}

/// Move every channel toward white by `amount` in `[0, 1]`.
#[must_use]
pub fn lighten(hex: &str, amount: f64) -> String {
    let k = amount.clamp(0.0, 1.0);
    map_channels(hex, |c| c + (255.0 - c) * k)
}

/// CSS `rgb()` string for a hex color, or the fallback gray.
#[must_use]
pub fn css_rgb(hex: &str) -> String {
    map_channels(hex, |c| c)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn map_channels(hex: &str, f: impl Fn(f64) -> f64) -> String {
    let (r, g, b) = parse_hex_rgb(hex).unwrap_or(FALLBACK_RGB);
    let apply = |c: u8| f(f64::from(c)).round().clamp(0.0, 255.0) as u8;
    format!("rgb({},{},{})", apply(r), apply(g), apply(b))
}
