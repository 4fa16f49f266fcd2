//! Recolor white pixels for the recording icon variant.
//!
//! Every pixel whose RGB channels all strictly exceed the threshold is
//! rewritten to the target color, keeping its original alpha. Pixels the
//! background fill already cleared stay invisible: they keep alpha zero.

use image::RgbaImage;

/// Default recording tint: pure red.
pub const RECORDING_RED: [u8; 3] = [255, 0, 0];

/// Rewrite every above-threshold pixel to `target`, preserving alpha.
pub fn recolor_above_threshold(img: &mut RgbaImage, threshold: u8, target: [u8; 3]) {
    for pixel in img.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if r > threshold && g > threshold && b > threshold {
            pixel.0 = [target[0], target[1], target[2], a];
        }
    }
}

/// Parse a `#rrggbb` color into RGB bytes.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}
