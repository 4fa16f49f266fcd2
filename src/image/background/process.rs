use image::RgbaImage;

use crate::config::BackgroundConfig;
use crate::image::background::detect::has_white_corner;
use crate::image::background::floodfill::apply_corner_fill;
use crate::image::background::mask::build_fill_mask;
use crate::{debug, log};

/// Remove the edge-connected white background from `img` in place.
///
/// Removal only runs when the corner gate detects an opaque white
/// background. Detection errors are logged and leave the image untouched.
///
/// Returns `true` if the fill was applied.
pub fn remove_background(img: &mut RgbaImage, config: &BackgroundConfig) -> bool {
    match has_white_corner(img, config.threshold) {
        Ok(true) => {
            let mask = build_fill_mask(img, config.threshold);
            apply_corner_fill(img, &mask);
            true
        }
        Ok(false) => {
            debug!("background"; "corner is not opaque white, keeping background");
            false
        }
        Err(err) => {
            log!("background"; "transparency detection skipped: {err}");
            false
        }
    }
}
