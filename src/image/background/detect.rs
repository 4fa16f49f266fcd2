use anyhow::{Result, bail};
use image::RgbaImage;

/// Decide whether background removal should run.
///
/// The top-left corner pixel must be opaque and white-ish: every RGB
/// channel strictly above `threshold`. Images that were already processed
/// have a transparent corner and are skipped.
pub(super) fn has_white_corner(img: &RgbaImage, threshold: u8) -> Result<bool> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        bail!("image has no pixels ({width}x{height})");
    }

    let corner = img.get_pixel(0, 0);
    Ok(corner[3] > 0 && corner.0[..3].iter().all(|&channel| channel > threshold))
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::has_white_corner;

    const THRESHOLD: u8 = 240;

    fn single_pixel(pixel: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(1, 1, Rgba(pixel))
    }

    #[test]
    fn detects_opaque_white_corner() {
        assert!(has_white_corner(&single_pixel([255, 255, 255, 255]), THRESHOLD).unwrap());
        assert!(has_white_corner(&single_pixel([241, 241, 241, 1]), THRESHOLD).unwrap());
    }

    #[test]
    fn rejects_transparent_corner() {
        assert!(!has_white_corner(&single_pixel([255, 255, 255, 0]), THRESHOLD).unwrap());
    }

    #[test]
    fn rejects_dark_corner() {
        assert!(!has_white_corner(&single_pixel([10, 20, 30, 255]), THRESHOLD).unwrap());
        // One channel at threshold is not enough; the comparison is strict.
        assert!(!has_white_corner(&single_pixel([255, 255, 240, 255]), THRESHOLD).unwrap());
    }

    #[test]
    fn errors_on_empty_image() {
        assert!(has_white_corner(&RgbaImage::new(0, 0), THRESHOLD).is_err());
    }
}
