use image::RgbaImage;

pub(super) const CLASS_NONE: u8 = 0;
pub(super) const CLASS_FILL: u8 = 1;

/// Per-pixel fill classification for the corner flood fill.
pub(super) struct FillMask {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) classes: Vec<u8>,
}

/// Build a compact per-pixel mask for the background flood fill.
///
/// A pixel is fillable iff all three RGB channels strictly exceed
/// `threshold`. Alpha is not consulted: already-transparent white pixels
/// stay reachable, so the fill can pass through them.
pub(super) fn build_fill_mask(img: &RgbaImage, threshold: u8) -> FillMask {
    let (width, height) = img.dimensions();
    let len = width as usize * height as usize;
    let mut classes = vec![CLASS_NONE; len];

    for (class, pixel) in classes.iter_mut().zip(img.as_raw().chunks_exact(4)) {
        if pixel[0] > threshold && pixel[1] > threshold && pixel[2] > threshold {
            *class = CLASS_FILL;
        }
    }

    FillMask {
        width,
        height,
        classes,
    }
}
