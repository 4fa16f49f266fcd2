use std::collections::VecDeque;

use image::{Rgba, RgbaImage};

use crate::image::background::mask::{CLASS_NONE, FillMask};

/// Value written into every filled pixel: transparent white.
const FILLED: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Apply the corner-seeded background fill using scanline flood fill.
///
/// Semantically equivalent to a 4-connected pixel BFS from the four image
/// corners, but scanline fill reduces queue operations for large
/// contiguous regions and improves cache locality.
pub(super) fn apply_corner_fill(output: &mut RgbaImage, mask: &FillMask) {
    let width = mask.width;
    let height = mask.height;
    if width == 0 || height == 0 {
        return;
    }

    debug_assert_eq!(output.width(), width);
    debug_assert_eq!(output.height(), height);

    let len = width as usize * height as usize;
    let mut state = vec![0_u8; len]; // 0=unseen, 1=enqueued, 2=done
    let mut queue = VecDeque::with_capacity(4);

    for (x, y) in corner_seeds(width, height) {
        enqueue_seed(&mut queue, &mut state, mask, width, x, y);
    }

    while let Some((sx, y)) = queue.pop_front() {
        let sidx = pixel_index(width, sx, y);
        if state[sidx] == 2 || mask.classes[sidx] == CLASS_NONE {
            continue;
        }

        // Expand the fillable run around the seed.
        let mut left = sx;
        while left > 0 {
            let nidx = pixel_index(width, left - 1, y);
            if state[nidx] == 2 || mask.classes[nidx] == CLASS_NONE {
                break;
            }
            left -= 1;
        }

        let mut right = sx;
        while right + 1 < width {
            let nidx = pixel_index(width, right + 1, y);
            if state[nidx] == 2 || mask.classes[nidx] == CLASS_NONE {
                break;
            }
            right += 1;
        }

        for x in left..=right {
            output.put_pixel(x, y, FILLED);
            state[pixel_index(width, x, y)] = 2;
        }

        if y > 0 {
            enqueue_neighbor_runs(&mut queue, &mut state, mask, width, left, right, y - 1);
        }
        if y + 1 < height {
            enqueue_neighbor_runs(&mut queue, &mut state, mask, width, left, right, y + 1);
        }
    }
}

/// The four fill seeds. Corners collapse together on 1-wide or 1-tall
/// images; the state array deduplicates them.
#[inline]
fn corner_seeds(width: u32, height: u32) -> [(u32, u32); 4] {
    [
        (0, 0),
        (width - 1, 0),
        (0, height - 1),
        (width - 1, height - 1),
    ]
}

#[inline]
fn enqueue_neighbor_runs(
    queue: &mut VecDeque<(u32, u32)>,
    state: &mut [u8],
    mask: &FillMask,
    width: u32,
    left: u32,
    right: u32,
    y: u32,
) {
    let mut x = left;
    while x <= right {
        let idx = pixel_index(width, x, y);
        if state[idx] == 0 && mask.classes[idx] != CLASS_NONE {
            queue.push_back((x, y));
            state[idx] = 1;

            x += 1;
            while x <= right {
                let run_idx = pixel_index(width, x, y);
                if state[run_idx] != 0 || mask.classes[run_idx] == CLASS_NONE {
                    break;
                }
                state[run_idx] = 1;
                x += 1;
            }
        } else {
            x += 1;
        }
    }
}

#[inline]
fn enqueue_seed(
    queue: &mut VecDeque<(u32, u32)>,
    state: &mut [u8],
    mask: &FillMask,
    width: u32,
    x: u32,
    y: u32,
) {
    let idx = pixel_index(width, x, y);
    if state[idx] == 0 && mask.classes[idx] != CLASS_NONE {
        state[idx] = 1;
        queue.push_back((x, y));
    }
}

#[inline]
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use image::{Rgba, RgbaImage};

    use super::{FILLED, apply_corner_fill, corner_seeds};
    use crate::image::background::mask::{CLASS_FILL, CLASS_NONE, FillMask};

    #[test]
    fn matches_reference_bfs_on_random_masks() {
        for seed in 0_u64..48 {
            let width = 31_u32;
            let height = 19_u32;
            let len = width as usize * height as usize;
            let mut rng = Lcg::new(seed.wrapping_mul(1_048_583).wrapping_add(97));

            let mut classes = vec![CLASS_NONE; len];
            for class in classes.iter_mut() {
                if rng.next_u32() % 100 < 55 {
                    *class = CLASS_FILL;
                }
            }

            let mask = FillMask {
                width,
                height,
                classes,
            };

            let mut output_scanline = make_random_image(width, height, &mut rng);
            let mut output_bfs = output_scanline.clone();

            apply_corner_fill(&mut output_scanline, &mask);
            apply_reference_bfs(&mut output_bfs, &mask);

            assert_eq!(output_scanline, output_bfs, "seed={seed}");
        }
    }

    #[test]
    fn handles_degenerate_dimensions() {
        for (width, height) in [(1, 1), (1, 5), (5, 1), (2, 2)] {
            let len = width as usize * height as usize;
            let mask = FillMask {
                width,
                height,
                classes: vec![CLASS_FILL; len],
            };
            let mut img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
            apply_corner_fill(&mut img, &mask);
            assert!(img.pixels().all(|p| *p == FILLED));
        }
    }

    #[test]
    fn does_not_fill_diagonal_only_neighbors() {
        // Corners fillable, center fillable, edge midpoints not: the
        // center touches the corners only diagonally and must survive.
        let width = 3;
        let height = 3;
        let mut classes = vec![CLASS_NONE; 9];
        for (x, y) in corner_seeds(width, height) {
            classes[(y * width + x) as usize] = CLASS_FILL;
        }
        classes[4] = CLASS_FILL; // center

        let mask = FillMask {
            width,
            height,
            classes,
        };
        let mut img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
        apply_corner_fill(&mut img, &mask);

        assert_eq!(*img.get_pixel(0, 0), FILLED);
        assert_eq!(*img.get_pixel(2, 2), FILLED);
        assert_eq!(*img.get_pixel(1, 1), Rgba([255, 255, 255, 255]));
    }

    /// Reference implementation: plain pixel BFS from the same seeds.
    fn apply_reference_bfs(output: &mut RgbaImage, mask: &FillMask) {
        let width = mask.width;
        let height = mask.height;
        let len = width as usize * height as usize;
        let mut visited = vec![false; len];
        let mut queue = VecDeque::new();

        for (x, y) in corner_seeds(width, height) {
            enqueue(&mut queue, &mut visited, mask, width, x, y);
        }

        while let Some((x, y)) = queue.pop_front() {
            if mask.classes[idx(width, x, y)] == CLASS_NONE {
                continue;
            }

            output.put_pixel(x, y, FILLED);

            if x > 0 {
                enqueue(&mut queue, &mut visited, mask, width, x - 1, y);
            }
            if x + 1 < width {
                enqueue(&mut queue, &mut visited, mask, width, x + 1, y);
            }
            if y > 0 {
                enqueue(&mut queue, &mut visited, mask, width, x, y - 1);
            }
            if y + 1 < height {
                enqueue(&mut queue, &mut visited, mask, width, x, y + 1);
            }
        }
    }

    fn enqueue(
        queue: &mut VecDeque<(u32, u32)>,
        visited: &mut [bool],
        mask: &FillMask,
        width: u32,
        x: u32,
        y: u32,
    ) {
        let i = idx(width, x, y);
        if !visited[i] && mask.classes[i] != CLASS_NONE {
            visited[i] = true;
            queue.push_back((x, y));
        }
    }

    #[inline]
    fn idx(width: u32, x: u32, y: u32) -> usize {
        y as usize * width as usize + x as usize
    }

    fn make_random_image(width: u32, height: u32, rng: &mut Lcg) -> RgbaImage {
        let mut image = RgbaImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                image.put_pixel(
                    x,
                    y,
                    Rgba([
                        (rng.next_u32() & 0xFF) as u8,
                        (rng.next_u32() & 0xFF) as u8,
                        (rng.next_u32() & 0xFF) as u8,
                        (rng.next_u32() & 0xFF) as u8,
                    ]),
                );
            }
        }
        image
    }

    struct Lcg {
        state: u64,
    }

    impl Lcg {
        fn new(seed: u64) -> Self {
            Self { state: seed }
        }

        fn next_u32(&mut self) -> u32 {
            self.state = self
                .state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1);
            (self.state >> 32) as u32
        }
    }
}
