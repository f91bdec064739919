//! Synthetic test images
//!
//! Deterministic generators so regression tests can build their inputs
//! in code.

use pixdiff_core::PixelBuffer;

/// Opaque horizontal gradient: red follows x, green follows y, blue fixed.
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height).expect("gradient dimensions");
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(2).saturating_sub(1).max(1)).min(255) as u8;
            let g = (y * 255 / height.max(2).saturating_sub(1).max(1)).min(255) as u8;
            buf.set_rgb(x, y, r, g, 128).expect("in bounds");
        }
    }
    buf
}

/// Copy of `src` with every channel perturbed by up to `amplitude` in
/// either direction, using a fixed-seed linear congruential generator.
/// Alpha is left untouched.
pub fn with_noise(src: &PixelBuffer, amplitude: u8, seed: u64) -> PixelBuffer {
    let mut out = src.clone();
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let span = amplitude as i32 * 2 + 1;
    for px in out.data_mut().chunks_exact_mut(4) {
        for c in px.iter_mut().take(3) {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let delta = ((state >> 33) % span as u64) as i32 - amplitude as i32;
            *c = (*c as i32 + delta).clamp(0, 255) as u8;
        }
    }
    out
}

/// Copy of `src` with the rectangle `x..x+w`, `y..y+h` painted `rgb`.
pub fn with_patch(src: &PixelBuffer, x: u32, y: u32, w: u32, h: u32, rgb: [u8; 3]) -> PixelBuffer {
    let mut out = src.clone();
    for yy in y..(y + h).min(src.height()) {
        for xx in x..(x + w).min(src.width()) {
            out.set_rgb(xx, yy, rgb[0], rgb[1], rgb[2]).expect("in bounds");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_corners() {
        let g = gradient(5, 3);
        assert_eq!(g.get_rgba(0, 0), Some([0, 0, 128, 255]));
        assert_eq!(g.get_rgba(4, 2), Some([255, 255, 128, 255]));
    }

    #[test]
    fn test_noise_is_deterministic_and_bounded() {
        let g = gradient(16, 16);
        let n1 = with_noise(&g, 5, 7);
        let n2 = with_noise(&g, 5, 7);
        assert_eq!(n1, n2);
        for (a, b) in g.data().iter().zip(n1.data()) {
            assert!(a.abs_diff(*b) <= 5);
        }
    }

    #[test]
    fn test_patch() {
        let g = PixelBuffer::filled(4, 4, [0, 0, 0, 255]).unwrap();
        let p = with_patch(&g, 2, 2, 10, 10, [9, 9, 9]);
        assert_eq!(p.get_rgb(1, 1), Some((0, 0, 0)));
        assert_eq!(p.get_rgb(3, 3), Some((9, 9, 9)));
    }
}
