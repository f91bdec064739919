//! Comparison regression test
//!
//! Exercises whole-image comparison on synthetic images:
//! - identical inputs give no differences and infinite PSNR in every mode
//! - the diff count never grows as the tolerance grows
//! - diffRGB output is the exact per-channel difference
//! - highlight paints exactly the differing pixels
//! - heatmap follows the blue-to-red ramp
//! - the metrics agree with a direct per-pixel recomputation

use pixdiff_core::{ALERT_COLOR, HEATMAP_GREEN_CAP, PixelBuffer, RenderMode, compare, peak_snr};
use pixdiff_test::{RegParams, synth};

#[test]
fn compare_reg() {
    let mut rp = RegParams::new("compare");

    let base = synth::gradient(40, 30);
    let noisy = synth::with_noise(&base, 24, 11);

    // Part 1: self comparison
    for mode in RenderMode::ALL {
        let r = compare(&base, &base, mode, 0).unwrap();
        rp.compare_values(0.0, r.metrics.diff_pixel_count as f64, 0.0);
        rp.compare_values(0.0, r.metrics.diff_percentage, 0.0);
        rp.compare_values(0.0, r.metrics.mean_squared_error, 0.0);
        rp.compare_values(f64::INFINITY, r.metrics.peak_signal_to_noise_ratio, 0.0);
        rp.compare_values(1200.0, r.metrics.total_pixel_count as f64, 0.0);
    }

    // Part 2: tolerance monotonicity
    let mut last = u64::MAX;
    for tol in [0u8, 4, 8, 16, 23, 24, 255] {
        let m = compare(&base, &noisy, RenderMode::Highlight, tol).unwrap().metrics;
        rp.compare_values(1.0, (m.diff_pixel_count <= last) as u8 as f64, 0.0);
        last = m.diff_pixel_count;
    }
    // nothing exceeds the noise amplitude
    rp.compare_values(0.0, last as f64, 0.0);

    // Part 3: output shape, opaque alpha, diffRGB exactness
    let r = compare(&base, &noisy, RenderMode::DiffRgb, 16).unwrap();
    rp.compare_values(base.data().len() as f64, r.output.data().len() as f64, 0.0);
    let mut exact = true;
    for y in 0..base.height() {
        for x in 0..base.width() {
            let [ra, ga, ba, _] = base.get_rgba(x, y).unwrap();
            let [rb, gb, bb, _] = noisy.get_rgba(x, y).unwrap();
            let want = [ra.abs_diff(rb), ga.abs_diff(gb), ba.abs_diff(bb), 255];
            exact &= r.output.get_rgba(x, y) == Some(want);
        }
    }
    rp.compare_values(1.0, exact as u8 as f64, 0.0);
    rp.write_buffer(&r.output).unwrap();

    // Part 4: metrics against a direct recomputation
    let tol = 10u8;
    let m = compare(&base, &noisy, RenderMode::Heatmap, tol).unwrap().metrics;
    let mut diff = 0u64;
    let mut sq = 0.0f64;
    for (pa, pb) in base.data().chunks_exact(4).zip(noisy.data().chunks_exact(4)) {
        let d: Vec<u8> = (0..3).map(|c| pa[c].abs_diff(pb[c])).collect();
        if d.iter().any(|&v| v > tol) {
            diff += 1;
        }
        let avg = d.iter().map(|&v| v as f64).sum::<f64>() / 3.0;
        sq += avg * avg;
    }
    let mse = sq / 1200.0;
    rp.compare_values(diff as f64, m.diff_pixel_count as f64, 0.0);
    rp.compare_values(diff as f64 / 1200.0 * 100.0, m.diff_percentage, 1e-9);
    rp.compare_values(mse, m.mean_squared_error, 1e-6);
    rp.compare_values(peak_snr(mse), m.peak_signal_to_noise_ratio, 1e-6);

    assert!(rp.cleanup(), "compare regression test failed");
}

#[test]
fn compare_highlight_reg() {
    let mut rp = RegParams::new("compare_highlight");

    let a = PixelBuffer::filled(20, 10, [100, 100, 100, 255]).unwrap();
    let b = synth::with_patch(&a, 5, 2, 4, 3, [0, 0, 0]);
    let r = compare(&a, &b, RenderMode::Highlight, 16).unwrap();
    rp.compare_values(12.0, r.metrics.diff_pixel_count as f64, 0.0);
    rp.compare_values(6.0, r.metrics.diff_percentage, 1e-12);

    let [ar, ag, ab] = ALERT_COLOR;
    let mut alerts = 0;
    let mut dimmed = 0;
    for px in r.output.data().chunks_exact(4) {
        match px {
            [r, g, b, 255] if [*r, *g, *b] == [ar, ag, ab] => alerts += 1,
            [60, 60, 60, 255] => dimmed += 1,
            _ => {}
        }
    }
    rp.compare_values(12.0, alerts as f64, 0.0);
    rp.compare_values(188.0, dimmed as f64, 0.0);
    rp.write_buffer(&r.output).unwrap();

    assert!(rp.cleanup(), "compare_highlight regression test failed");
}

#[test]
fn compare_heatmap_reg() {
    let mut rp = RegParams::new("compare_heatmap");

    let black = PixelBuffer::filled(3, 1, [0, 0, 0, 255]).unwrap();
    let mut other = black.clone();
    other.set_rgb(1, 0, 30, 30, 30).unwrap();
    other.set_rgb(2, 0, 255, 255, 255).unwrap();

    let r = compare(&black, &other, RenderMode::Heatmap, 16).unwrap();
    let expect = [[0, 0, 255, 255], [30, 9, 225, 255], [255, 76, 0, 255]];
    for (x, want) in expect.iter().enumerate() {
        let got = r.output.get_rgba(x as u32, 0).unwrap();
        for c in 0..4 {
            rp.compare_values(want[c] as f64, got[c] as f64, 0.0);
        }
    }
    // green never exceeds its cap
    let wide = compare(&black, &synth::gradient(3, 1), RenderMode::Heatmap, 0).unwrap();
    let max_green = wide.output.data().chunks_exact(4).map(|p| p[1]).max().unwrap();
    rp.compare_values(1.0, (max_green <= HEATMAP_GREEN_CAP) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "compare_heatmap regression test failed");
}

#[test]
fn compare_mismatch_reg() {
    let mut rp = RegParams::new("compare_mismatch");
    let a = synth::gradient(10, 10);
    let b = synth::gradient(10, 11);
    for mode in RenderMode::ALL {
        rp.compare_values(1.0, compare(&a, &b, mode, 16).is_err() as u8 as f64, 0.0);
    }
    assert!(rp.cleanup(), "compare_mismatch regression test failed");
}
