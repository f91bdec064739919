//! PNG I/O regression test
//!
//! Writes synthetic images to `tests/regout`, reads them back through the
//! format-detecting entry points and checks that they survive unchanged.
//! Also covers pair loading with and without fitting the second image.

use pixdiff_core::{Error, PixelBuffer};
use pixdiff_io::{
    ImageFormat, IoError, detect_format, load_pair, read_image_mem, write_image, write_png,
};
use pixdiff_test::{RegParams, load_image, regout_dir, synth};
use std::fs;

fn out_path(name: &str) -> String {
    format!("{}/pngio-{}.png", regout_dir(), name)
}

#[test]
fn pngio_reg() {
    let mut rp = RegParams::new("pngio");
    fs::create_dir_all(regout_dir()).expect("Failed to create output directory");

    // Part 1: file roundtrip
    eprintln!("\n=== Part 1: lossless r/w to file ===");
    let images = [
        synth::gradient(64, 48),
        synth::with_noise(&synth::gradient(17, 9), 40, 3),
        PixelBuffer::filled(1, 1, [12, 34, 56, 78]).unwrap(),
    ];
    for (i, pix) in images.iter().enumerate() {
        let path = out_path(&format!("file.{}", i));
        write_image(pix, &path).expect("write");
        let is_png = detect_format(&path).unwrap() == ImageFormat::Png;
        rp.compare_values(1.0, is_png as u8 as f64, 0.0);
        let back = load_image(&path).expect("read");
        rp.compare_buffers(pix, &back);
    }

    // Part 2: memory roundtrip
    eprintln!("\n=== Part 2: lossless r/w to memory ===");
    for pix in &images {
        let mut bytes = Vec::new();
        write_png(pix, &mut bytes).expect("encode");
        let back = read_image_mem(&bytes).expect("decode");
        rp.compare_buffers(pix, &back);
    }

    assert!(rp.cleanup(), "pngio regression test failed");
}

#[test]
fn pngio_load_pair_reg() {
    let mut rp = RegParams::new("pngio_pair");
    fs::create_dir_all(regout_dir()).expect("Failed to create output directory");

    let a = synth::gradient(8, 6);
    let b_small = synth::gradient(4, 3);
    let path_a = out_path("pair-a");
    let path_b = out_path("pair-b");
    write_image(&a, &path_a).unwrap();
    write_image(&b_small, &path_b).unwrap();

    // same file twice: loaded as is
    let (x, y) = load_pair(&path_a, &path_a, false).unwrap();
    rp.compare_buffers(&x, &a);
    rp.compare_buffers(&y, &a);

    // sizes differ, no fit
    match load_pair(&path_a, &path_b, false) {
        Err(IoError::Core(Error::DimensionMismatch { expected, actual })) => {
            rp.compare_values(8.0, expected.0 as f64, 0.0);
            rp.compare_values(4.0, actual.0 as f64, 0.0);
        }
        other => {
            eprintln!("unexpected result: {:?}", other.map(|_| ()));
            rp.compare_values(1.0, 0.0, 0.0);
        }
    }

    // sizes differ, fit b onto a
    let (x, y) = load_pair(&path_a, &path_b, true).unwrap();
    rp.compare_buffers(&x, &a);
    rp.compare_values(8.0, y.width() as f64, 0.0);
    rp.compare_values(6.0, y.height() as f64, 0.0);
    // each source pixel covers a 2x2 block
    rp.compare_values(1.0, (y.get_rgba(7, 5) == b_small.get_rgba(3, 2)) as u8 as f64, 0.0);
    rp.compare_values(1.0, (y.get_rgba(2, 3) == b_small.get_rgba(1, 1)) as u8 as f64, 0.0);

    // missing file
    let missing = load_pair(&path_a, out_path("does-not-exist"), true);
    rp.compare_values(1.0, matches!(missing, Err(IoError::Io(_))) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "pngio_pair regression test failed");
}
