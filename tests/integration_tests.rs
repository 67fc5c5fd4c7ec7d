//! End-to-end tests that run the public API against real files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use pretty_assertions::assert_eq;

use webstore_assets::{fit_file, icons, AssetError, ICON_SIZES};

const BG: Rgb<u8> = Rgb([28, 28, 28]);

/// Per-test scratch directory under the system temp dir.
fn scratch_dir(test: &str) -> PathBuf {
    let dir =
        std::env::temp_dir().join(format!("webstore-assets-{}-{test}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    dir
}

fn write_solid_png(path: &Path, width: u32, height: u32, color: Rgb<u8>) {
    RgbImage::from_pixel(width, height, color)
        .save(path)
        .expect("Failed to write test image");
}

#[test]
fn oversized_screenshot_fills_the_canvas() {
    let dir = scratch_dir("oversized");
    let input = dir.join("input.png");
    let output = dir.join("output.png");
    let color = Rgb([180u8, 90, 30]);
    write_solid_png(&input, 2560, 1600, color);

    let report = fit_file(&input, &output).expect("Failed to fit image");
    assert_eq!(report.scaled_width, 1280);
    assert_eq!(report.scaled_height, 800);
    assert_eq!((report.offset_x, report.offset_y), (0, 0));

    let canvas = image::open(&output)
        .expect("Failed to read output")
        .into_rgb8();
    assert_eq!((canvas.width(), canvas.height()), (1280, 800));
    for (x, y) in [(0, 0), (1279, 0), (0, 799), (1279, 799), (640, 400)] {
        assert_eq!(*canvas.get_pixel(x, y), color, "pixel at ({x}, {y})");
    }
}

#[test]
fn square_screenshot_is_pillarboxed() {
    let dir = scratch_dir("pillarbox");
    let input = dir.join("input.png");
    let output = dir.join("output.png");
    let color = Rgb([90u8, 160, 220]);
    write_solid_png(&input, 800, 800, color);

    let report = fit_file(&input, &output).expect("Failed to fit image");
    assert_eq!((report.scaled_width, report.scaled_height), (800, 800));
    assert_eq!((report.offset_x, report.offset_y), (240, 0));

    let canvas = image::open(&output)
        .expect("Failed to read output")
        .into_rgb8();
    for x in 0..canvas.width() {
        let expected = if x < 240 || x >= 1040 { BG } else { color };
        assert_eq!(*canvas.get_pixel(x, 400), expected, "column {x}");
    }
}

#[test]
fn wide_screenshot_is_letterboxed() {
    let dir = scratch_dir("letterbox");
    let input = dir.join("input.png");
    let output = dir.join("output.png");
    let color = Rgb([220u8, 200, 60]);
    write_solid_png(&input, 100, 50, color);

    let report = fit_file(&input, &output).expect("Failed to fit image");
    assert_eq!((report.scaled_width, report.scaled_height), (1280, 640));
    assert_eq!((report.offset_x, report.offset_y), (0, 80));

    let canvas = image::open(&output)
        .expect("Failed to read output")
        .into_rgb8();
    for y in 0..canvas.height() {
        let expected = if y < 80 || y >= 720 { BG } else { color };
        assert_eq!(*canvas.get_pixel(640, y), expected, "row {y}");
    }
}

#[test]
fn refitting_overwrites_with_identical_bytes() {
    let dir = scratch_dir("rerun");
    let input = dir.join("input.png");
    let output = dir.join("output.png");
    write_solid_png(&input, 640, 400, Rgb([12u8, 200, 120]));

    fit_file(&input, &output).expect("Failed to fit image");
    let first = fs::read(&output).expect("Failed to read output");
    fit_file(&input, &output).expect("Failed to refit image");
    let second = fs::read(&output).expect("Failed to read output");
    assert_eq!(first, second);
}

#[test]
fn missing_input_is_reported_and_writes_nothing() {
    let dir = scratch_dir("missing");
    let input = dir.join("no-such-file.png");
    let output = dir.join("output.png");

    match fit_file(&input, &output) {
        Err(AssetError::FileNotFound(path)) => assert_eq!(path, input),
        _ => panic!("expected FileNotFound error"),
    }
    assert!(!output.exists());
}

#[test]
fn undecodable_input_is_reported() {
    let dir = scratch_dir("undecodable");
    let input = dir.join("input.png");
    let output = dir.join("output.png");
    fs::write(&input, b"this is not an image").expect("Failed to write test file");

    match fit_file(&input, &output) {
        Err(AssetError::Decode { path, .. }) => assert_eq!(path, input),
        _ => panic!("expected Decode error"),
    }
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_reported() {
    let dir = scratch_dir("unwritable");
    let input = dir.join("input.png");
    let output = dir.join("missing-subdir").join("output.png");
    write_solid_png(&input, 64, 64, Rgb([10u8, 10, 10]));

    match fit_file(&input, &output) {
        Err(AssetError::Write { path, .. }) => assert_eq!(path, output),
        _ => panic!("expected Write error"),
    }
}

#[test]
fn transparent_input_lands_on_the_background() {
    let dir = scratch_dir("transparent");
    let input = dir.join("input.png");
    let output = dir.join("output.png");
    RgbaImage::from_pixel(400, 400, Rgba([0, 0, 0, 0]))
        .save(&input)
        .expect("Failed to write test image");

    fit_file(&input, &output).expect("Failed to fit image");
    let canvas = image::open(&output)
        .expect("Failed to read output")
        .into_rgb8();
    assert_eq!(*canvas.get_pixel(640, 400), BG);
}

#[test]
fn icon_set_is_written_and_decodable() {
    let dir = scratch_dir("icons").join("icons");

    let written = icons::write_icons(&dir).expect("Failed to write icons");
    assert_eq!(written.len(), ICON_SIZES.len());
    for (path, size) in written.iter().zip(ICON_SIZES) {
        let name = path.file_name().unwrap().to_string_lossy();
        assert_eq!(name, format!("icon{size}.png"));
        let icon = image::open(path)
            .expect("Failed to read icon")
            .into_rgba8();
        assert_eq!((icon.width(), icon.height()), (size, size));
    }

    let large = image::open(&written[2])
        .expect("Failed to read icon")
        .into_rgba8();
    assert_eq!(large.get_pixel(0, 0)[3], 0);
    let center = large.get_pixel(64, 64);
    assert_eq!(center[3], 255);
    assert!(center[0] < 40 && center[1] < 40 && center[2] < 40);

    // a second run overwrites the set in place
    icons::write_icons(&dir).expect("Failed to rewrite icons");
}
