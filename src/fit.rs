//! Fits screenshots onto the fixed store listing canvas.
//!
//! The source image is scaled by the largest factor that keeps it inside
//! 1280x800 without changing its aspect ratio, centered, and composited
//! over an opaque dark background. Images smaller than the canvas are
//! scaled up with the same filter.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, Rgba, RgbaImage};

use crate::{io, AssetError, Result};

/// Store listing canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1280;
/// Store listing canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 800;
/// Background the scaled image is composited over.
pub const BACKGROUND: Rgba<u8> = Rgba([28, 28, 28, 255]);

/// Geometry of a completed fit, for logging and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitReport {
    pub source_width: u32,
    pub source_height: u32,
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// Scales `source` to fit the canvas and composites it over the background.
///
/// Returns the finished canvas and the geometry that was used. Transparent
/// sources are alpha-blended over the background before the canvas is
/// flattened to RGB.
pub fn fit_image(source: &DynamicImage) -> Result<(RgbImage, FitReport)> {
    let (source_width, source_height) = (source.width(), source.height());
    if source_width == 0 || source_height == 0 {
        return Err(AssetError::InvalidDimensions {
            width: source_width,
            height: source_height,
        });
    }

    let (scaled_width, scaled_height) = scaled_dimensions(source_width, source_height);
    let (offset_x, offset_y) = centering_offset(scaled_width, scaled_height);
    log::debug!(
        "fitting {}x{} -> {}x{} at ({}, {})",
        source_width,
        source_height,
        scaled_width,
        scaled_height,
        offset_x,
        offset_y
    );

    let source_rgba = source.to_rgba8();
    let scaled = imageops::resize(
        &source_rgba,
        scaled_width,
        scaled_height,
        FilterType::Lanczos3,
    );

    let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);
    imageops::overlay(&mut canvas, &scaled, offset_x as i64, offset_y as i64);

    let report = FitReport {
        source_width,
        source_height,
        scaled_width,
        scaled_height,
        offset_x,
        offset_y,
    };
    Ok((DynamicImage::ImageRgba8(canvas).into_rgb8(), report))
}

/// Reads `input`, fits it onto the canvas and writes the result to `output`
/// as PNG. An existing file at `output` is overwritten.
pub fn fit_file(input: &Path, output: &Path) -> Result<FitReport> {
    let source = io::read_image(input)?;
    let (canvas, report) = fit_image(&source)?;
    io::write_png(&DynamicImage::ImageRgb8(canvas), output)?;
    Ok(report)
}

/// Largest dimensions that fit the canvas while preserving aspect ratio.
///
/// Computed in integer arithmetic so the binding axis lands exactly on the
/// canvas edge. The other axis rounds down and is clamped to 1 pixel for
/// extreme aspect ratios.
fn scaled_dimensions(width: u32, height: u32) -> (u32, u32) {
    let (w, h) = (width as u64, height as u64);
    let (tw, th) = (CANVAS_WIDTH as u64, CANVAS_HEIGHT as u64);
    if tw * h <= th * w {
        // width is the binding axis
        let scaled_height = ((h * tw / w) as u32).max(1);
        (CANVAS_WIDTH, scaled_height)
    } else {
        let scaled_width = ((w * th / h) as u32).max(1);
        (scaled_width, CANVAS_HEIGHT)
    }
}

/// Top-left placement that centers the scaled image on the canvas. Odd
/// leftover pixels go to the right and bottom edges.
fn centering_offset(width: u32, height: u32) -> (u32, u32) {
    ((CANVAS_WIDTH - width) / 2, (CANVAS_HEIGHT - height) / 2)
}
