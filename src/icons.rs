//! Renders the extension icon set.
//!
//! Each icon is a dark rounded tile carrying two green transfer arrows,
//! rasterized at 4x resolution and downsampled for smooth edges. All
//! geometry is derived from the icon size, so one path covers every entry
//! in [`ICON_SIZES`].

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

use crate::{io, AssetError, Result};

/// Icon sizes the store manifest expects, in pixels.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

const TILE: Rgba<u8> = Rgba([26, 26, 26, 255]);
const ACCENT: Rgba<u8> = Rgba([62, 207, 142, 255]);

// Shape metrics as fractions of the icon side.
const CORNER_RADIUS: f32 = 0.18;
const STROKE_WIDTH: f32 = 0.10;
const EDGE_PAD: f32 = 0.20;
const ARROW_SPREAD: f32 = 0.12;
const HEAD_LENGTH: f32 = 0.18;
const HEAD_FLARE: f32 = 0.10;

const SUPERSAMPLE: u32 = 4;

/// Renders a single icon at `size`x`size` pixels.
///
/// Corners outside the rounded tile stay fully transparent.
pub fn render_icon(size: u32) -> RgbaImage {
    let hi_size = size * SUPERSAMPLE;
    let side = hi_size as f32;
    let radius = CORNER_RADIUS * side;
    let half_stroke = STROKE_WIDTH * side / 2.0;
    let strokes = arrow_strokes(side);

    let mut hi = RgbaImage::new(hi_size, hi_size);
    for (x, y, pixel) in hi.enumerate_pixels_mut() {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        if !inside_rounded_square(px, py, side, radius) {
            continue;
        }
        let on_stroke = strokes
            .iter()
            .any(|s| segment_distance(px, py, s[0], s[1], s[2], s[3]) <= half_stroke);
        *pixel = if on_stroke { ACCENT } else { TILE };
    }

    imageops::resize(&hi, size, size, FilterType::Triangle)
}

/// Renders every size in [`ICON_SIZES`] into `dir` as `icon<size>.png`.
///
/// The directory is created if it does not exist; existing icons are
/// overwritten. Returns the written paths.
pub fn write_icons(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| AssetError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        log::debug!("rendering {size}x{size} icon");
        let icon = render_icon(size);
        let path = dir.join(format!("icon{size}.png"));
        io::write_png(&DynamicImage::ImageRgba8(icon), &path)?;
        written.push(path);
    }
    Ok(written)
}

/// The six stroke segments of the two arrows: an upper arrow pointing
/// right and a mirrored lower arrow pointing left, each a shaft plus two
/// head flares. Coordinates are `[ax, ay, bx, by]`.
fn arrow_strokes(side: f32) -> [[f32; 4]; 6] {
    let pad = EDGE_PAD * side;
    let spread = ARROW_SPREAD * side;
    let head = HEAD_LENGTH * side;
    let flare = HEAD_FLARE * side;
    let y_top = side / 2.0 - spread;
    let y_bottom = side / 2.0 + spread;
    let left = pad;
    let right = side - pad;

    [
        [left, y_top, right, y_top],
        [right - head, y_top - flare, right, y_top],
        [right - head, y_top + flare, right, y_top],
        [left, y_bottom, right, y_bottom],
        [left + head, y_bottom - flare, left, y_bottom],
        [left + head, y_bottom + flare, left, y_bottom],
    ]
}

/// Whether the point lies inside a rounded square spanning `0..side` with
/// the given corner radius.
fn inside_rounded_square(px: f32, py: f32, side: f32, radius: f32) -> bool {
    let qx = px.clamp(radius, side - radius);
    let qy = py.clamp(radius, side - radius);
    let dx = px - qx;
    let dy = py - qy;
    dx * dx + dy * dy <= radius * radius
}

/// Distance from a point to a line segment, which makes strokes drawn with
/// it round-capped.
fn segment_distance(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        ((px - ax) * abx + (py - ay) * aby) / len_sq
    } else {
        0.0
    };
    let t = t.clamp(0.0, 1.0);
    let dx = px - (ax + t * abx);
    let dy = py - (ay + t * aby);
    (dx * dx + dy * dy).sqrt()
}
