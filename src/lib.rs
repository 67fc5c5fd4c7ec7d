//! Store listing asset preparation.
//!
//! This crate produces the image assets a Chrome Web Store listing needs:
//!
//! - [`fit_file`] scales an arbitrary screenshot onto the fixed 1280x800
//!   listing canvas, centered over a dark background.
//! - [`icons::write_icons`] renders the extension icon set (16, 48 and
//!   128 pixels) from scratch.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = webstore_assets::fit_file(
//!     Path::new("screenshot.png"),
//!     Path::new("store/screenshot.png"),
//! )?;
//! println!("scaled to {}x{}", report.scaled_width, report.scaled_height);
//! # Ok::<(), webstore_assets::AssetError>(())
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod fit;
pub mod icons;
mod io;

pub use fit::{fit_file, fit_image, FitReport, BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use icons::ICON_SIZES;

/// Errors that can occur while preparing store assets.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("input file not found or unreadable: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("image has invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(image::ImageError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AssetError>;
