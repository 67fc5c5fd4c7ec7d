//! PNG read/write helpers shared by the fitter and the icon generator.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::{AssetError, Result};

/// Reads and decodes an image from disk.
///
/// Any failure to read the file (missing, permission denied) is reported as
/// [`AssetError::FileNotFound`]; bytes that read fine but do not decode are
/// reported as [`AssetError::Decode`].
pub fn read_image(path: &Path) -> Result<DynamicImage> {
    let bytes = fs::read(path).map_err(|_| AssetError::FileNotFound(path.to_path_buf()))?;
    image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Encodes `image` as PNG and writes it to `path`.
///
/// Encoding happens in memory first, so an encoding failure never leaves a
/// truncated file behind. An existing file at `path` is overwritten.
pub fn write_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let mut encoded = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .map_err(AssetError::Encode)?;
    fs::write(path, &encoded).map_err(|source| AssetError::Write {
        path: path.to_path_buf(),
        source,
    })
}
