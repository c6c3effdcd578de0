//! Grayscale PNG import and export

use crate::io::error::{Result, SegmentationError};
use image::{GrayImage, Luma};
use ndarray::Array2;
use std::path::Path;

/// Load an image as a single-channel 8-bit raster
///
/// Any supported input format is accepted; multi-channel images are
/// converted to luma, matching grayscale decoding in the reference tool.
/// The returned array is row-major: `raster[[row, col]]`.
///
/// # Errors
///
/// Returns [`SegmentationError::ImageLoad`] if the file cannot be read or
/// decoded.
pub fn load_grayscale(path: &Path) -> Result<Array2<u8>> {
    let decoded = image::open(path).map_err(|e| SegmentationError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let luma = decoded.to_luma8();
    let (width, height) = luma.dimensions();
    let mut raster = Array2::zeros((height as usize, width as usize));

    for (x, y, pixel) in luma.enumerate_pixels() {
        if let Some(value) = raster.get_mut([y as usize, x as usize]) {
            *value = pixel.0[0];
        }
    }

    Ok(raster)
}

/// Export a grayscale raster as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_raster_as_png(raster: &Array2<u8>, output_path: &Path) -> Result<()> {
    let (rows, cols) = raster.dim();
    let mut img = GrayImage::new(cols as u32, rows as u32);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let value = raster.get([y as usize, x as usize]).copied().unwrap_or(0);
        *pixel = Luma([value]);
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| SegmentationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| SegmentationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
