//! Fitting arbitrary rasters into the power-of-two square the quadtree needs
//!
//! The split phase requires a square working region whose side halves evenly
//! all the way down, so callers frame their input first: crop to the largest
//! power-of-two square and, optionally, smooth the raster before splitting.
//! Framing is a collaborator of the pipeline, not part of it.

use crate::io::error::{Result, SegmentationError};
use ndarray::{Array2, s};

/// Side length of the working square for a raster of the given extent
///
/// Returns the largest `2^k` not exceeding the shorter dimension, or zero
/// for an empty raster.
pub const fn working_side(width: usize, height: usize) -> usize {
    let shorter = if width < height { width } else { height };
    match shorter.checked_ilog2() {
        Some(exponent) => 1 << exponent,
        None => 0,
    }
}

/// Crop a raster to its power-of-two working square
///
/// The crop is anchored at the origin (top-left), matching the reference
/// behavior; no pixels are resampled.
///
/// # Errors
///
/// Returns [`SegmentationError::InvalidRegionShape`] if the raster is empty
/// in either dimension.
pub fn crop_to_square(raster: &Array2<u8>) -> Result<Array2<u8>> {
    let (rows, cols) = raster.dim();
    let side = working_side(cols, rows);

    if side == 0 {
        return Err(SegmentationError::InvalidRegionShape {
            width: cols,
            height: rows,
        });
    }

    Ok(raster.slice(s![..side, ..side]).to_owned())
}

/// Apply one pass of 3x3 binomial (Gaussian) smoothing
///
/// Border pixels are handled by clamping neighbor coordinates to the raster,
/// so the output has the same extent as the input. Intended as optional
/// preprocessing before framing; the segmentation pipeline never smooths on
/// its own.
pub fn smooth(raster: &Array2<u8>) -> Array2<u8> {
    let (rows, cols) = raster.dim();
    let mut output = Array2::zeros((rows, cols));

    if rows == 0 || cols == 0 {
        return output;
    }

    for row in 0..rows {
        for col in 0..cols {
            let mut accumulator = 0u32;

            for delta_row in -1i64..=1 {
                for delta_col in -1i64..=1 {
                    let neighbor_row =
                        (row as i64 + delta_row).clamp(0, rows as i64 - 1) as usize;
                    let neighbor_col =
                        (col as i64 + delta_col).clamp(0, cols as i64 - 1) as usize;

                    // Binomial taps: 1-2-1 per axis, 16 in total
                    let weight = (2 - delta_row.unsigned_abs()) * (2 - delta_col.unsigned_abs());
                    let value = raster
                        .get([neighbor_row, neighbor_col])
                        .copied()
                        .unwrap_or(0);
                    accumulator += weight as u32 * u32::from(value);
                }
            }

            if let Some(pixel) = output.get_mut([row, col]) {
                *pixel = (accumulator / 16) as u8;
            }
        }
    }

    output
}
