//! Mean and standard deviation of rectangular raster regions

use crate::spatial::rect::Rect;
use ndarray::Array2;

/// First- and second-order intensity statistics of one region
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionStats {
    /// Mean intensity
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl RegionStats {
    /// Measure a rectangular view of the raster in a single pass
    ///
    /// Accumulates sum and sum of squares, then derives the population
    /// standard deviation. Degenerate regions are well defined: a 1x1 or
    /// uniform region has zero deviation, and an empty region yields the
    /// zero default. The variance is clamped at zero before the square root
    /// to absorb floating-point cancellation on near-uniform regions.
    pub fn measure(raster: &Array2<u8>, rect: Rect) -> Self {
        let mut sum = 0.0f64;
        let mut sum_of_squares = 0.0f64;
        let mut count = 0usize;

        for row in rect.rows() {
            for col in rect.cols() {
                if let Some(&value) = raster.get([row, col]) {
                    let intensity = f64::from(value);
                    sum += intensity;
                    sum_of_squares += intensity * intensity;
                    count += 1;
                }
            }
        }

        if count == 0 {
            return Self::default();
        }

        let samples = count as f64;
        let mean = sum / samples;
        let variance = mean.mul_add(-mean, sum_of_squares / samples).max(0.0);

        Self {
            mean,
            std_dev: variance.sqrt(),
        }
    }
}
