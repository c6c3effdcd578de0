//! Constants and runtime configuration defaults

// Default thresholds for the segmentation pipeline
/// Standard-deviation ceiling below which a region counts as homogeneous
pub const DEFAULT_SPLIT_THRESHOLD: f64 = 10.0;
/// Maximum mean-intensity difference for merging adjacent quadrants
pub const DEFAULT_MERGE_THRESHOLD: f64 = 5.0;
/// Side length at or below which regions are never subdivided
pub const DEFAULT_MIN_REGION_SIZE: usize = 8;

/// Intensity used for partition-boundary outlines
pub const BOUNDARY_INTENSITY: u8 = 0;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to segmented output filenames
pub const OUTPUT_SUFFIX: &str = "_segmented";
/// Suffix added to boundary-overlay output filenames
pub const BOUNDARY_SUFFIX: &str = "_boundaries";
