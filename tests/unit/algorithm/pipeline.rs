//! Tests for configuration validation and pipeline preconditions

use ndarray::Array2;
use quadseg::io::configuration::{
    DEFAULT_MERGE_THRESHOLD, DEFAULT_MIN_REGION_SIZE, DEFAULT_SPLIT_THRESHOLD,
};
use quadseg::{SegmentationConfig, SegmentationError, run};

#[test]
fn test_defaults_come_from_the_configuration_module() {
    let parameters = SegmentationConfig::default();

    assert!((parameters.split_threshold - DEFAULT_SPLIT_THRESHOLD).abs() < f64::EPSILON);
    assert!((parameters.merge_threshold - DEFAULT_MERGE_THRESHOLD).abs() < f64::EPSILON);
    assert_eq!(parameters.min_region_size, DEFAULT_MIN_REGION_SIZE);
}

#[test]
fn test_negative_split_threshold_is_rejected() {
    let parameters = SegmentationConfig {
        split_threshold: -1.0,
        ..SegmentationConfig::default()
    };

    let error = parameters.validate().expect_err("must reject");
    assert!(matches!(
        error,
        SegmentationError::InvalidParameter {
            parameter: "split_threshold",
            ..
        }
    ));
}

#[test]
fn test_non_finite_merge_threshold_is_rejected() {
    let parameters = SegmentationConfig {
        merge_threshold: f64::NAN,
        ..SegmentationConfig::default()
    };

    let error = parameters.validate().expect_err("must reject");
    assert!(matches!(
        error,
        SegmentationError::InvalidParameter {
            parameter: "merge_threshold",
            ..
        }
    ));
}

#[test]
fn test_zero_minimum_region_size_is_rejected() {
    let parameters = SegmentationConfig {
        min_region_size: 0,
        ..SegmentationConfig::default()
    };

    let error = parameters.validate().expect_err("must reject");
    assert!(matches!(
        error,
        SegmentationError::InvalidParameter {
            parameter: "min_region_size",
            ..
        }
    ));
}

#[test]
fn test_run_validates_the_configuration_before_the_shape() {
    let raster = Array2::from_elem((3, 5), 1u8);
    let parameters = SegmentationConfig {
        min_region_size: 0,
        ..SegmentationConfig::default()
    };

    let error = run(&raster, &parameters).expect_err("must reject");
    assert!(matches!(error, SegmentationError::InvalidParameter { .. }));
}

#[test]
fn test_threshold_zero_still_terminates_on_uniform_regions() {
    let raster = Array2::from_elem((8, 8), 9u8);
    let parameters = SegmentationConfig {
        split_threshold: 0.0,
        merge_threshold: 0.0,
        min_region_size: 1,
    };

    let segmentation = run(&raster, &parameters).expect("uniform raster segments");
    assert_eq!(segmentation.tree.len(), 1);
    assert!(segmentation.raster.iter().all(|&value| value == 9));
}
