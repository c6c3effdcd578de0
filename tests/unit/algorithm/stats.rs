//! Tests for single-pass region statistics

use ndarray::{Array2, array};
use quadseg::algorithm::stats::RegionStats;
use quadseg::spatial::rect::Rect;

#[test]
fn test_uniform_region_has_zero_deviation() {
    let raster = Array2::from_elem((4, 4), 77u8);

    let stats = RegionStats::measure(&raster, Rect::new(0, 0, 4, 4));

    assert!((stats.mean - 77.0).abs() < f64::EPSILON);
    assert!(stats.std_dev.abs() < f64::EPSILON);
}

#[test]
fn test_two_level_region_matches_population_deviation() {
    let raster = array![[0u8, 255], [0, 255]];

    let stats = RegionStats::measure(&raster, Rect::new(0, 0, 2, 2));

    assert!((stats.mean - 127.5).abs() < 1e-9);
    assert!((stats.std_dev - 127.5).abs() < 1e-9);
}

#[test]
fn test_single_pixel_region_is_degenerate() {
    let raster = Array2::from_elem((3, 3), 9u8);

    let stats = RegionStats::measure(&raster, Rect::new(1, 2, 1, 1));

    assert!((stats.mean - 9.0).abs() < f64::EPSILON);
    assert!(stats.std_dev.abs() < f64::EPSILON);
}

#[test]
fn test_empty_region_yields_the_zero_default() {
    let raster = Array2::from_elem((3, 3), 50u8);

    let stats = RegionStats::measure(&raster, Rect::new(0, 0, 0, 3));

    assert_eq!(stats, RegionStats::default());
}

#[test]
fn test_region_restricts_to_its_rectangle() {
    // Left half dark, right half bright; only the left half is measured
    let raster = array![[10u8, 10, 200, 200], [10, 10, 200, 200]];

    let stats = RegionStats::measure(&raster, Rect::new(0, 0, 2, 2));

    assert!((stats.mean - 10.0).abs() < f64::EPSILON);
    assert!(stats.std_dev.abs() < f64::EPSILON);
}
