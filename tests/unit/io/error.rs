//! Tests for error construction and display formatting

use quadseg::SegmentationError;
use quadseg::io::error::{invalid_parameter, invalid_target};
use std::error::Error;

#[test]
fn test_invalid_parameter_message_names_the_parameter() {
    let error = invalid_parameter("min_region_size", &0, &"must be at least one pixel");

    let message = error.to_string();
    assert!(message.contains("min_region_size"));
    assert!(message.contains("at least one pixel"));
}

#[test]
fn test_invalid_target_reports_through_the_target_parameter() {
    let error = invalid_target("Target must be a PNG file or directory");

    assert!(matches!(
        error,
        SegmentationError::InvalidParameter {
            parameter: "target",
            ..
        }
    ));
}

#[test]
fn test_io_errors_convert_to_file_system_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");

    let error = SegmentationError::from(io_error);

    assert!(matches!(error, SegmentationError::FileSystem { .. }));
    assert!(error.source().is_some());
}

#[test]
fn test_region_shape_error_has_no_source() {
    let error = SegmentationError::InvalidRegionShape {
        width: 3,
        height: 3,
    };

    assert!(error.source().is_none());
    assert!(error.to_string().contains("3x3"));
}
