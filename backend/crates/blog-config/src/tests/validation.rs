use crate::ValidationConfig;

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_default_limits_when_validate_then_ok() {
    assert_that!(ValidationConfig::default().validate(), ok(anything()));
}

#[test]
fn given_zero_title_limit_when_validate_then_error() {
    // Given
    let config = ValidationConfig {
        max_title_length: 0,
        ..ValidationConfig::default()
    };

    // When / Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_title_limit_above_maximum_when_validate_then_error() {
    // Given
    let config = ValidationConfig {
        max_title_length: 501,
        ..ValidationConfig::default()
    };

    // When / Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_category_limit_above_maximum_when_validate_then_error() {
    // Given
    let config = ValidationConfig {
        max_category_length: 201,
        ..ValidationConfig::default()
    };

    // When / Then
    assert_that!(config.validate(), err(anything()));
}
