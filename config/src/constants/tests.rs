//! Tests for the runtime boxing configuration.

use super::*;

/// Ensures default configuration is sane.
///
/// # Examples
/// ```
/// use config::constants::BoxingConfig;
/// let cfg = BoxingConfig::default();
/// assert!(cfg.sample_count >= 1);
/// ```
#[test]
fn default_config_is_valid() {
    let cfg = BoxingConfig::default();
    assert_eq!(cfg.sample_count, DEFAULT_SAMPLE_COUNT);
    assert_eq!(cfg.label_offset, DIMENSION_LABEL_OFFSET);
    assert_eq!(BoxingConfig::new(cfg.sample_count, cfg.label_offset), Ok(cfg));
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        BoxingConfig::new(0, 0.5).unwrap_err(),
        ConfigError::InvalidSampleCount(0)
    );
    assert_eq!(
        BoxingConfig::new(MAX_SAMPLE_COUNT + 1, 0.5).unwrap_err(),
        ConfigError::InvalidSampleCount(MAX_SAMPLE_COUNT + 1)
    );
    assert_eq!(
        BoxingConfig::new(200, -1.0).unwrap_err(),
        ConfigError::InvalidLabelOffset(-1.0)
    );
    assert!(BoxingConfig::new(200, f64::NAN).is_err());
}

#[test]
fn zero_label_offset_is_allowed() {
    assert!(BoxingConfig::new(1, 0.0).is_ok());
}

#[test]
fn error_display_names_the_field() {
    assert!(ConfigError::InvalidSampleCount(0)
        .to_string()
        .contains("sample_count"));
    assert!(ConfigError::InvalidLabelOffset(-2.0)
        .to_string()
        .contains("label_offset"));
}
