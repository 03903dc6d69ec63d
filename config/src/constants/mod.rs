//! # Configuration Constants
//!
//! Centralized values shared by the lens boxing pipeline.
//!
//! ## Categories
//!
//! - **Sampling**: Boundary discretization of the eyewire curve
//! - **Annotation**: Placement of dimension labels
//! - **Command**: Identity of the add-in command and its toolbar panel

use std::fmt;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Number of intervals the closed curve's parameter domain is split into.
///
/// The sampler evaluates `DEFAULT_SAMPLE_COUNT + 1` points, both domain ends
/// included. The farthest point is picked among these samples only, with no
/// refinement between them, so the effective diameter is accurate to the
/// sampling resolution.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SAMPLE_COUNT;
///
/// let points_evaluated = DEFAULT_SAMPLE_COUNT + 1;
/// assert_eq!(points_evaluated, 201);
/// ```
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Largest sample count the sampler and [`BoxingConfig::new`] accept.
pub const MAX_SAMPLE_COUNT: usize = 100_000;

// =============================================================================
// ANNOTATION CONSTANTS
// =============================================================================

/// Distance between the bounding box and the width/height dimension labels,
/// in sketch units.
///
/// # Example
///
/// ```rust
/// use config::constants::DIMENSION_LABEL_OFFSET;
///
/// let box_top = 4.0;
/// let width_label_y = box_top + DIMENSION_LABEL_OFFSET;
/// assert_eq!(width_label_y, 4.5);
/// ```
pub const DIMENSION_LABEL_OFFSET: f64 = 0.5;

// =============================================================================
// COMMAND CONSTANTS
// =============================================================================

/// Identifier of the command definition registered with the host.
pub const COMMAND_ID: &str = "LensBoxerHotkeyCmd";

/// Display name of the command.
pub const COMMAND_NAME: &str = "LensBoxer";

/// Tooltip text of the command.
pub const COMMAND_DESCRIPTION: &str = "Creates boxing references for a selected closed curve.";

/// Toolbar panel the command button is added to.
pub const PANEL_ID: &str = "SketchCreatePanel";

/// Resource folder for the command icons, relative to the add-in manifest.
pub const RESOURCE_FOLDER: &str = "resources";

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Immutable snapshot of the tunable boxing parameters.
///
/// # Examples
/// ```
/// use config::constants::BoxingConfig;
/// let config = BoxingConfig::default();
/// assert!(config.label_offset > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxingConfig {
    /// Number of parameter intervals used when sampling the eyewire.
    pub sample_count: usize,
    /// Offset of the width/height dimension labels from the box.
    pub label_offset: f64,
}

impl BoxingConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// sample count and label offset.
    ///
    /// # Examples
    /// ```
    /// use config::constants::BoxingConfig;
    /// let cfg = BoxingConfig::new(360, 1.0).expect("valid config");
    /// assert_eq!(cfg.sample_count, 360);
    /// ```
    pub fn new(sample_count: usize, label_offset: f64) -> Result<Self, ConfigError> {
        if sample_count == 0 || sample_count > MAX_SAMPLE_COUNT {
            return Err(ConfigError::InvalidSampleCount(sample_count));
        }
        if !label_offset.is_finite() || label_offset < 0.0 {
            return Err(ConfigError::InvalidLabelOffset(label_offset));
        }
        Ok(Self {
            sample_count,
            label_offset,
        })
    }
}

impl Default for BoxingConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            label_offset: DIMENSION_LABEL_OFFSET,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the sample count is zero or above [`MAX_SAMPLE_COUNT`].
    InvalidSampleCount(usize),
    /// Raised when the label offset is negative or not finite.
    InvalidLabelOffset(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSampleCount(value) => {
                write!(f, "sample_count must be in 1..={MAX_SAMPLE_COUNT}: {value}")
            }
            ConfigError::InvalidLabelOffset(value) => {
                write!(f, "label_offset must be finite and >= 0: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
