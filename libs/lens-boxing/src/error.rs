//! # Error Types
//!
//! Error types for the boxing pipeline. Degenerate geometry is not an error:
//! an empty sample or a curve with no point away from its center yields
//! `Ok(None)` from the long-axis computation. Errors are reserved for
//! malformed input and host failures.

use config::constants::ConfigError;
use glam::DVec3;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while computing or emitting boxing geometry.
///
/// ## Example
///
/// ```rust
/// use lens_boxing::{BoundingBox, BoxingError, Point3};
///
/// let err = BoundingBox::new(Point3::new(1.0, 0.0, 0.0), Point3::ZERO).unwrap_err();
/// assert!(matches!(err, BoxingError::InvalidBoundingBox { .. }));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoxingError {
    /// Bounding box minimum exceeds its maximum on x or y.
    #[error("Invalid bounding box: min {min:?} exceeds max {max:?}")]
    InvalidBoundingBox {
        /// Minimum corner as supplied
        min: DVec3,
        /// Maximum corner as supplied
        max: DVec3,
    },

    /// Sample count must be at least one interval.
    #[error("Invalid sample count: {0}")]
    InvalidSampleCount(usize),

    /// The curve evaluator could not produce extents or points.
    #[error("Curve evaluation failed: {0}")]
    Evaluator(String),

    /// The curve has no usable geometry.
    #[error("Degenerate curve: {0}")]
    DegenerateCurve(String),

    /// A reference plan lacks an entry that emission needs.
    #[error("Incomplete reference plan: {0}")]
    IncompletePlan(String),

    /// No sketch is in edit mode.
    #[error("A sketch must be active. Please enter \"Edit Sketch\" mode.")]
    NoActiveSketch,

    /// The user selected zero or several entities.
    #[error("Please select the eyewire, represented \nby a single closed sketch curve.")]
    InvalidSelectionCount(usize),

    /// The selected entity is not a closed sketch curve.
    #[error("The selected item must be a single closed sketch curve.\nTry to ensure all points are connected.")]
    NotClosedCurve,

    /// A host call failed.
    #[error("Host operation '{operation}' failed: {message}")]
    Host {
        /// Name of the host operation
        operation: String,
        /// Error message
        message: String,
    },

    /// The command was triggered before the add-in was started.
    #[error("Command '{0}' is not registered")]
    CommandNotRegistered(String),

    /// Invalid runtime configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BoxingError {
    /// Creates a host failure error.
    pub fn host(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Host {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether this error describes a problem with the user's sketch or
    /// selection rather than a fault.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::NoActiveSketch | Self::InvalidSelectionCount(_) | Self::NotClosedCurve
        )
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for boxing operations.
pub type BoxingResult<T> = Result<T, BoxingError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoxingError::host("addByTwoPoints", "sketch is locked");
        assert!(err.to_string().contains("addByTwoPoints"));
        assert!(err.to_string().contains("locked"));

        let err = BoxingError::InvalidSampleCount(0);
        assert_eq!(err.to_string(), "Invalid sample count: 0");
    }

    #[test]
    fn test_user_input_classification() {
        assert!(BoxingError::NoActiveSketch.is_user_input());
        assert!(BoxingError::InvalidSelectionCount(2).is_user_input());
        assert!(BoxingError::NotClosedCurve.is_user_input());
        assert!(!BoxingError::Evaluator("boom".into()).is_user_input());
        assert!(!BoxingError::InvalidSampleCount(0).is_user_input());
    }

    #[test]
    fn test_config_error_converts() {
        let err: BoxingError = ConfigError::InvalidSampleCount(0).into();
        assert!(matches!(err, BoxingError::Config(_)));
    }

    /// Errors cross thread boundaries when the core is used as a library.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BoxingError>();
    }
}
