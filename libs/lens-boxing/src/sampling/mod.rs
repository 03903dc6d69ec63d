//! # Boundary Sampling
//!
//! Discretizes a closed curve's parameter domain into evenly spaced samples.
//!
//! The curve itself is owned by the host; the sampler only needs the
//! [`CurveEvaluator`] capability. Samples are returned in traversal order and
//! include both ends of the domain, which coincide for a closed curve.

use crate::error::{BoxingError, BoxingResult};
use crate::geometry::{BoundingBox, Point3};
use config::constants::MAX_SAMPLE_COUNT;

/// Parametric evaluator of a planar curve.
pub trait CurveEvaluator {
    /// Returns the `(start, end)` parameter range of the curve.
    fn parameter_extents(&self) -> BoxingResult<(f64, f64)>;

    /// Evaluates a single point.
    fn point_at_parameter(&self, parameter: f64) -> BoxingResult<Point3>;

    /// Evaluates a batch of parameters, in order.
    ///
    /// Evaluators with a native batch call override this; the default
    /// evaluates each parameter individually.
    fn points_at_parameters(&self, parameters: &[f64]) -> BoxingResult<Vec<Point3>> {
        parameters
            .iter()
            .map(|&t| self.point_at_parameter(t))
            .collect()
    }
}

/// A sketch curve as the command sees it: an evaluator that also knows
/// whether it is closed and how large it is.
pub trait SketchCurve: CurveEvaluator {
    /// Whether the curve's geometry forms a closed loop.
    fn is_closed(&self) -> bool;

    /// Axis-aligned bounding box of the curve.
    fn bounding_box(&self) -> BoxingResult<BoundingBox>;
}

/// Generates `sample_count + 1` parameters spread evenly over `[start, end]`.
///
/// Both ends are included exactly: the first value is `start` and the last is
/// `end`.
///
/// # Example
///
/// ```rust
/// use lens_boxing::sampling::sample_parameters;
///
/// let params = sample_parameters(0.0, 1.0, 4);
/// assert_eq!(params, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn sample_parameters(start: f64, end: f64, sample_count: usize) -> Vec<f64> {
    let span = end - start;
    (0..=sample_count)
        .map(|i| start + (i as f64 / sample_count as f64) * span)
        .collect()
}

/// Samples a closed curve at `sample_count + 1` evenly spaced parameters.
///
/// `sample_count` must lie in `1..=MAX_SAMPLE_COUNT`. The points are requested in one batched evaluator call. The coincident
/// start/end sample of a closed curve is kept. An evaluator that returns no
/// points at all yields an empty sample; any other count mismatch is an
/// error.
pub fn sample_closed_curve<C>(curve: &C, sample_count: usize) -> BoxingResult<Vec<Point3>>
where
    C: CurveEvaluator + ?Sized,
{
    if sample_count == 0 || sample_count > MAX_SAMPLE_COUNT {
        return Err(BoxingError::InvalidSampleCount(sample_count));
    }

    let (start, end) = curve.parameter_extents()?;
    if !start.is_finite() || !end.is_finite() {
        return Err(BoxingError::Evaluator(format!(
            "non-finite parameter extents [{start}, {end}]"
        )));
    }

    let parameters = sample_parameters(start, end, sample_count);
    let points = curve.points_at_parameters(&parameters)?;
    if points.is_empty() {
        tracing::warn!(start, end, "evaluator returned no points");
        return Ok(points);
    }
    if points.len() != parameters.len() {
        return Err(BoxingError::Evaluator(format!(
            "expected {} points, evaluator returned {}",
            parameters.len(),
            points.len()
        )));
    }

    tracing::debug!(start, end, count = points.len(), "sampled closed curve");
    Ok(points)
}

#[cfg(test)]
mod tests;
