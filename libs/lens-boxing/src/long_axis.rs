//! # Long Axis
//!
//! The effective-diameter segment of an eyewire: the sampled boundary point
//! farthest from the box center, and its reflection through that center.

use serde::{Deserialize, Serialize};

use crate::error::BoxingResult;
use crate::extremum::{find_farthest, reflect_through_center};
use crate::geometry::{compute_center, BoundingBox, Point3};
use crate::sampling::{sample_closed_curve, CurveEvaluator};
use config::constants::DEFAULT_SAMPLE_COUNT;

/// Endpoints of the long-axis reference line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongAxisSegment {
    /// Reflection of `furthest` through the box center.
    pub opposite: Point3,
    /// Sampled boundary point farthest from the box center.
    pub furthest: Point3,
}

impl LongAxisSegment {
    /// Length of the segment, twice the farthest sampled distance.
    pub fn length(&self) -> f64 {
        self.opposite.distance(self.furthest)
    }

    /// Midpoint of the segment; equal to the box center.
    pub fn midpoint(&self) -> Point3 {
        (self.opposite + self.furthest) / 2.0
    }
}

/// Computes the long axis of a closed curve.
///
/// Samples `sample_count + 1` boundary points with no refinement between
/// them. Returns `Ok(None)` when the sample is empty or every sample sits on
/// the center; errors come only from the evaluator or a sample count outside
/// `1..=MAX_SAMPLE_COUNT`.
pub fn compute_long_axis<C>(
    curve: &C,
    bbox: &BoundingBox,
    sample_count: usize,
) -> BoxingResult<Option<LongAxisSegment>>
where
    C: CurveEvaluator + ?Sized,
{
    let center = compute_center(bbox);
    let samples = sample_closed_curve(curve, sample_count)?;

    // An empty sample is already reported by the sampler.
    let Some(furthest) = find_farthest(&samples, center) else {
        if !samples.is_empty() {
            tracing::warn!(?center, "no sample away from center; no long axis");
        }
        return Ok(None);
    };

    let opposite = reflect_through_center(furthest, center);
    tracing::debug!(
        ?center,
        ?furthest,
        ?opposite,
        distance = center.distance(furthest),
        "computed long axis"
    );
    Ok(Some(LongAxisSegment { opposite, furthest }))
}

/// [`compute_long_axis`] with [`DEFAULT_SAMPLE_COUNT`] samples.
pub fn compute_long_axis_default<C>(
    curve: &C,
    bbox: &BoundingBox,
) -> BoxingResult<Option<LongAxisSegment>>
where
    C: CurveEvaluator + ?Sized,
{
    compute_long_axis(curve, bbox, DEFAULT_SAMPLE_COUNT)
}
