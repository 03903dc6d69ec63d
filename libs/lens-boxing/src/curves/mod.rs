//! # Reference Curves
//!
//! Closed curves that implement [`SketchCurve`] without a CAD host: an
//! ellipse, the usual first approximation of a lens shape, and a closed
//! polyline for traced or digitized eyewires.

use std::f64::consts::TAU;

use crate::error::{BoxingError, BoxingResult};
use crate::geometry::{BoundingBox, Point3};
use crate::sampling::{CurveEvaluator, SketchCurve};

// =============================================================================
// ELLIPSE
// =============================================================================

/// Ellipse in the sketch plane, parameterized over `[0, 2π]`.
///
/// # Example
///
/// ```rust
/// use lens_boxing::curves::Ellipse;
/// use lens_boxing::sampling::CurveEvaluator;
/// use lens_boxing::Point3;
///
/// let ellipse = Ellipse::new(Point3::ZERO, 25.0, 18.0).unwrap();
/// let p = ellipse.point_at_parameter(0.0).unwrap();
/// assert_eq!(p, Point3::new(25.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point3,
    semi_major: f64,
    semi_minor: f64,
    rotation: f64,
}

impl Ellipse {
    /// Creates an axis-aligned ellipse. Both semi-axes must be positive and
    /// finite.
    pub fn new(center: Point3, semi_major: f64, semi_minor: f64) -> BoxingResult<Self> {
        for (name, value) in [("semi_major", semi_major), ("semi_minor", semi_minor)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BoxingError::DegenerateCurve(format!(
                    "ellipse {name} must be positive: {value}"
                )));
            }
        }
        Ok(Self {
            center,
            semi_major,
            semi_minor,
            rotation: 0.0,
        })
    }

    /// Rotates the ellipse counter-clockwise by `angle` radians about its center.
    pub fn with_rotation(mut self, angle: f64) -> Self {
        self.rotation = angle;
        self
    }

    /// Center of the ellipse.
    pub fn center(&self) -> Point3 {
        self.center
    }

    fn evaluate(&self, parameter: f64) -> Point3 {
        let (sin_t, cos_t) = parameter.sin_cos();
        let (sin_r, cos_r) = self.rotation.sin_cos();
        let local_x = self.semi_major * cos_t;
        let local_y = self.semi_minor * sin_t;
        Point3::new(
            self.center.x + local_x * cos_r - local_y * sin_r,
            self.center.y + local_x * sin_r + local_y * cos_r,
            self.center.z,
        )
    }
}

impl CurveEvaluator for Ellipse {
    fn parameter_extents(&self) -> BoxingResult<(f64, f64)> {
        Ok((0.0, TAU))
    }

    fn point_at_parameter(&self, parameter: f64) -> BoxingResult<Point3> {
        Ok(self.evaluate(parameter))
    }

    fn points_at_parameters(&self, parameters: &[f64]) -> BoxingResult<Vec<Point3>> {
        Ok(parameters.iter().map(|&t| self.evaluate(t)).collect())
    }
}

impl SketchCurve for Ellipse {
    fn is_closed(&self) -> bool {
        true
    }

    fn bounding_box(&self) -> BoxingResult<BoundingBox> {
        let (sin_r, cos_r) = self.rotation.sin_cos();
        let (a, b) = (self.semi_major, self.semi_minor);
        let half_width = ((a * cos_r).powi(2) + (b * sin_r).powi(2)).sqrt();
        let half_height = ((a * sin_r).powi(2) + (b * cos_r).powi(2)).sqrt();
        let half = Point3::new(half_width, half_height, 0.0);
        BoundingBox::new(self.center - half, self.center + half)
    }
}

// =============================================================================
// CLOSED POLYLINE
// =============================================================================

/// Closed polyline through its vertices, with the last vertex joined back to
/// the first. Segment `i` spans parameters `[i, i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedPolyline {
    vertices: Vec<Point3>,
}

impl ClosedPolyline {
    /// Creates a closed polyline. At least two vertices are required.
    pub fn new(vertices: Vec<Point3>) -> BoxingResult<Self> {
        if vertices.len() < 2 {
            return Err(BoxingError::DegenerateCurve(format!(
                "closed polyline needs at least 2 vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Self { vertices })
    }

    /// Vertices in traversal order.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }
}

impl CurveEvaluator for ClosedPolyline {
    fn parameter_extents(&self) -> BoxingResult<(f64, f64)> {
        Ok((0.0, self.vertices.len() as f64))
    }

    fn point_at_parameter(&self, parameter: f64) -> BoxingResult<Point3> {
        let count = self.vertices.len();
        if !parameter.is_finite() || parameter < 0.0 || parameter > count as f64 {
            return Err(BoxingError::Evaluator(format!(
                "parameter {parameter} outside [0, {count}]"
            )));
        }

        let index = parameter.floor() as usize;
        if index >= count {
            return Ok(self.vertices[0]);
        }
        let start = self.vertices[index];
        let fraction = parameter - index as f64;
        if fraction == 0.0 {
            return Ok(start);
        }
        let end = self.vertices[(index + 1) % count];
        Ok(start + (end - start) * fraction)
    }
}

impl SketchCurve for ClosedPolyline {
    fn is_closed(&self) -> bool {
        true
    }

    fn bounding_box(&self) -> BoxingResult<BoundingBox> {
        BoundingBox::from_points(&self.vertices)
    }
}
