//! Sketch-plane points and the axis-aligned bounding box of the eyewire.
//!
//! Points are `glam::DVec3` so curve evaluators can hand over host points
//! unchanged. The sketch is planar: every point derived from a box carries the
//! z of the box's minimum corner.

use serde::{Deserialize, Serialize};

use crate::error::{BoxingError, BoxingResult};

pub use glam::DVec3 as Point3;

/// Axis-aligned bounding box of a planar curve.
///
/// # Examples
/// ```
/// use lens_boxing::{BoundingBox, Point3};
/// let bbox = BoundingBox::new(Point3::ZERO, Point3::new(10.0, 4.0, 0.0)).unwrap();
/// assert_eq!(bbox.center(), Point3::new(5.0, 2.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    min: Point3,
    max: Point3,
}

impl BoundingBox {
    /// Creates a bounding box, rejecting boxes whose minimum exceeds the
    /// maximum on x or y.
    pub fn new(min: Point3, max: Point3) -> BoxingResult<Self> {
        if !(min.x <= max.x && min.y <= max.y) {
            return Err(BoxingError::InvalidBoundingBox { min, max });
        }
        Ok(Self { min, max })
    }

    /// Smallest box containing every point.
    ///
    /// Fails for an empty slice or a non-finite point; `min`/`max` would
    /// otherwise skip NaN components silently.
    pub fn from_points(points: &[Point3]) -> BoxingResult<Self> {
        let Some((first, rest)) = points.split_first() else {
            return Err(BoxingError::DegenerateCurve("no points to bound".into()));
        };
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(BoxingError::DegenerateCurve(format!(
                "non-finite point {bad:?}"
            )));
        }
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Self::new(min, max)
    }

    /// Minimum corner.
    pub fn min(&self) -> Point3 {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Point3 {
        self.max
    }

    /// Midpoint of the box in the sketch plane.
    pub fn center(&self) -> Point3 {
        compute_center(self)
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Box corners counter-clockwise from the minimum corner, all at `min.z`.
    pub fn corners(&self) -> [Point3; 4] {
        let (min, max) = (self.min, self.max);
        [
            Point3::new(min.x, min.y, min.z),
            Point3::new(max.x, min.y, min.z),
            Point3::new(max.x, max.y, min.z),
            Point3::new(min.x, max.y, min.z),
        ]
    }
}

/// Computes the center of a bounding box.
///
/// x and y are the midpoints of the box extents; z is taken from the minimum
/// corner so the center stays on the sketch plane.
pub fn compute_center(bbox: &BoundingBox) -> Point3 {
    let (min, max) = (bbox.min, bbox.max);
    Point3::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0, min.z)
}
