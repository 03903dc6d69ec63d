//! Farthest-sample search and point reflection through the box center.

use crate::geometry::Point3;

/// Finds the point farthest from `center`.
///
/// Scans in order with a strict `>` against a running maximum that starts at
/// zero, so the first point attaining the maximum wins and a point sitting on
/// the center is never selected. Returns `None` when `points` is empty or no
/// point lies at a positive distance.
///
/// # Example
///
/// ```rust
/// use lens_boxing::extremum::find_farthest;
/// use lens_boxing::Point3;
///
/// let points = [Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 3.0, 0.0)];
/// assert_eq!(find_farthest(&points, Point3::ZERO), Some(points[1]));
/// assert_eq!(find_farthest(&[], Point3::ZERO), None);
/// ```
pub fn find_farthest(points: &[Point3], center: Point3) -> Option<Point3> {
    let mut max_distance = 0.0;
    let mut farthest = None;
    for &point in points {
        let distance = center.distance(point);
        if distance > max_distance {
            max_distance = distance;
            farthest = Some(point);
        }
    }
    farthest
}

/// Reflects `point` through `center`.
///
/// Returns `center + (center - point)`, the point for which `center` is the
/// midpoint of the pair.
pub fn reflect_through_center(point: Point3, center: Point3) -> Point3 {
    let to_center = center - point;
    center + to_center
}
