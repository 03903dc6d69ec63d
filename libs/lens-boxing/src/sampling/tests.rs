use super::*;
use crate::curves::{ClosedPolyline, Ellipse};
use approx::assert_abs_diff_eq;
use std::cell::Cell;

/// Evaluator that counts how it is called.
struct CountingCircle {
    single_calls: Cell<usize>,
}

impl CurveEvaluator for CountingCircle {
    fn parameter_extents(&self) -> BoxingResult<(f64, f64)> {
        Ok((0.0, std::f64::consts::TAU))
    }

    fn point_at_parameter(&self, parameter: f64) -> BoxingResult<Point3> {
        self.single_calls.set(self.single_calls.get() + 1);
        let (sin, cos) = parameter.sin_cos();
        Ok(Point3::new(cos, sin, 0.0))
    }
}

struct BrokenEvaluator;

impl CurveEvaluator for BrokenEvaluator {
    fn parameter_extents(&self) -> BoxingResult<(f64, f64)> {
        Err(BoxingError::Evaluator("no extents".into()))
    }

    fn point_at_parameter(&self, _parameter: f64) -> BoxingResult<Point3> {
        Ok(Point3::ZERO)
    }
}

struct ShortBatch;

impl CurveEvaluator for ShortBatch {
    fn parameter_extents(&self) -> BoxingResult<(f64, f64)> {
        Ok((0.0, 1.0))
    }

    fn point_at_parameter(&self, _parameter: f64) -> BoxingResult<Point3> {
        Ok(Point3::ZERO)
    }

    fn points_at_parameters(&self, parameters: &[f64]) -> BoxingResult<Vec<Point3>> {
        Ok(vec![Point3::ZERO; parameters.len() - 1])
    }
}

#[test]
fn test_parameters_include_both_ends() {
    let params = sample_parameters(2.0, 6.0, 200);
    assert_eq!(params.len(), 201);
    assert_eq!(params[0], 2.0);
    assert_eq!(params[200], 6.0);
    assert_abs_diff_eq!(params[100], 4.0);
}

#[test]
fn test_parameters_single_interval() {
    assert_eq!(sample_parameters(-1.0, 1.0, 1), vec![-1.0, 1.0]);
}

#[test]
fn test_sample_count_plus_one_points() {
    let ellipse = Ellipse::new(Point3::ZERO, 25.0, 18.0).unwrap();
    for n in [1, 7, 200] {
        let points = sample_closed_curve(&ellipse, n).unwrap();
        assert_eq!(points.len(), n + 1);
    }
}

#[test]
fn test_closed_curve_first_and_last_coincide() {
    let ellipse = Ellipse::new(Point3::new(3.0, -2.0, 0.0), 25.0, 18.0)
        .unwrap()
        .with_rotation(0.4);
    let points = sample_closed_curve(&ellipse, 200).unwrap();
    let (first, last) = (points[0], points[200]);
    assert_abs_diff_eq!(first.x, last.x, epsilon = 1e-9);
    assert_abs_diff_eq!(first.y, last.y, epsilon = 1e-9);
    assert_eq!(first.z, last.z);
}

#[test]
fn test_polyline_samples_follow_traversal() {
    let square = ClosedPolyline::new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(2.0, 2.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
    ])
    .unwrap();
    let points = sample_closed_curve(&square, 8).unwrap();
    assert_eq!(points[0], Point3::new(0.0, 0.0, 0.0));
    assert_eq!(points[1], Point3::new(1.0, 0.0, 0.0));
    assert_eq!(points[2], Point3::new(2.0, 0.0, 0.0));
    assert_eq!(points[4], Point3::new(2.0, 2.0, 0.0));
    assert_eq!(points[8], Point3::new(0.0, 0.0, 0.0));
}

#[test]
fn test_default_batch_falls_back_to_single_evaluation() {
    let circle = CountingCircle {
        single_calls: Cell::new(0),
    };
    let points = sample_closed_curve(&circle, 10).unwrap();
    assert_eq!(points.len(), 11);
    assert_eq!(circle.single_calls.get(), 11);
    assert_abs_diff_eq!(points[0].x, 1.0);
}

#[test]
fn test_zero_sample_count_rejected() {
    let ellipse = Ellipse::new(Point3::ZERO, 1.0, 1.0).unwrap();
    assert_eq!(
        sample_closed_curve(&ellipse, 0).unwrap_err(),
        BoxingError::InvalidSampleCount(0)
    );
}

#[test]
fn test_oversized_sample_count_rejected() {
    let ellipse = Ellipse::new(Point3::ZERO, 2.0, 1.0).unwrap();
    assert_eq!(
        sample_closed_curve(&ellipse, usize::MAX).unwrap_err(),
        BoxingError::InvalidSampleCount(usize::MAX)
    );
    assert_eq!(
        sample_closed_curve(&ellipse, MAX_SAMPLE_COUNT + 1).unwrap_err(),
        BoxingError::InvalidSampleCount(MAX_SAMPLE_COUNT + 1)
    );
    assert_eq!(
        sample_closed_curve(&ellipse, MAX_SAMPLE_COUNT).unwrap().len(),
        MAX_SAMPLE_COUNT + 1
    );
}

#[test]
fn test_evaluator_failure_propagates() {
    let err = sample_closed_curve(&BrokenEvaluator, 200).unwrap_err();
    assert!(matches!(err, BoxingError::Evaluator(_)));
}

#[test]
fn test_short_batch_is_an_evaluator_error() {
    let err = sample_closed_curve(&ShortBatch, 4).unwrap_err();
    assert!(err.to_string().contains("expected 5 points"));
}

#[test]
fn test_sampling_through_trait_object() {
    let ellipse = Ellipse::new(Point3::ZERO, 2.0, 1.0).unwrap();
    let curve: &dyn CurveEvaluator = &ellipse;
    assert_eq!(sample_closed_curve(curve, 4).unwrap().len(), 5);
}

struct EmptyBatch;

impl CurveEvaluator for EmptyBatch {
    fn parameter_extents(&self) -> BoxingResult<(f64, f64)> {
        Ok((0.0, 1.0))
    }

    fn point_at_parameter(&self, _parameter: f64) -> BoxingResult<Point3> {
        Ok(Point3::ZERO)
    }

    fn points_at_parameters(&self, _parameters: &[f64]) -> BoxingResult<Vec<Point3>> {
        Ok(Vec::new())
    }
}

#[test]
fn test_empty_batch_is_an_empty_sample() {
    assert!(sample_closed_curve(&EmptyBatch, 200).unwrap().is_empty());
}
