//! # Lens Boxing
//!
//! Boxing reference geometry for an eyeglass lens eyewire: the closed sketch
//! curve outlining one lens.
//!
//! ## Pipeline
//!
//! ```text
//! curve + bounding box → center → boundary samples → farthest sample
//!                      → reflection through center → long axis
//!                      → reference plan → host sketch
//! ```
//!
//! The geometry core ([`geometry`], [`sampling`], [`extremum`],
//! [`long_axis`]) is pure and reentrant. [`reference`] turns its result into
//! construction lines and dimensions; [`command`] validates the host
//! selection and owns the add-in lifecycle.
//!
//! ## Usage
//!
//! ```rust
//! use lens_boxing::curves::Ellipse;
//! use lens_boxing::sampling::SketchCurve;
//! use lens_boxing::{compute_long_axis_default, Point3};
//!
//! let eyewire = Ellipse::new(Point3::new(25.0, 18.0, 0.0), 25.0, 18.0).unwrap();
//! let bbox = eyewire.bounding_box().unwrap();
//! let axis = compute_long_axis_default(&eyewire, &bbox).unwrap().unwrap();
//! assert!((axis.length() - 50.0).abs() < 1e-9);
//! ```

pub mod command;
pub mod curves;
pub mod error;
pub mod extremum;
pub mod geometry;
pub mod long_axis;
pub mod reference;
pub mod sampling;

pub use error::{BoxingError, BoxingResult};
pub use extremum::{find_farthest, reflect_through_center};
pub use geometry::{compute_center, BoundingBox, Point3};
pub use long_axis::{compute_long_axis, compute_long_axis_default, LongAxisSegment};
pub use reference::{emit, EmittedGeometry, GeometrySink, RecordingSink, ReferencePlan};
pub use sampling::{sample_closed_curve, CurveEvaluator, SketchCurve};
