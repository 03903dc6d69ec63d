//! # Reference Geometry
//!
//! Plans the boxing construction geometry and emits it into a host sketch.
//!
//! ## Layout
//!
//! ```text
//!   (min.x,max.y) ── BoxTop ──── (max.x,max.y)
//!        │               │             │
//!     BoxLeft ── HorizontalMidline ── BoxRight
//!        │               │             │
//!   (min.x,min.y) ── BoxBottom ─ (max.x,min.y)
//! ```
//!
//! The vertical midline runs through the center, the width dimension sits
//! above the top edge and the height dimension right of the right edge. The
//! long-axis line and its aligned dimension are only present when a long axis
//! was found.

use serde::{Deserialize, Serialize};

use crate::error::{BoxingError, BoxingResult};
use crate::geometry::{BoundingBox, Point3};
use crate::long_axis::LongAxisSegment;

// =============================================================================
// PLAN
// =============================================================================

/// What a construction line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineRole {
    /// Bottom box edge, left to right.
    BoxBottom,
    /// Right box edge, bottom to top.
    BoxRight,
    /// Top box edge, right to left.
    BoxTop,
    /// Left box edge, top to bottom.
    BoxLeft,
    /// Horizontal line through the center, spanning the box width.
    HorizontalMidline,
    /// Vertical line through the center, spanning the box height.
    VerticalMidline,
    /// Effective-diameter line, opposite point to farthest point.
    LongAxis,
}

/// What a dimension measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionRole {
    /// Box width, measured on the top edge.
    Width,
    /// Box height, measured on the right edge.
    Height,
    /// Effective diameter, measured along the long axis.
    EffectiveDiameter,
}

/// Direction a distance dimension is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionOrientation {
    /// Along the sketch x axis.
    Horizontal,
    /// Along the sketch y axis.
    Vertical,
    /// Along the measured line.
    Aligned,
}

/// Construction line to create.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannedLine {
    /// Meaning of the line.
    pub role: LineRole,
    /// First endpoint.
    pub start: Point3,
    /// Second endpoint.
    pub end: Point3,
}

/// Distance dimension to create between the endpoints of a planned line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannedDimension {
    /// Meaning of the dimension.
    pub role: DimensionRole,
    /// Line whose endpoints are measured.
    pub line: LineRole,
    /// Measurement direction.
    pub orientation: DimensionOrientation,
    /// Placement of the dimension text.
    pub label: Point3,
}

/// Complete set of boxing references for one eyewire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePlan {
    /// Bounding box the plan was built from.
    pub bbox: BoundingBox,
    /// Center of the bounding box.
    pub center: Point3,
    /// Long-axis segment, when one was found.
    pub long_axis: Option<LongAxisSegment>,
    /// Construction lines in creation order.
    pub lines: Vec<PlannedLine>,
    /// Dimensions in creation order.
    pub dimensions: Vec<PlannedDimension>,
}

impl ReferencePlan {
    /// Builds the plan. Every point lies on the plane `z = bbox.min().z`.
    ///
    /// `label_offset` is the gap between the box and the width/height labels.
    pub fn build(bbox: &BoundingBox, long_axis: Option<LongAxisSegment>, label_offset: f64) -> Self {
        let (min, max) = (bbox.min(), bbox.max());
        let center = bbox.center();
        let z = min.z;
        let [p1, p2, p3, p4] = bbox.corners();

        let mut lines = vec![
            PlannedLine { role: LineRole::BoxBottom, start: p1, end: p2 },
            PlannedLine { role: LineRole::BoxRight, start: p2, end: p3 },
            PlannedLine { role: LineRole::BoxTop, start: p3, end: p4 },
            PlannedLine { role: LineRole::BoxLeft, start: p4, end: p1 },
            PlannedLine {
                role: LineRole::HorizontalMidline,
                start: Point3::new(min.x, center.y, z),
                end: Point3::new(max.x, center.y, z),
            },
            PlannedLine {
                role: LineRole::VerticalMidline,
                start: Point3::new(center.x, min.y, z),
                end: Point3::new(center.x, max.y, z),
            },
        ];

        let mut dimensions = vec![
            PlannedDimension {
                role: DimensionRole::Width,
                line: LineRole::BoxTop,
                orientation: DimensionOrientation::Horizontal,
                label: Point3::new(center.x, max.y + label_offset, z),
            },
            PlannedDimension {
                role: DimensionRole::Height,
                line: LineRole::BoxRight,
                orientation: DimensionOrientation::Vertical,
                label: Point3::new(max.x + label_offset, center.y, z),
            },
        ];

        if let Some(axis) = long_axis {
            lines.push(PlannedLine {
                role: LineRole::LongAxis,
                start: axis.opposite,
                end: axis.furthest,
            });
            dimensions.push(PlannedDimension {
                role: DimensionRole::EffectiveDiameter,
                line: LineRole::LongAxis,
                orientation: DimensionOrientation::Aligned,
                label: center,
            });
        }

        Self {
            bbox: *bbox,
            center,
            long_axis,
            lines,
            dimensions,
        }
    }

    /// Looks up a planned line by role.
    pub fn line(&self, role: LineRole) -> Option<&PlannedLine> {
        self.lines.iter().find(|line| line.role == role)
    }

    /// Looks up a planned dimension by role.
    pub fn dimension(&self, role: DimensionRole) -> Option<&PlannedDimension> {
        self.dimensions.iter().find(|dim| dim.role == role)
    }
}

// =============================================================================
// SINK
// =============================================================================

/// Handle of a construction line created in the host sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub usize);

/// Handle of a dimension created in the host sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionId(pub usize);

/// Host sketch that accepts construction geometry.
pub trait GeometrySink {
    /// Creates a construction line between two points.
    fn add_construction_line(&mut self, start: Point3, end: Point3) -> BoxingResult<LineId>;

    /// Creates a distance dimension between the endpoints of `line`.
    fn add_distance_dimension(
        &mut self,
        line: LineId,
        orientation: DimensionOrientation,
        label: Point3,
    ) -> BoxingResult<DimensionId>;
}

/// Handles of everything [`emit`] created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmittedGeometry {
    /// Created lines with their roles, in creation order.
    pub lines: Vec<(LineRole, LineId)>,
    /// Created dimensions with their roles, in creation order.
    pub dimensions: Vec<(DimensionRole, DimensionId)>,
}

impl EmittedGeometry {
    /// Handle of the line created for `role`.
    pub fn line(&self, role: LineRole) -> Option<LineId> {
        self.lines.iter().find(|(r, _)| *r == role).map(|(_, id)| *id)
    }

    /// Whether a long-axis line was created.
    pub fn has_long_axis(&self) -> bool {
        self.line(LineRole::LongAxis).is_some()
    }
}

/// Emits a plan into a sink.
///
/// Creation order: the four box edges, width and height dimensions, both
/// midlines, then the long-axis line and its aligned dimension.
pub fn emit(plan: &ReferencePlan, sink: &mut dyn GeometrySink) -> BoxingResult<EmittedGeometry> {
    let mut emitted = EmittedGeometry::default();

    let box_edges = [
        LineRole::BoxBottom,
        LineRole::BoxRight,
        LineRole::BoxTop,
        LineRole::BoxLeft,
    ];
    for role in box_edges {
        emit_line(plan, sink, &mut emitted, role)?;
    }
    for role in [DimensionRole::Width, DimensionRole::Height] {
        emit_dimension(plan, sink, &mut emitted, role)?;
    }
    for role in [LineRole::HorizontalMidline, LineRole::VerticalMidline] {
        emit_line(plan, sink, &mut emitted, role)?;
    }
    if plan.long_axis.is_some() {
        emit_line(plan, sink, &mut emitted, LineRole::LongAxis)?;
        emit_dimension(plan, sink, &mut emitted, DimensionRole::EffectiveDiameter)?;
    }

    tracing::info!(
        lines = emitted.lines.len(),
        dimensions = emitted.dimensions.len(),
        long_axis = plan.long_axis.is_some(),
        "emitted boxing references"
    );
    Ok(emitted)
}

fn emit_line(
    plan: &ReferencePlan,
    sink: &mut dyn GeometrySink,
    emitted: &mut EmittedGeometry,
    role: LineRole,
) -> BoxingResult<()> {
    let line = plan
        .line(role)
        .ok_or_else(|| BoxingError::IncompletePlan(format!("no {role:?} line")))?;
    let id = sink.add_construction_line(line.start, line.end)?;
    emitted.lines.push((role, id));
    Ok(())
}

fn emit_dimension(
    plan: &ReferencePlan,
    sink: &mut dyn GeometrySink,
    emitted: &mut EmittedGeometry,
    role: DimensionRole,
) -> BoxingResult<()> {
    let dimension = plan
        .dimension(role)
        .ok_or_else(|| BoxingError::IncompletePlan(format!("no {role:?} dimension")))?;
    let line = emitted.line(dimension.line).ok_or_else(|| {
        BoxingError::IncompletePlan(format!("{:?} line was not created", dimension.line))
    })?;
    let id = sink.add_distance_dimension(line, dimension.orientation, dimension.label)?;
    emitted.dimensions.push((role, id));
    Ok(())
}

// =============================================================================
// RECORDING SINK
// =============================================================================

/// Line stored by a [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordedLine {
    /// First endpoint.
    pub start: Point3,
    /// Second endpoint.
    pub end: Point3,
}

/// Dimension stored by a [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordedDimension {
    /// Measured line.
    pub line: LineId,
    /// Measurement direction.
    pub orientation: DimensionOrientation,
    /// Label placement.
    pub label: Point3,
}

/// In-memory sketch that records everything it is asked to create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingSink {
    /// Lines, indexed by [`LineId`].
    pub lines: Vec<RecordedLine>,
    /// Dimensions, indexed by [`DimensionId`].
    pub dimensions: Vec<RecordedDimension>,
}

impl GeometrySink for RecordingSink {
    fn add_construction_line(&mut self, start: Point3, end: Point3) -> BoxingResult<LineId> {
        self.lines.push(RecordedLine { start, end });
        Ok(LineId(self.lines.len() - 1))
    }

    fn add_distance_dimension(
        &mut self,
        line: LineId,
        orientation: DimensionOrientation,
        label: Point3,
    ) -> BoxingResult<DimensionId> {
        if line.0 >= self.lines.len() {
            return Err(BoxingError::host(
                "add_distance_dimension",
                format!("unknown line {}", line.0),
            ));
        }
        self.dimensions.push(RecordedDimension {
            line,
            orientation,
            label,
        });
        Ok(DimensionId(self.dimensions.len() - 1))
    }
}
