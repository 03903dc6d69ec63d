//! Command execution: validate the selection, compute and emit references.

use config::constants::BoxingConfig;

use crate::error::{BoxingError, BoxingResult};
use crate::long_axis::compute_long_axis;
use crate::reference::{emit, EmittedGeometry, GeometrySink, ReferencePlan};
use crate::sampling::SketchCurve;

/// An entity the user has selected in the host.
#[derive(Clone, Copy)]
pub enum Selection<'a> {
    /// A sketch curve.
    Curve(&'a dyn SketchCurve),
    /// Anything else: points, faces, dimensions.
    Other,
}

/// Receives user-facing messages.
pub trait MessageSink {
    /// Shows a message to the user.
    fn message_box(&mut self, message: &str);
}

/// Everything a command execution gets from the host.
pub struct CommandContext<'a> {
    /// Sketch in edit mode, if any.
    pub sketch: Option<&'a mut dyn GeometrySink>,
    /// Active selection.
    pub selection: &'a [Selection<'a>],
    /// Where user-facing messages go.
    pub messages: &'a mut dyn MessageSink,
}

/// Validates the context and returns the single selected closed curve.
pub fn selected_eyewire<'a>(selection: &[Selection<'a>]) -> BoxingResult<&'a dyn SketchCurve> {
    let [only] = selection else {
        return Err(BoxingError::InvalidSelectionCount(selection.len()));
    };
    match only {
        Selection::Curve(curve) if curve.is_closed() => Ok(*curve),
        _ => Err(BoxingError::NotClosedCurve),
    }
}

/// Runs the boxing command against the context.
pub fn execute(
    ctx: &mut CommandContext<'_>,
    config: &BoxingConfig,
) -> BoxingResult<EmittedGeometry> {
    let Some(sketch) = ctx.sketch.as_deref_mut() else {
        return Err(BoxingError::NoActiveSketch);
    };
    let eyewire = selected_eyewire(ctx.selection)?;

    let bbox = eyewire.bounding_box()?;
    let long_axis = compute_long_axis(eyewire, &bbox, config.sample_count)?;
    let plan = ReferencePlan::build(&bbox, long_axis, config.label_offset);
    emit(&plan, sketch)
}

/// Runs the command behind the error boundary.
///
/// Selection problems are shown to the user as-is; any other failure is
/// reported as a script failure. Returns the emitted geometry on success.
pub fn run_command(ctx: &mut CommandContext<'_>, config: &BoxingConfig) -> Option<EmittedGeometry> {
    match execute(ctx, config) {
        Ok(emitted) => Some(emitted),
        Err(err) if err.is_user_input() => {
            tracing::warn!(%err, "boxing command rejected selection");
            ctx.messages.message_box(&err.to_string());
            None
        }
        Err(err) => {
            tracing::error!(%err, "boxing command failed");
            ctx.messages.message_box(&format!("Script failed:\n{err}"));
            None
        }
    }
}
