//! # Command Shim
//!
//! The host-facing side of the boxing command, expressed as traits so the
//! whole flow runs without a CAD host:
//!
//! - [`execute`]: selection validation, reference computation and emission
//! - [`registry`]: owned execute listeners with subscribe/unsubscribe
//! - [`addin`]: start/stop of the command definition and toolbar control
//!
//! [`run_command`] is the single error boundary: nothing below it reports to
//! the user, and nothing above it sees an error.

pub mod addin;
pub mod execute;
pub mod registry;

pub use addin::{AddIn, CommandDefinition, HostUi};
pub use execute::{execute, run_command, selected_eyewire, CommandContext, MessageSink, Selection};
pub use registry::{ExecuteHandler, HandlerId, HandlerRegistry};
