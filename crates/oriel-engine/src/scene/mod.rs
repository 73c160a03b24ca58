//! Recorded draw stream.
//!
//! Responsibilities:
//! - store backend-agnostic draw commands in issue order
//! - implement [`Canvas`] so widgets can paint straight into a recording
//!
//! The stream is both the hand-off format to a real renderer and the
//! inspection surface tests use to pin paint output.
//!
//! [`Canvas`]: crate::render::Canvas

mod cmd;
mod list;

pub use cmd::{DrawCmd, FillCmd, StrokeCmd};
pub use list::DrawList;
