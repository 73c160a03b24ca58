use crate::paint::{Brush, Pen};
use crate::path::Path;

/// Fill draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub path: Path,
    pub brush: Brush,
}

/// Stroke draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub path: Path,
    pub pen: Pen,
}

/// Backend-agnostic draw command.
///
/// Extending the stream: add a payload struct here, a variant, and a matching
/// `Canvas` method — renderers dispatch on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    AntiAlias(bool),
    Fill(FillCmd),
    Stroke(StrokeCmd),
}
