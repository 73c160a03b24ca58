use super::Color;

/// Stroke pen: color plus line width, drawn along a path's outline.
///
/// Width is in logical pixels, centered on the path. Negative widths are not
/// validated here; backends treat them as degenerate strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    pub width: f32,
    pub color: Color,
}

impl Pen {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
