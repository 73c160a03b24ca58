use crate::coords::Rect;

use super::{Arc, Path};

/// Records arc commands into a [`Path`].
///
/// Mirrors how 2D backends build figures: add arcs, optionally close, then
/// finish. The straight edges between arcs are implied, not recorded —
/// [`Path::segments`] derives them.
#[derive(Debug, Default)]
pub struct PathBuilder {
    arcs: Vec<Arc>,
    closed: bool,
}

impl PathBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an arc of the ellipse inscribed in `bounds`, from `start_deg`
    /// sweeping `sweep_deg` clockwise. If the path already has a current
    /// point, a straight edge to this arc's start is implied.
    #[inline]
    pub fn add_arc(&mut self, bounds: Rect, start_deg: f32, sweep_deg: f32) {
        self.arcs.push(Arc::new(bounds, start_deg, sweep_deg));
    }

    /// Marks the figure closed: traversal returns to the first point,
    /// whether or not the last arc already ends there.
    #[inline]
    pub fn close(&mut self) {
        self.closed = true;
    }

    #[inline]
    pub fn finish(self) -> Path {
        Path { arcs: self.arcs, closed: self.closed }
    }
}
