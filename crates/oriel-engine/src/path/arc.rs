use crate::coords::{Rect, Vec2};

/// Elliptical arc: a slice of the ellipse inscribed in `bounds`.
///
/// Angles are degrees, measured clockwise from +X in y-down screen space, so
/// 0° points right, 90° points down. A positive sweep travels clockwise.
///
/// Zero-size bounds are legal; every point of such an arc collapses to the
/// bounds' origin, which is exactly what a zero-radius corner needs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
    pub bounds: Rect,
    pub start_deg: f32,
    pub sweep_deg: f32,
}

impl Arc {
    #[inline]
    pub const fn new(bounds: Rect, start_deg: f32, sweep_deg: f32) -> Self {
        Self { bounds, start_deg, sweep_deg }
    }

    /// Point on the arc's ellipse at `deg`.
    ///
    /// In y-down space, `cos`/`sin` against the parametric angle already
    /// rotate clockwise; no sign flip is needed.
    #[inline]
    pub fn point_at(&self, deg: f32) -> Vec2 {
        let c = self.bounds.center();
        let rx = self.bounds.size.x * 0.5;
        let ry = self.bounds.size.y * 0.5;
        let t = deg.to_radians();
        c + Vec2::new(rx * t.cos(), ry * t.sin())
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.point_at(self.start_deg)
    }

    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.point_at(self.start_deg + self.sweep_deg)
    }
}
