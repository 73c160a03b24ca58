use oriel_engine::coords::Rect;
use oriel_engine::paint::{Brush, Color, Pen};
use oriel_engine::path::rounded_rect_path;
use oriel_engine::render::Canvas;

use crate::redraw::RedrawFlag;
use crate::widget::Widget;

/// A panel with rounded corners, a fill color, and a border.
///
/// The panel owns four presentation properties — corner radius, fill color,
/// border color, border width. Every setter stores the value and requests a
/// redraw through the shared [`RedrawFlag`]; nothing repaints synchronously.
///
/// Properties are unvalidated on purpose: a negative radius or width flows
/// straight into the path and pen and produces whatever degenerate geometry
/// the backend makes of it.
///
/// ```rust,ignore
/// let mut panel = RoundedPanel::new();
/// panel.set_fill(Color::white());
/// panel.set_border_width(2.0);
///
/// let redraw = panel.redraw_flag();
/// // host redraw pass:
/// if redraw.take() {
///     panel.render(&mut canvas, bounds);
/// }
/// ```
pub struct RoundedPanel {
    radius: f32,
    fill: Color,
    border_color: Color,
    border_width: f32,
    redraw: RedrawFlag,
}

impl RoundedPanel {
    /// A panel with the stock look: 10 px corners, control-colored fill and
    /// border, 1 px border.
    pub fn new() -> Self {
        Self {
            radius: 10.0,
            fill: Color::control(),
            border_color: Color::control(),
            border_width: 1.0,
            redraw: RedrawFlag::new(),
        }
    }

    /// Handle the host polls to learn the panel wants repainting.
    #[inline]
    pub fn redraw_flag(&self) -> RedrawFlag {
        self.redraw.clone()
    }

    // ── properties ────────────────────────────────────────────────────────

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        self.redraw.request();
    }

    #[inline]
    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn set_fill(&mut self, color: Color) {
        self.fill = color;
        self.redraw.request();
    }

    #[inline]
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
        self.redraw.request();
    }

    #[inline]
    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.border_width = width;
        self.redraw.request();
    }
}

impl Default for RoundedPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for RoundedPanel {
    fn render(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        // Inset right/bottom by one unit so the stroke stays inside the
        // widget's pixel bounds.
        let draw = Rect::new(
            bounds.origin.x,
            bounds.origin.y,
            bounds.size.x - 1.0,
            bounds.size.y - 1.0,
        );

        log::trace!(
            "panel render: draw rect {}x{} at ({}, {}), radius {}",
            draw.size.x, draw.size.y, draw.origin.x, draw.origin.y, self.radius,
        );

        // Path, brush, and pen live for this call only.
        let path = rounded_rect_path(
            draw.origin.x,
            draw.origin.y,
            draw.size.x,
            draw.size.y,
            self.radius,
        );

        canvas.set_anti_alias(true);
        // Fill first; the stroke must sit on top of it.
        canvas.fill_path(&path, Brush::solid(self.fill));
        canvas.stroke_path(&path, Pen::new(self.border_width, self.border_color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oriel_engine::coords::Vec2;
    use oriel_engine::scene::{DrawCmd, DrawList};

    fn render_once(panel: &RoundedPanel, w: f32, h: f32) -> DrawList {
        let mut list = DrawList::new();
        panel.render(&mut list, Rect::new(0.0, 0.0, w, h));
        list
    }

    fn fill_of(list: &DrawList) -> &oriel_engine::scene::FillCmd {
        match &list.items()[1] {
            DrawCmd::Fill(f) => f,
            other => panic!("expected Fill at index 1, got {other:?}"),
        }
    }

    fn stroke_of(list: &DrawList) -> &oriel_engine::scene::StrokeCmd {
        match &list.items()[2] {
            DrawCmd::Stroke(s) => s,
            other => panic!("expected Stroke at index 2, got {other:?}"),
        }
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn stock_panel_defaults() {
        let panel = RoundedPanel::new();
        assert_eq!(panel.radius(), 10.0);
        assert_eq!(panel.fill(), Color::control());
        assert_eq!(panel.border_color(), Color::control());
        assert_eq!(panel.border_width(), 1.0);
        assert!(!panel.redraw_flag().is_requested());
    }

    // ── setters request a redraw ──────────────────────────────────────────

    #[test]
    fn every_setter_requests_redraw() {
        let mut panel = RoundedPanel::new();
        let flag = panel.redraw_flag();

        panel.set_radius(4.0);
        assert!(flag.take());
        panel.set_fill(Color::white());
        assert!(flag.take());
        panel.set_border_color(Color::black());
        assert!(flag.take());
        panel.set_border_width(2.0);
        assert!(flag.take());
    }

    #[test]
    fn setters_store_without_validation() {
        // Permissive by contract: negative values pass through unchanged.
        let mut panel = RoundedPanel::new();
        panel.set_radius(-5.0);
        panel.set_border_width(-1.0);
        assert_eq!(panel.radius(), -5.0);
        assert_eq!(panel.border_width(), -1.0);
    }

    #[test]
    fn getters_do_not_touch_the_flag() {
        let panel = RoundedPanel::new();
        let _ = panel.radius();
        let _ = panel.fill();
        let _ = panel.border_color();
        let _ = panel.border_width();
        assert!(!panel.redraw_flag().is_requested());
    }

    // ── paint output ──────────────────────────────────────────────────────

    #[test]
    fn renders_aa_then_fill_then_stroke() {
        let list = render_once(&RoundedPanel::new(), 100.0, 50.0);
        assert_eq!(list.len(), 3);
        assert!(matches!(list.items()[0], DrawCmd::AntiAlias(true)));
        assert!(matches!(list.items()[1], DrawCmd::Fill(_)));
        assert!(matches!(list.items()[2], DrawCmd::Stroke(_)));
    }

    #[test]
    fn draw_rect_is_inset_one_right_and_bottom() {
        // 100×50 bounds paint into (0, 0, 99, 49).
        let list = render_once(&RoundedPanel::new(), 100.0, 50.0);
        let path = &fill_of(&list).path;
        // Top-left arc square pinned at the origin; bottom-right square's
        // far corner at (99, 49).
        assert_eq!(path.arcs()[0].bounds.min(), Vec2::new(0.0, 0.0));
        assert_eq!(path.arcs()[2].bounds.max(), Vec2::new(99.0, 49.0));
    }

    #[test]
    fn fill_and_stroke_share_one_path() {
        let list = render_once(&RoundedPanel::new(), 100.0, 50.0);
        assert_eq!(fill_of(&list).path, stroke_of(&list).path);
    }

    #[test]
    fn render_does_not_set_the_redraw_flag() {
        let panel = RoundedPanel::new();
        let _ = render_once(&panel, 100.0, 50.0);
        assert!(!panel.redraw_flag().is_requested());
    }

    // ── scenario: 100×50, r=10, white fill, black 2 px border ────────────

    #[test]
    fn white_panel_with_black_border() {
        let mut panel = RoundedPanel::new();
        panel.set_fill(Color::white());
        panel.set_border_color(Color::black());
        panel.set_border_width(2.0);

        let list = render_once(&panel, 100.0, 50.0);
        assert_eq!(fill_of(&list).brush, Brush::solid(Color::white()));
        let stroke = stroke_of(&list);
        assert_eq!(stroke.pen, Pen::new(2.0, Color::black()));
        assert!(stroke.path.is_closed());
        assert_eq!(stroke.path.arcs()[0].bounds.size, Vec2::new(20.0, 20.0));
    }

    // ── scenario: 20×20 bounds, r=15 — oversized radius ──────────────────

    #[test]
    fn oversized_radius_still_renders_a_closed_path() {
        let mut panel = RoundedPanel::new();
        panel.set_radius(15.0);
        let list = render_once(&panel, 20.0, 20.0);
        let path = &fill_of(&list).path;
        assert!(path.is_closed());
        assert_eq!(path.first_point(), path.last_point());
    }

    // ── idempotence ───────────────────────────────────────────────────────

    #[test]
    fn two_renders_issue_identical_commands() {
        let panel = RoundedPanel::new();
        let a = render_once(&panel, 100.0, 50.0);
        let b = render_once(&panel, 100.0, 50.0);
        assert_eq!(a.items(), b.items());
    }

    // ── property independence ─────────────────────────────────────────────

    #[test]
    fn fill_change_touches_only_the_fill() {
        let mut panel = RoundedPanel::new();
        let before = render_once(&panel, 100.0, 50.0);
        panel.set_fill(Color::white());
        let after = render_once(&panel, 100.0, 50.0);

        assert_ne!(fill_of(&before).brush, fill_of(&after).brush);
        assert_eq!(fill_of(&before).path, fill_of(&after).path);
        assert_eq!(stroke_of(&before), stroke_of(&after));
    }

    #[test]
    fn border_change_touches_only_the_stroke() {
        let mut panel = RoundedPanel::new();
        let before = render_once(&panel, 100.0, 50.0);
        panel.set_border_color(Color::black());
        panel.set_border_width(3.0);
        let after = render_once(&panel, 100.0, 50.0);

        assert_eq!(fill_of(&before), fill_of(&after));
        assert_ne!(stroke_of(&before).pen, stroke_of(&after).pen);
        assert_eq!(stroke_of(&before).path, stroke_of(&after).path);
    }

    #[test]
    fn radius_change_touches_only_corner_geometry() {
        let mut panel = RoundedPanel::new();
        let before = render_once(&panel, 100.0, 50.0);
        panel.set_radius(4.0);
        let after = render_once(&panel, 100.0, 50.0);

        assert_ne!(fill_of(&before).path, fill_of(&after).path);
        assert_eq!(fill_of(&before).brush, fill_of(&after).brush);
        assert_eq!(stroke_of(&before).pen, stroke_of(&after).pen);
    }

    // ── zero radius: plain rectangle outline ──────────────────────────────

    #[test]
    fn zero_radius_paints_a_plain_rectangle() {
        let mut panel = RoundedPanel::new();
        panel.set_radius(0.0);
        let list = render_once(&panel, 100.0, 50.0);
        let path = &fill_of(&list).path;

        for a in path.arcs() {
            assert_eq!(a.start_point(), a.end_point());
        }
        assert_eq!(path.arcs()[0].start_point(), Vec2::new(0.0, 0.0));
        assert_eq!(path.arcs()[2].start_point(), Vec2::new(99.0, 49.0));
    }
}
