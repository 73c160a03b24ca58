use oriel_engine::coords::Rect;
use oriel_engine::render::Canvas;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The drawable capability every visual component implements.
///
/// A widget does one thing: paint itself into the canvas it is handed, inside
/// the bounds it is handed. Layout, input, and scheduling belong to the host,
/// which calls `render` at its own discretion — typically after the widget's
/// redraw flag fires.
///
/// ```rust,ignore
/// use oriel_ui::prelude::*;
///
/// struct Swatch { color: Color }
///
/// impl Widget for Swatch {
///     fn render(&self, canvas: &mut dyn Canvas, bounds: Rect) {
///         let path = rounded_rect_path(
///             bounds.origin.x, bounds.origin.y,
///             bounds.size.x, bounds.size.y,
///             4.0,
///         );
///         canvas.fill_path(&path, Brush::solid(self.color));
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Draw this widget into `canvas` within `bounds`.
    ///
    /// Must not mutate widget state; two calls with the same state and
    /// bounds issue the same draw calls.
    fn render(&self, canvas: &mut dyn Canvas, bounds: Rect);
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget — what a host stores when it owns a mixed bag of
/// widgets.
///
/// Any `Widget` converts via `From` / `Into`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn render(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        self.0.render(canvas, bounds)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oriel_engine::paint::{Brush, Color};
    use oriel_engine::path::rounded_rect_path;
    use oriel_engine::scene::DrawList;

    struct Swatch;

    impl Widget for Swatch {
        fn render(&self, canvas: &mut dyn Canvas, bounds: Rect) {
            let path = rounded_rect_path(
                bounds.origin.x,
                bounds.origin.y,
                bounds.size.x,
                bounds.size.y,
                0.0,
            );
            canvas.fill_path(&path, Brush::solid(Color::black()));
        }
    }

    #[test]
    fn element_forwards_render() {
        let el: Element = Swatch.into();
        let mut list = DrawList::new();
        el.render(&mut list, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(list.len(), 1);
    }
}
