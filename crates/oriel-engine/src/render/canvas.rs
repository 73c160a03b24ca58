use crate::paint::{Brush, Pen};
use crate::path::Path;

/// The outbound boundary to a 2D rendering backend.
///
/// Widgets receive a `&mut dyn Canvas` at redraw time and issue fill and
/// stroke calls against it. All methods are infallible: a backend whose
/// context can fail handles that internally — drawing code never sees it.
///
/// Call order is meaningful. Backends paint in the order calls arrive, so a
/// fill issued before a stroke ends up underneath it.
pub trait Canvas {
    /// Toggles anti-aliased edge rendering for subsequent calls.
    ///
    /// A quality setting, not a correctness one; backends without AA may
    /// ignore it.
    fn set_anti_alias(&mut self, enabled: bool);

    /// Fills the interior of `path` with `brush`.
    fn fill_path(&mut self, path: &Path, brush: Brush);

    /// Strokes the outline of `path` with `pen`.
    fn stroke_path(&mut self, path: &Path, pen: Pen);
}
