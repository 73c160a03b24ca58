use crate::paint::{Brush, Pen};
use crate::path::Path;
use crate::render::Canvas;

use super::{DrawCmd, FillCmd, StrokeCmd};

/// Recorded draw stream for a single redraw pass.
///
/// Commands are stored in issue order — the paint order. `clear()` keeps
/// allocated capacity so a host can reuse one list across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded commands, keeping capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Recorded commands in issue order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Canvas for DrawList {
    fn set_anti_alias(&mut self, enabled: bool) {
        self.items.push(DrawCmd::AntiAlias(enabled));
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.items.push(DrawCmd::Fill(FillCmd { path: path.clone(), brush }));
    }

    fn stroke_path(&mut self, path: &Path, pen: Pen) {
        self.items.push(DrawCmd::Stroke(StrokeCmd { path: path.clone(), pen }));
    }
}
