use std::cell::Cell;
use std::rc::Rc;

/// Shared dirty flag between a widget and its host.
///
/// Property setters call [`request`]; the host polls [`take`] on its redraw
/// pass and renders if it fired. Requesting never repaints synchronously —
/// it only marks the widget stale.
///
/// Clones share one flag. `Rc<Cell<_>>` keeps the handle deliberately
/// `!Send`: all property access and redraw happens on the host UI thread.
///
/// [`request`]: RedrawFlag::request
/// [`take`]: RedrawFlag::take
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag {
    requested: Rc<Cell<bool>>,
}

impl RedrawFlag {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the widget as needing repaint on the next host redraw pass.
    pub fn request(&self) {
        if !self.requested.replace(true) {
            log::trace!("redraw requested");
        }
    }

    /// Reads and clears the flag. Host side.
    #[inline]
    pub fn take(&self) -> bool {
        self.requested.replace(false)
    }

    /// Reads without clearing.
    #[inline]
    pub fn is_requested(&self) -> bool {
        self.requested.get()
    }
}
