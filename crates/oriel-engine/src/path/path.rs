use crate::coords::Vec2;

use super::Arc;

/// One traversable piece of a path outline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    /// Straight edge between two points.
    Edge { from: Vec2, to: Vec2 },
    /// Curved corner.
    Arc(Arc),
}

/// A figure built from arcs and the straight edges implied between them.
///
/// The recorded form is exactly what was handed to [`PathBuilder`]: the arc
/// commands plus a closed flag. [`segments`] materializes the full outline —
/// each arc, an edge wherever consecutive arc endpoints differ, and the
/// closing edge back to the first point.
///
/// Same inputs always produce an equal path; `PartialEq` compares the
/// recorded commands.
///
/// [`PathBuilder`]: super::PathBuilder
/// [`segments`]: Path::segments
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub(super) arcs: Vec<Arc>,
    pub(super) closed: bool,
}

impl Path {
    /// Recorded arc commands, in insertion order.
    #[inline]
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Where traversal starts: the first arc's start point.
    #[inline]
    pub fn first_point(&self) -> Option<Vec2> {
        self.arcs.first().map(|a| a.start_point())
    }

    /// Where traversal ends.
    ///
    /// For a closed path this is the first point again — the closing edge
    /// returns there whether or not the last arc already did.
    #[inline]
    pub fn last_point(&self) -> Option<Vec2> {
        if self.closed {
            self.first_point()
        } else {
            self.arcs.last().map(|a| a.end_point())
        }
    }

    /// Materializes the outline: arcs plus implied straight edges.
    ///
    /// An edge is emitted between consecutive arcs whenever the previous end
    /// point and the next start point differ, and from the last end point back
    /// to the first start point when the path is closed. Coincident points
    /// produce no zero-length edge.
    pub fn segments(&self) -> Vec<Segment> {
        let mut out = Vec::with_capacity(self.arcs.len() * 2);
        let mut current: Option<Vec2> = None;

        for arc in &self.arcs {
            let start = arc.start_point();
            if let Some(p) = current {
                if p != start {
                    out.push(Segment::Edge { from: p, to: start });
                }
            }
            out.push(Segment::Arc(*arc));
            current = Some(arc.end_point());
        }

        if self.closed {
            if let (Some(p), Some(first)) = (current, self.first_point()) {
                if p != first {
                    out.push(Segment::Edge { from: p, to: first });
                }
            }
        }

        out
    }
}
