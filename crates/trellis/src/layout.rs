//! The resolved layout box handed to a widget for one render call.

use geom::{Point, Rect, Size};

use crate::Constraints;

/// A resolved placement: where a widget sits relative to its parent's
/// top-left corner, how large it is, and the constraints that produced
/// it (retained for the widget's own use, e.g. a leaf deciding how to
/// fill exactly its box).
///
/// Boxes are produced fresh by the parent on every render pass and owned
/// exclusively by the render call they are passed to; no widget retains
/// a previous frame's box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutBox {
    /// Position relative to the parent's top-left corner.
    pub position: Point,
    /// Resolved size of the box.
    pub size: Size,
    /// The constraints that produced this box.
    pub constraints: Constraints,
}

impl LayoutBox {
    /// Construct a layout box.
    pub fn new(position: Point, size: Size, constraints: Constraints) -> Self {
        Self {
            position,
            size,
            constraints,
        }
    }

    /// The rectangle this box covers.
    pub fn rect(&self) -> Rect {
        Rect {
            tl: self.position,
            w: self.size.w,
            h: self.size.h,
        }
    }
}
