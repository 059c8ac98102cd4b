//! The per-call read context threaded down the widget tree.

use geom::{Rect, Size};

use crate::LayoutBox;

/// Read-mostly state handed to every render call: the canvas pixel
/// dimensions (immutable for the frame), the box of the immediate
/// parent, and the space available to the current widget.
///
/// `painted` is a list of already-painted regions carried for a future
/// overpaint-avoidance policy; none of the structural widgets consult
/// it, and every render call may legally repaint previously painted
/// pixels — overlay semantics depend on this.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// The box of the immediate parent.
    pub parent: LayoutBox,
    /// The space available to the current widget.
    pub available: Size,
    /// Already-painted regions. Unused by the structural widgets.
    pub painted: Vec<Rect>,
}

impl RenderContext {
    /// Construct the frame's root context from canvas pixel dimensions.
    pub fn root(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            parent: LayoutBox::default(),
            available: Size::new(canvas_width as f32, canvas_height as f32),
            painted: Vec::new(),
        }
    }

    /// Derive the context handed to a child rendering into `area`. The
    /// child sees its own box as the parent box and its box size as the
    /// available space; the painted list starts empty.
    pub fn for_child(&self, area: &LayoutBox) -> Self {
        Self {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            parent: *area,
            available: area.size,
            painted: Vec::new(),
        }
    }

    /// The canvas dimensions as a float size.
    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width as f32, self.canvas_height as f32)
    }
}
