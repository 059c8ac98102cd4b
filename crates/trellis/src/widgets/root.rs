//! The root sizer: the single entry point from canvas pixel dimensions
//! to the first layout box.

use geom::{Point, Size};
use tracing::debug;

use crate::{Color, Constraints, LayoutBox, RenderContext, Result, Surface, Widget};

/// Maps the canvas onto the wrapped widget's constraints, establishing
/// the coordinate origin for the whole tree.
///
/// This is the one place a constraint's `top`/`left` are honored as
/// absolute canvas offsets rather than parent-relative ones. The child
/// box defaults to filling the canvas from that offset, then is clamped
/// into the child's range with the max bound applied before the min
/// bound — a widget whose minimum exceeds its max-derived fill is still
/// guaranteed its minimum.
pub struct Root {
    /// The wrapped widget, if any.
    child: Option<Box<dyn Widget>>,
    /// Color the canvas is cleared to before the tree paints.
    clear_color: Color,
}

impl Root {
    /// Construct a root around a child widget.
    pub fn new(child: impl Widget + 'static) -> Self {
        Self {
            child: Some(Box::new(child)),
            clear_color: Color::BLACK,
        }
    }

    /// A root with no child. Renders report the assigned box size
    /// unchanged.
    pub fn empty() -> Self {
        Self {
            child: None,
            clear_color: Color::BLACK,
        }
    }

    /// Set the background clear color.
    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }
}

impl Widget for Root {
    fn constraints(&self) -> Constraints {
        Constraints::fill()
    }

    fn render(
        &mut self,
        ctx: &RenderContext,
        surface: &mut dyn Surface,
        area: &LayoutBox,
    ) -> Result<Size> {
        debug!(
            canvas_width = ctx.canvas_width,
            canvas_height = ctx.canvas_height,
            "root render pass"
        );
        surface.clear(self.clear_color)?;

        let Some(child) = self.child.as_mut() else {
            return Ok(area.size);
        };

        let c = child.constraints();
        let canvas = ctx.canvas_size();

        // Fill the canvas from the child's absolute offset, then clamp
        // per axis, max bound before min bound.
        let initial = Size::clamped(canvas.w - c.left, canvas.h - c.top);
        let size = Size::new(c.clamp_width(initial.w), c.clamp_height(initial.h));

        let child_box = LayoutBox::new(Point::new(c.left, c.top), size, c);
        let child_ctx = ctx.for_child(&child_box);
        child.render(&child_ctx, surface, &child_box)
    }
}
