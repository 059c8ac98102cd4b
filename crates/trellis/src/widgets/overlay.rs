//! The overlay compositor: independently constrained children rendered
//! into overlapping regions of the same box, later children painting
//! over earlier ones.

use geom::Size;

use crate::{Constraints, LayoutBox, RenderContext, Result, Surface, Widget};

/// Renders its children in declaration order into the same parent box.
///
/// There is no z-buffer and no explicit compositing: later children
/// visually supersede earlier ones purely because their draw calls
/// execute later. Children are rendered unconditionally — no early
/// exit, no visibility culling.
pub struct Overlay {
    /// Ordered children, rendered back to front.
    children: Vec<Box<dyn Widget>>,
    /// The overlay's own constraints.
    constraints: Constraints,
}

impl Overlay {
    /// An empty overlay with default fully flexible constraints. Chain
    /// [`child`] to add layers.
    ///
    /// [`child`]: Overlay::child
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            constraints: Constraints::fill(),
        }
    }

    /// Replace the overlay's own constraints.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Append a child, rendered on top of all previous children.
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Overlay {
    fn constraints(&self) -> Constraints {
        self.constraints
    }

    fn render(
        &mut self,
        ctx: &RenderContext,
        surface: &mut dyn Surface,
        area: &LayoutBox,
    ) -> Result<Size> {
        // Used size is the per-axis running maximum over all children,
        // not the size of any single child.
        let mut used = Size::zero();

        for child in &mut self.children {
            let c = child.constraints();

            // Offset within the parent box, then resolve each axis
            // independently: rigid axes get exactly their minimum,
            // flexible axes are clamped into range against what's left.
            let position = area.position.offset(c.left, c.top);
            let initial = Size::clamped(area.size.w - c.left, area.size.h - c.top);
            let size = Size::new(c.resolve_width(initial.w), c.resolve_height(initial.h));

            let child_box = LayoutBox::new(position, size, c);
            let child_ctx = ctx.for_child(&child_box);
            let child_used = child.render(&child_ctx, surface, &child_box)?;

            used = used.max(&child_used);
        }

        Ok(used)
    }
}
