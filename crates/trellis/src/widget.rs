//! The widget contract implemented by every node in a trellis tree.

use geom::Size;

use crate::{Constraints, LayoutBox, RenderContext, Result, Surface};

/// The capability every tree node implements: report the size range it
/// is willing to occupy, and render into an assigned box.
///
/// The tree is an owning composite — each structural widget owns its
/// children as boxed trait objects, there is no shared ownership and no
/// cycles. A render pass is strictly synchronous and depth-first: a
/// parent computes a child's box, blocks on the child's full render,
/// then proceeds to the next sibling.
pub trait Widget {
    /// The size constraints for this widget. Must be pure, side-effect
    /// free, and stable across calls within a frame — parents may call
    /// it multiple times and expect identical results.
    fn constraints(&self) -> Constraints;

    /// Render into the assigned box, returning the size actually used,
    /// which may be smaller than the assigned box. Parents use the
    /// returned size to advance layout cursors and must not assume it
    /// equals the assigned size.
    ///
    /// Fails with [`Error::Render`] if drawing cannot proceed, or
    /// [`Error::Layout`] if the widget's own configuration is invalid;
    /// either aborts the remainder of the pass.
    ///
    /// [`Error::Render`]: crate::Error::Render
    /// [`Error::Layout`]: crate::Error::Layout
    fn render(
        &mut self,
        ctx: &RenderContext,
        surface: &mut dyn Surface,
        area: &LayoutBox,
    ) -> Result<Size>;
}

/// Convert widgets into boxed trait objects.
impl<W> From<W> for Box<dyn Widget>
where
    W: Widget + 'static,
{
    fn from(widget: W) -> Self {
        Box::new(widget)
    }
}
