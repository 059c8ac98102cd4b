//! A leaf widget that fills its box with a solid color.

use geom::Size;

use crate::{Color, Constraints, LayoutBox, RenderContext, Result, Surface, Widget};

/// Fills its assigned box through the paint surface and reports the
/// full box size as used.
pub struct Fill {
    /// Fill color.
    color: Color,
    /// The leaf's constraints.
    constraints: Constraints,
}

impl Fill {
    /// A fill that flexes to whatever space its parent assigns.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            constraints: Constraints::fill(),
        }
    }

    /// A flexible fill with explicit bounds.
    pub fn flexible(color: Color, min_width: f32, min_height: f32, max_width: f32, max_height: f32) -> Self {
        Self {
            color,
            constraints: Constraints::flexible(min_width, min_height, max_width, max_height),
        }
    }

    /// A flexible fill with explicit bounds at an absolute offset.
    pub fn flexible_at(
        color: Color,
        min_width: f32,
        min_height: f32,
        max_width: f32,
        max_height: f32,
        top: f32,
        left: f32,
    ) -> Self {
        Self {
            color,
            constraints: Constraints::flexible_at(min_width, min_height, max_width, max_height, top, left),
        }
    }

    /// A fixed-size fill.
    pub fn rigid(color: Color, width: f32, height: f32) -> Self {
        Self {
            color,
            constraints: Constraints::rigid(width, height),
        }
    }

    /// A fixed-size fill at an absolute offset.
    pub fn rigid_at(color: Color, width: f32, height: f32, top: f32, left: f32) -> Self {
        Self {
            color,
            constraints: Constraints::rigid_at(width, height, top, left),
        }
    }

    /// Update the fill color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Widget for Fill {
    fn constraints(&self) -> Constraints {
        self.constraints
    }

    fn render(
        &mut self,
        _ctx: &RenderContext,
        surface: &mut dyn Surface,
        area: &LayoutBox,
    ) -> Result<Size> {
        surface.fill(area.rect(), self.color)?;
        Ok(area.size)
    }
}
