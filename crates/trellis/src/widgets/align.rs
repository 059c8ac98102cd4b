//! The gravity positioner: sizes a single child from its own
//! constraints and anchors it at one of nine positions within the
//! parent box.

use geom::{Point, Size};

use crate::{Constraints, LayoutBox, RenderContext, Result, Surface, Widget};

/// One of nine anchor placements: the center, the four edge midpoints,
/// and the four corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gravity {
    /// Centered on both axes.
    Center,
    /// Top edge midpoint.
    North,
    /// Bottom edge midpoint.
    South,
    /// Right edge midpoint.
    East,
    /// Left edge midpoint.
    West,
    /// Top-right corner.
    NorthEast,
    /// Top-left corner.
    NorthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom-left corner.
    SouthWest,
}

/// Sizes one child per its own constraints (rigid axes exact, flexible
/// axes clamped against the parent box) and translates it to a gravity
/// anchor. The corner anchors are the combination of the edge rules, so
/// the horizontal and vertical halves are resolved independently.
pub struct Align {
    /// The wrapped widget, if any.
    child: Option<Box<dyn Widget>>,
    /// Anchor position.
    gravity: Gravity,
    /// The positioner's own constraints.
    constraints: Constraints,
}

impl Align {
    /// Construct a positioner around a child with the given gravity and
    /// default fully flexible constraints.
    pub fn new(child: impl Widget + 'static, gravity: Gravity) -> Self {
        Self {
            child: Some(Box::new(child)),
            gravity,
            constraints: Constraints::fill(),
        }
    }

    /// Center a child within the parent box.
    pub fn center(child: impl Widget + 'static) -> Self {
        Self::new(child, Gravity::Center)
    }

    /// A positioner with no child. Renders report the parent box size
    /// unchanged.
    pub fn empty(gravity: Gravity) -> Self {
        Self {
            child: None,
            gravity,
            constraints: Constraints::fill(),
        }
    }

    /// Replace the positioner's own constraints.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }
}

impl Widget for Align {
    fn constraints(&self) -> Constraints {
        self.constraints
    }

    fn render(
        &mut self,
        ctx: &RenderContext,
        surface: &mut dyn Surface,
        area: &LayoutBox,
    ) -> Result<Size> {
        let Some(child) = self.child.as_mut() else {
            return Ok(area.size);
        };

        let c = child.constraints();
        let cw = c.resolve_width(area.size.w);
        let ch = c.resolve_height(area.size.h);

        let (px, py) = (area.position.x, area.position.y);
        let (pw, ph) = (area.size.w, area.size.h);

        let x = match self.gravity {
            Gravity::Center | Gravity::North | Gravity::South => px + (pw - cw) / 2.0,
            Gravity::East | Gravity::NorthEast | Gravity::SouthEast => px + pw - cw,
            Gravity::West | Gravity::NorthWest | Gravity::SouthWest => px,
        };
        let y = match self.gravity {
            Gravity::Center | Gravity::East | Gravity::West => py + (ph - ch) / 2.0,
            Gravity::North | Gravity::NorthEast | Gravity::NorthWest => py,
            Gravity::South | Gravity::SouthEast | Gravity::SouthWest => py + ph - ch,
        };

        let child_box = LayoutBox::new(Point::new(x, y), Size::new(cw, ch), c);
        let child_ctx = ctx.for_child(&child_box);
        child.render(&child_ctx, surface, &child_box)
    }
}
