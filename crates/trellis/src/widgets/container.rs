//! The flex container: lays out an ordered sequence of children along a
//! main axis, giving rigid children their minimum size and distributing
//! the remaining space among flexible children proportionally to weight.

use geom::{Point, Size};
use tracing::trace;

use crate::{Constraints, LayoutBox, RenderContext, Result, Surface, Widget};

/// The main axis of a container: rows lay children out horizontally,
/// columns vertically. The cross axis is delegated unchanged — children
/// are forced to fill the container's full cross extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Horizontal main axis.
    Row,
    /// Vertical main axis.
    Column,
}

impl Direction {
    /// The main-axis component of a size.
    fn main(&self, s: Size) -> f32 {
        match self {
            Direction::Row => s.w,
            Direction::Column => s.h,
        }
    }

    /// The cross-axis component of a size.
    fn cross(&self, s: Size) -> f32 {
        match self {
            Direction::Row => s.h,
            Direction::Column => s.w,
        }
    }

    /// Assemble a size from main and cross components.
    fn size(&self, main: f32, cross: f32) -> Size {
        match self {
            Direction::Row => Size::new(main, cross),
            Direction::Column => Size::new(cross, main),
        }
    }

    /// A point advanced by `cursor` along the main axis from `origin`.
    fn at(&self, origin: Point, cursor: f32) -> Point {
        match self {
            Direction::Row => origin.offset(cursor, 0.0),
            Direction::Column => origin.offset(0.0, cursor),
        }
    }

    /// The main-axis minimum of a constraint.
    fn min_main(&self, c: &Constraints) -> f32 {
        match self {
            Direction::Row => c.min_width,
            Direction::Column => c.min_height,
        }
    }

    /// The main-axis maximum of a constraint.
    fn max_main(&self, c: &Constraints) -> f32 {
        match self {
            Direction::Row => c.max_width,
            Direction::Column => c.max_height,
        }
    }

    /// The cross-axis minimum of a constraint.
    fn min_cross(&self, c: &Constraints) -> f32 {
        match self {
            Direction::Row => c.min_height,
            Direction::Column => c.min_width,
        }
    }
}

/// Whether a container slot takes its minimum main-axis size or shares
/// in the flexible space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexKind {
    /// The child gets exactly its main-axis minimum.
    Rigid,
    /// The child shares remaining space proportionally to its weight.
    Flex,
}

/// A container child slot. The weight is meaningful only for
/// [`FlexKind::Flex`] slots, and only relative to a positive total: if
/// every flex child in a container has weight 0, each receives its own
/// minimum instead.
pub struct FlexChild {
    /// The child widget.
    pub widget: Box<dyn Widget>,
    /// Rigid or flexible slot.
    pub kind: FlexKind,
    /// Share of flexible space, relative to the other flex children.
    pub weight: f32,
}

impl FlexChild {
    /// A rigid slot.
    pub fn rigid(widget: impl Widget + 'static) -> Self {
        Self {
            widget: Box::new(widget),
            kind: FlexKind::Rigid,
            weight: 0.0,
        }
    }

    /// A flexible slot with the given weight.
    pub fn flex(widget: impl Widget + 'static, weight: f32) -> Self {
        Self {
            widget: Box::new(widget),
            kind: FlexKind::Flex,
            weight,
        }
    }
}

/// A widget that lays out children in a row or column.
///
/// Row and column are one algorithm parameterized over the axis, so the
/// two directions cannot diverge on tie-break behavior.
pub struct Container {
    /// Main-axis direction.
    direction: Direction,
    /// Ordered child slots.
    children: Vec<FlexChild>,
    /// The container's own constraints.
    constraints: Constraints,
}

impl Container {
    /// A container with the given direction and default fully flexible
    /// constraints. Chain [`flex`], [`rigid`] or [`child`] to add
    /// children.
    ///
    /// [`flex`]: Container::flex
    /// [`rigid`]: Container::rigid
    /// [`child`]: Container::child
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            children: Vec::new(),
            constraints: Constraints::fill(),
        }
    }

    /// A row container.
    pub fn row() -> Self {
        Self::new(Direction::Row)
    }

    /// A column container.
    pub fn column() -> Self {
        Self::new(Direction::Column)
    }

    /// Replace the container's own constraints.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Append a flexible child with the given weight.
    pub fn flex(self, widget: impl Widget + 'static, weight: f32) -> Self {
        self.child(FlexChild::flex(widget, weight))
    }

    /// Append a rigid child.
    pub fn rigid(self, widget: impl Widget + 'static) -> Self {
        self.child(FlexChild::rigid(widget))
    }

    /// Append a child slot.
    pub fn child(mut self, child: FlexChild) -> Self {
        self.children.push(child);
        self
    }
}

impl Widget for Container {
    fn constraints(&self) -> Constraints {
        self.constraints
    }

    fn render(
        &mut self,
        ctx: &RenderContext,
        surface: &mut dyn Surface,
        area: &LayoutBox,
    ) -> Result<Size> {
        if self.children.is_empty() {
            return Ok(Size::zero());
        }

        let dir = self.direction;
        let available_main = dir.main(area.size);
        let available_cross = dir.cross(area.size);

        // Measure pass: rigid main-axis minima and total flex weight.
        // The cross-axis minimum is tracked as a lower bound but not
        // enforced; the returned cross extent comes from used sizes.
        let mut rigid_main = 0.0f32;
        let mut total_weight = 0.0f32;
        let mut min_cross = 0.0f32;
        for child in &self.children {
            let c = child.widget.constraints();
            match child.kind {
                FlexKind::Rigid => rigid_main += dir.min_main(&c),
                FlexKind::Flex => total_weight += child.weight,
            }
            min_cross = min_cross.max(dir.min_cross(&c));
        }
        let flex_main = (available_main - rigid_main).max(0.0);
        trace!(
            ?dir,
            rigid_main, total_weight, flex_main, min_cross, "distributing main axis"
        );

        // Distribute and place. The cursor advances by each child's
        // *returned* used size, not its assigned size: a child that
        // reports less than it was assigned pulls later siblings back
        // over it. That is the caller contract, not something to patch
        // here.
        let mut cursor = 0.0f32;
        let mut used_main = 0.0f32;
        let mut used_cross = 0.0f32;
        for child in &mut self.children {
            let c = child.widget.constraints();
            let main = match child.kind {
                FlexKind::Rigid => dir.min_main(&c),
                FlexKind::Flex if total_weight > 0.0 => {
                    let mut share = flex_main * child.weight / total_weight;
                    if share < dir.min_main(&c) {
                        share = dir.min_main(&c);
                    }
                    if share > dir.max_main(&c) {
                        share = dir.max_main(&c);
                    }
                    share
                }
                // All-zero weights: flexible space stays undistributed
                // and every flex child falls back to its minimum.
                FlexKind::Flex => dir.min_main(&c),
            };

            let child_box = LayoutBox::new(
                dir.at(area.position, cursor),
                dir.size(main, available_cross),
                c,
            );
            let child_ctx = ctx.for_child(&child_box);
            let used = child.widget.render(&child_ctx, surface, &child_box)?;

            cursor += dir.main(used);
            used_main += dir.main(used);
            used_cross = used_cross.max(dir.cross(used));
        }

        Ok(dir.size(used_main, used_cross))
    }
}
