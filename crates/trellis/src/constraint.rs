//! Size constraints and the axis clamping rules shared by the
//! structural widgets.

/// Upper bound used for unconstrained axes. A large finite value rather
/// than an infinity sentinel, so range arithmetic stays ordinary.
pub const UNCONSTRAINED: f32 = 1e9;

/// A size range a widget is willing to occupy, plus an optional absolute
/// offset honored by parents that support absolute placement (the root
/// sizer).
///
/// A *rigid* constraint has `min == max` on both axes; a *flexible* one
/// has a nonzero range on at least one axis. Ranges are not validated:
/// the arithmetic decides what an inverted range means (see the clamp
/// methods).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Constraints {
    /// Minimum width.
    pub min_width: f32,
    /// Minimum height.
    pub min_height: f32,
    /// Maximum width.
    pub max_width: f32,
    /// Maximum height.
    pub max_height: f32,
    /// Absolute vertical offset from the canvas top-left, honored only
    /// by the root sizer.
    pub top: f32,
    /// Absolute horizontal offset from the canvas top-left, honored only
    /// by the root sizer.
    pub left: f32,
}

impl Constraints {
    /// Construct constraints with explicit bounds and absolute offset.
    pub fn new(
        min_width: f32,
        min_height: f32,
        max_width: f32,
        max_height: f32,
        top: f32,
        left: f32,
    ) -> Self {
        Self {
            min_width,
            min_height,
            max_width,
            max_height,
            top,
            left,
        }
    }

    /// Flexible constraints with no absolute offset.
    pub fn flexible(min_width: f32, min_height: f32, max_width: f32, max_height: f32) -> Self {
        Self::new(min_width, min_height, max_width, max_height, 0.0, 0.0)
    }

    /// Flexible constraints at a specific absolute offset.
    pub fn flexible_at(
        min_width: f32,
        min_height: f32,
        max_width: f32,
        max_height: f32,
        top: f32,
        left: f32,
    ) -> Self {
        Self::new(min_width, min_height, max_width, max_height, top, left)
    }

    /// Rigid constraints for an exact size.
    pub fn rigid(width: f32, height: f32) -> Self {
        Self::new(width, height, width, height, 0.0, 0.0)
    }

    /// Rigid constraints for an exact size at a specific absolute offset.
    pub fn rigid_at(width: f32, height: f32, top: f32, left: f32) -> Self {
        Self::new(width, height, width, height, top, left)
    }

    /// Fully flexible constraints: fill whatever space the parent offers.
    pub fn fill() -> Self {
        Self::flexible(0.0, 0.0, UNCONSTRAINED, UNCONSTRAINED)
    }

    /// True if the width is non-negotiable.
    pub fn is_rigid_width(&self) -> bool {
        self.min_width == self.max_width
    }

    /// True if the height is non-negotiable.
    pub fn is_rigid_height(&self) -> bool {
        self.min_height == self.max_height
    }

    /// Clamp an available width into the constraint range. The max bound
    /// is applied before the min bound, so the min wins if the range is
    /// inverted and a widget is always granted at least its minimum.
    pub fn clamp_width(&self, available: f32) -> f32 {
        let mut w = available;
        if self.max_width < w {
            w = self.max_width;
        }
        if self.min_width > w {
            w = self.min_width;
        }
        w
    }

    /// Clamp an available height into the constraint range, max bound
    /// first, then min bound.
    pub fn clamp_height(&self, available: f32) -> f32 {
        let mut h = available;
        if self.max_height < h {
            h = self.max_height;
        }
        if self.min_height > h {
            h = self.min_height;
        }
        h
    }

    /// Resolve a width against available space: a rigid width gets
    /// exactly its minimum regardless of the space offered; a flexible
    /// width is clamped into range.
    pub fn resolve_width(&self, available: f32) -> f32 {
        if self.is_rigid_width() {
            self.min_width
        } else {
            self.clamp_width(available)
        }
    }

    /// Resolve a height against available space; see [`resolve_width`].
    ///
    /// [`resolve_width`]: Constraints::resolve_width
    pub fn resolve_height(&self, available: f32) -> f32 {
        if self.is_rigid_height() {
            self.min_height
        } else {
            self.clamp_height(available)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rigid_predicates() {
        let r = Constraints::rigid(64.0, 48.0);
        assert!(r.is_rigid_width());
        assert!(r.is_rigid_height());

        let f = Constraints::flexible(0.0, 10.0, 100.0, 10.0);
        assert!(!f.is_rigid_width());
        assert!(f.is_rigid_height());
    }

    #[test]
    fn clamp_within_range() {
        let c = Constraints::flexible(10.0, 20.0, 100.0, 200.0);
        assert_eq!(c.clamp_width(50.0), 50.0);
        assert_eq!(c.clamp_width(5.0), 10.0);
        assert_eq!(c.clamp_width(500.0), 100.0);
        assert_eq!(c.clamp_height(5.0), 20.0);
        assert_eq!(c.clamp_height(500.0), 200.0);
    }

    #[test]
    fn clamp_inverted_range_min_wins() {
        // min > max is not validated; max is applied first, so the min
        // bound has the last word.
        let c = Constraints::flexible(80.0, 0.0, 50.0, UNCONSTRAINED);
        assert_eq!(c.clamp_width(100.0), 80.0);
        assert_eq!(c.clamp_width(60.0), 80.0);
        assert_eq!(c.clamp_width(10.0), 80.0);
    }

    #[test]
    fn resolve_rigid_ignores_available() {
        let c = Constraints::rigid(64.0, 64.0);
        assert_eq!(c.resolve_width(10.0), 64.0);
        assert_eq!(c.resolve_width(1000.0), 64.0);
        assert_eq!(c.resolve_height(10.0), 64.0);
    }

    #[test]
    fn resolve_flexible_clamps() {
        let c = Constraints::flexible(10.0, 10.0, 50.0, 50.0);
        assert_eq!(c.resolve_width(30.0), 30.0);
        assert_eq!(c.resolve_width(5.0), 10.0);
        assert_eq!(c.resolve_width(500.0), 50.0);
    }
}
