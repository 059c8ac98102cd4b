use super::{Point, Rect};

/// A width/height extent. Well-formed sizes are non-negative on both
/// axes; arithmetic that can produce negative intermediates must go
/// through [`Size::clamped`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Default for Size {
    /// Constructs a zero-valued size.
    fn default() -> Self {
        Self { w: 0.0, h: 0.0 }
    }
}

impl Size {
    /// Construct a size from extents that are known to be non-negative.
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    /// Construct a size, clamping negative extents to zero.
    pub fn clamped(w: f32, h: f32) -> Self {
        Self {
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    /// The zero size.
    pub fn zero() -> Self {
        Self::default()
    }

    /// True if this size can completely enclose the other in both
    /// dimensions.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }

    /// Component-wise maximum of two sizes.
    pub fn max(&self, other: &Self) -> Self {
        Self {
            w: self.w.max(other.w),
            h: self.h.max(other.h),
        }
    }

    /// Return a `Rect` with the same dimensions, located at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::default(),
            w: self.w,
            h: self.h,
        }
    }
}

impl From<Rect> for Size {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

impl From<(f32, f32)> for Size {
    #[inline]
    fn from(v: (f32, f32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}
