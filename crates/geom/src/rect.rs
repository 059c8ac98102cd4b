use super::{Point, Size};

/// A positioned rectangle: a top-left corner plus a width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// The top-left corner.
    pub tl: Point,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// Construct a rectangle from its top-left corner and extent.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// The extent of this rectangle.
    pub fn size(&self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }

    /// True if the point falls within this rectangle.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.tl.x && p.x < self.tl.x + self.w && p.y >= self.tl.y && p.y < self.tl.y + self.h
    }

    /// True if the other rectangle is entirely contained within this one.
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.tl.x >= self.tl.x
            && other.tl.y >= self.tl.y
            && other.tl.x + other.w <= self.tl.x + self.w
            && other.tl.y + other.h <= self.tl.y + self.h
    }

    /// The intersection of two rectangles, or `None` if they do not
    /// overlap.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x1 = self.tl.x.max(other.tl.x);
        let y1 = self.tl.y.max(other.tl.y);
        let x2 = (self.tl.x + self.w).min(other.tl.x + other.w);
        let y2 = (self.tl.y + self.h).min(other.tl.y + other.h);
        if x2 > x1 && y2 > y1 {
            Some(Self::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn contains_point() {
        let r = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(r.contains_point(Point::new(10.0, 10.0)));
        assert!(r.contains_point(Point::new(19.9, 19.9)));
        assert!(!r.contains_point(Point::new(20.0, 10.0)));
        assert!(!r.contains_point(Point::new(9.9, 10.0)));
    }

    #[test]
    fn contains_rect() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(r.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(r.contains_rect(&Rect::new(10.0, 10.0, 50.0, 50.0)));
        assert!(!r.contains_rect(&Rect::new(60.0, 60.0, 50.0, 50.0)));
    }

    #[test]
    fn intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(&b), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
        // Touching edges do not overlap.
        let c = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersect(&c), None);
        let d = Rect::new(50.0, 50.0, 1.0, 1.0);
        assert_eq!(a.intersect(&d), None);
    }

    proptest! {
        #[test]
        fn intersect_commutes(
            ax in 0f32..100.0, ay in 0f32..100.0, aw in 0f32..100.0, ah in 0f32..100.0,
            bx in 0f32..100.0, by in 0f32..100.0, bw in 0f32..100.0, bh in 0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.intersect(&b), b.intersect(&a));
        }

        #[test]
        fn intersection_within_both(
            ax in 0f32..100.0, ay in 0f32..100.0, aw in 1f32..100.0, ah in 1f32..100.0,
            bx in 0f32..100.0, by in 0f32..100.0, bw in 1f32..100.0, bh in 1f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            if let Some(i) = a.intersect(&b) {
                prop_assert!(a.contains_rect(&i));
                prop_assert!(b.contains_rect(&i));
            }
        }
    }
}
