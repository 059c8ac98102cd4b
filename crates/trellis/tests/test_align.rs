//! Integration tests for the gravity positioner.

#[cfg(test)]
mod tests {
    use trellis::{
        Align, Constraints, Gravity, LayoutBox, Point, RenderContext, Result, Size, Widget,
        surface::test::TestSurface,
        testing::Probe,
    };

    /// Render an aligner into a parent box at (5, 7) sized 100x50.
    fn render_at_offset(a: &mut Align) -> Result<Size> {
        let ctx = RenderContext::root(640, 480);
        let area = LayoutBox::new(
            Point::new(5.0, 7.0),
            Size::new(100.0, 50.0),
            Constraints::fill(),
        );
        let mut surface = TestSurface::new();
        a.render(&ctx, &mut surface, &area)
    }

    #[test]
    fn all_nine_gravities() -> Result<()> {
        // A rigid 10x20 child in a 100x50 parent at (5, 7). Corner
        // anchors are the combination of the edge rules.
        let cases = [
            (Gravity::Center, Point::new(50.0, 22.0)),
            (Gravity::North, Point::new(50.0, 7.0)),
            (Gravity::South, Point::new(50.0, 37.0)),
            (Gravity::East, Point::new(95.0, 22.0)),
            (Gravity::West, Point::new(5.0, 22.0)),
            (Gravity::NorthEast, Point::new(95.0, 7.0)),
            (Gravity::NorthWest, Point::new(5.0, 7.0)),
            (Gravity::SouthEast, Point::new(95.0, 37.0)),
            (Gravity::SouthWest, Point::new(5.0, 37.0)),
        ];

        for (gravity, expected) in cases {
            let probe = Probe::new(Constraints::rigid(10.0, 20.0));
            let log = probe.log();
            let mut a = Align::new(probe, gravity);
            render_at_offset(&mut a)?;

            let b = log.borrow()[0];
            assert_eq!(b.position, expected, "gravity {gravity:?}");
            assert_eq!(b.size, Size::new(10.0, 20.0), "gravity {gravity:?}");
        }
        Ok(())
    }

    #[test]
    fn centering_formula() -> Result<()> {
        // Relative to the parent origin the centered child sits at
        // ((pw - cw) / 2, (ph - ch) / 2).
        let probe = Probe::new(Constraints::rigid(10.0, 20.0));
        let log = probe.log();
        let mut a = Align::center(probe);
        render_at_offset(&mut a)?;

        let b = log.borrow()[0];
        assert_eq!(b.position.x - 5.0, (100.0 - 10.0) / 2.0);
        assert_eq!(b.position.y - 7.0, (50.0 - 20.0) / 2.0);
        Ok(())
    }

    #[test]
    fn flexible_child_is_clamped_against_the_parent() -> Result<()> {
        let probe = Probe::new(Constraints::flexible(0.0, 0.0, 40.0, 40.0));
        let log = probe.log();
        let mut a = Align::center(probe);
        render_at_offset(&mut a)?;

        let b = log.borrow()[0];
        assert_eq!(b.size, Size::new(40.0, 40.0));
        assert_eq!(b.position, Point::new(35.0, 12.0));
        Ok(())
    }

    #[test]
    fn unconstrained_flexible_child_fills_the_parent() -> Result<()> {
        let probe = Probe::new(Constraints::fill());
        let log = probe.log();
        let mut a = Align::new(probe, Gravity::SouthEast);
        render_at_offset(&mut a)?;

        let b = log.borrow()[0];
        assert_eq!(b.position, Point::new(5.0, 7.0));
        assert_eq!(b.size, Size::new(100.0, 50.0));
        Ok(())
    }

    #[test]
    fn oversized_rigid_child_centers_past_the_edge() -> Result<()> {
        // A rigid child larger than the parent keeps its size; the
        // anchor arithmetic simply goes negative.
        let probe = Probe::new(Constraints::rigid(120.0, 20.0));
        let log = probe.log();
        let mut a = Align::center(probe);
        render_at_offset(&mut a)?;

        let b = log.borrow()[0];
        assert_eq!(b.size.w, 120.0);
        assert_eq!(b.position.x, 5.0 + (100.0 - 120.0) / 2.0);
        Ok(())
    }

    #[test]
    fn empty_positioner_reports_parent_size() -> Result<()> {
        let mut a = Align::empty(Gravity::Center);
        let used = render_at_offset(&mut a)?;
        assert_eq!(used, Size::new(100.0, 50.0));
        Ok(())
    }
}
