//! Test utilities: a render harness plus probe widgets for asserting
//! layout geometry and error propagation. Available to dependents via
//! the `testing` feature.

use std::cell::RefCell;
use std::rc::Rc;

use geom::{Rect, Size};

use crate::{
    Constraints, Error, LayoutBox, RenderContext, Result, Surface, Widget,
    surface::test::{Op, TestSurface},
};

/// A harness that owns a root widget, a canvas size, and a recording
/// surface. Tests drive whole-tree renders and then inspect the
/// recorded draw list or their probes' captured boxes.
pub struct Harness<W> {
    /// The widget under test.
    root: W,
    /// Canvas width in pixels.
    canvas_width: u32,
    /// Canvas height in pixels.
    canvas_height: u32,
    /// The recording surface.
    surface: TestSurface,
}

impl<W: Widget> Harness<W> {
    /// A harness with a default canvas of 100x100.
    pub fn new(root: W) -> Self {
        Self::with_size(root, 100, 100)
    }

    /// A harness using `width` x `height` for the canvas.
    pub fn with_size(root: W, width: u32, height: u32) -> Self {
        Self {
            root,
            canvas_width: width,
            canvas_height: height,
            surface: TestSurface::new(),
        }
    }

    /// Use a bounded surface that rejects fills outside the canvas.
    pub fn with_bounded_surface(mut self) -> Self {
        self.surface = TestSurface::with_canvas(self.canvas_width as f32, self.canvas_height as f32);
        self
    }

    /// Run one full render pass: root context from the canvas
    /// dimensions, default (empty) box, as the frame loop would.
    pub fn render(&mut self) -> Result<Size> {
        let ctx = RenderContext::root(self.canvas_width, self.canvas_height);
        let area = LayoutBox::default();
        self.root.render(&ctx, &mut self.surface, &area)
    }

    /// The widget under test.
    pub fn root(&mut self) -> &mut W {
        &mut self.root
    }

    /// The recording surface.
    pub fn surface(&self) -> &TestSurface {
        &self.surface
    }

    /// The recorded operations, in call order.
    pub fn ops(&self) -> &[Op] {
        self.surface.ops()
    }

    /// The rectangles of all recorded fills, in call order.
    pub fn fills(&self) -> Vec<Rect> {
        self.surface.fills()
    }
}

/// A shared log of the boxes assigned to a [`Probe`] across renders.
pub type ProbeLog = Rc<RefCell<Vec<LayoutBox>>>;

/// A leaf that records every box it is assigned and reports a
/// configurable used size. The default reports the assigned size
/// exactly (a well-behaved child); [`Probe::reporting`] makes it
/// misreport, for exercising the used-size caller contract.
pub struct Probe {
    /// The probe's constraints.
    constraints: Constraints,
    /// Used size to report; `None` reports the assigned size.
    report: Option<Size>,
    /// Captured boxes, one per render.
    log: ProbeLog,
}

impl Probe {
    /// A probe with the given constraints.
    pub fn new(constraints: Constraints) -> Self {
        Self {
            constraints,
            report: None,
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Report this used size instead of the assigned one.
    pub fn reporting(mut self, size: Size) -> Self {
        self.report = Some(size);
        self
    }

    /// A handle to the captured boxes, valid after the probe has been
    /// moved into a tree.
    pub fn log(&self) -> ProbeLog {
        Rc::clone(&self.log)
    }
}

impl Widget for Probe {
    fn constraints(&self) -> Constraints {
        self.constraints
    }

    fn render(
        &mut self,
        _ctx: &RenderContext,
        _surface: &mut dyn Surface,
        area: &LayoutBox,
    ) -> Result<Size> {
        self.log.borrow_mut().push(*area);
        Ok(self.report.unwrap_or(area.size))
    }
}

/// A leaf whose render always fails with a drawing error.
pub struct Fail;

impl Widget for Fail {
    fn constraints(&self) -> Constraints {
        Constraints::fill()
    }

    fn render(
        &mut self,
        _ctx: &RenderContext,
        _surface: &mut dyn Surface,
        _area: &LayoutBox,
    ) -> Result<Size> {
        Err(Error::Render("fail widget".into()))
    }
}
