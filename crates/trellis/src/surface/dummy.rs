use geom::Rect;

use crate::{Color, Result, Surface};

/// A paint surface that discards all output. Useful for driving layout
/// passes where only the computed geometry matters.
#[derive(Debug, Default)]
pub struct DummySurface;

impl DummySurface {
    /// Construct a discarding surface.
    pub fn new() -> Self {
        DummySurface
    }
}

impl Surface for DummySurface {
    fn clear(&mut self, _color: Color) -> Result<()> {
        Ok(())
    }

    fn fill(&mut self, _rect: Rect, _color: Color) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
