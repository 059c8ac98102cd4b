//! The paint seam between layout and the graphics backend.
//!
//! The core computes geometry only; leaf widgets draw through this
//! trait, and the graphics backend behind it (GPU, terminal cell grid,
//! whatever) is an external collaborator. Two non-graphical
//! implementations ship with the crate: [`dummy::DummySurface`] discards
//! everything, [`test::TestSurface`] records a draw list for tests.

pub mod dummy;

use geom::Rect;

use crate::{Color, Result};

/// The trait implemented by paint surfaces.
pub trait Surface {
    /// Clear the whole canvas to a color.
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Fill a rectangle with a solid color.
    fn fill(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Flush buffered output to the display.
    fn flush(&mut self) -> Result<()>;
}
