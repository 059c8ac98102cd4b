//! The structural widgets of the layout engine, plus the solid-color
//! leaf.

/// Gravity-based single-child positioner.
mod align;
/// Flex row/column container.
mod container;
/// Solid-color leaf widget.
mod fill;
/// Overlay compositor.
mod overlay;
/// Root sizer.
mod root;

pub use align::{Align, Gravity};
pub use container::{Container, Direction, FlexChild, FlexKind};
pub use fill::Fill;
pub use overlay::Overlay;
pub use root::Root;
