#![warn(missing_docs)]
//! Trellis: a retained-mode widget composition and layout engine for a
//! 2D canvas.
//!
//! A tree of widgets negotiates size and position top-down, then paints
//! bottom-up: parents first, children on top, later siblings over
//! earlier ones. The tree's structure is fixed at construction time and
//! reused across frames; all geometry is transient, recomputed every
//! frame from the current canvas size.
//!
//! The main entry points are:
//! - [`Widget`] - the contract implemented by every tree node
//! - [`Root`] - the root sizer mapping the canvas onto the tree
//! - [`Container`] - the flex row/column container
//! - [`Overlay`] - the overlay compositor
//! - [`Align`] - the gravity positioner
//!
//! # Module Organization
//!
//! - [`surface`] - the paint seam to the graphics backend
//! - [`widgets`] - the structural widgets and the solid-color leaf

/// Size constraints and clamping rules.
mod constraint;
/// Per-call render context.
mod context;
/// Error types.
pub mod error;
/// Resolved layout boxes.
mod layout;
/// Color type.
pub mod style;
/// Paint surfaces.
pub mod surface;
/// The widget contract.
pub mod widget;
/// Structural widgets.
pub mod widgets;

/// Test utilities, available to dependents via the `testing` feature.
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use constraint::{Constraints, UNCONSTRAINED};
pub use context::RenderContext;
pub use error::{Error, Result};
pub use layout::LayoutBox;
pub use style::Color;
pub use surface::Surface;
pub use widget::Widget;
pub use widgets::{Align, Container, Direction, Fill, FlexChild, FlexKind, Gravity, Overlay, Root};

// Export commonly used geometry types at the root.
pub use geom;
pub use geom::{Point, Rect, Size};
