use thiserror::Error;

/// The result type used throughout trellis.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced during a render pass.
///
/// A failure at any node aborts that node's subtree immediately and
/// propagates unchanged to the frame's root caller; siblings after the
/// failing node are not rendered.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A drawing operation could not proceed.
    #[error("render: {0}")]
    Render(String),
    /// A widget's own configuration is malformed.
    #[error("layout: {0}")]
    Layout(String),
    /// A geometry operation failed, e.g. drawing outside canvas bounds.
    #[error("geometry: {0}")]
    Geometry(String),
}
