//! Error types for table construction, lookup, and text IO

use thiserror::Error;

/// Errors raised by tables, grids, the registry, and the text format.
///
/// A degenerate axis (fewer than two breakpoints, or a flat segment) is not
/// an error; lookups on such an axis hold the lower value instead of blending.
#[derive(Debug, Error)]
pub enum TableError {
    /// Axis lengths disagree with the grid extents, or a value buffer
    /// has the wrong number of entries
    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    /// An axis or grid extent has no entries
    #[error("Axis {axis} is empty")]
    EmptyAxis { axis: usize },

    /// No table stored under this key at any dimensionality
    #[error("Unknown table key: {0}")]
    UnknownKey(String),

    /// Number of coordinates does not match the table dimensionality
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    ArityMismatch { expected: usize, found: usize },

    /// Multi-index outside the grid
    #[error("Index {index:?} out of bounds for dims {dims:?}")]
    IndexOutOfBounds { index: Vec<usize>, dims: Vec<usize> },

    /// Malformed table text
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Named variable missing from a `Variables` container
    #[error("Variable not found: {0}")]
    VariableNotFound(String),

    /// No variables of the requested type have been stored
    #[error("No variables of type {0} stored")]
    NoVariablesOfType(&'static str),
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
