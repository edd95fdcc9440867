//! crates/catalog/src/error.rs
//! Error types raised while declaring catalogs and dispatching invocations.

use std::io;

use thiserror::Error;

/// A catalog declaration that cannot be rendered safely.
///
/// Raised when a catalog is constructed, before any invocation happens.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DeclarationError {
    /// The catalog was given an empty name.
    #[error("catalog name must not be empty")]
    EmptyCatalogName,
    /// Operation names are written verbatim and must be identifiers.
    #[error("operation name '{name}' is not a valid identifier")]
    InvalidOperationName {
        /// The rejected name.
        name: String,
    },
    /// Parameter names are written verbatim and must be identifiers.
    #[error("parameter '{parameter}' of operation '{operation}' is not a valid identifier")]
    InvalidParameterName {
        /// Operation declaring the parameter.
        operation: String,
        /// The rejected name.
        parameter: String,
    },
    /// Two parameters of one operation share a name.
    #[error("operation '{operation}' declares parameter '{parameter}' more than once")]
    DuplicateParameter {
        /// Operation declaring the parameters.
        operation: String,
        /// The repeated name.
        parameter: String,
    },
    /// Two operations of one catalog share a name.
    #[error("catalog '{catalog}' declares operation '{operation}' more than once")]
    DuplicateOperation {
        /// Catalog declaring the operations.
        catalog: String,
        /// The repeated name.
        operation: String,
    },
}

/// An invocation whose arguments could not be turned into a line.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RenderError {
    /// An argument was absent.
    #[error("operation '{operation}' has no value for parameter '{parameter}'")]
    MissingValue {
        /// Operation being rendered.
        operation: String,
        /// Parameter without a value.
        parameter: String,
    },
    /// The number of arguments differs from the declared parameters.
    #[error("operation '{operation}' expects {expected} arguments but received {actual}")]
    ArityMismatch {
        /// Operation being rendered.
        operation: String,
        /// Declared parameter count.
        expected: usize,
        /// Supplied argument count.
        actual: usize,
    },
    /// A dynamic catalog was asked for an operation it does not declare.
    #[error("catalog '{catalog}' has no operation named '{operation}'")]
    UnknownOperation {
        /// Catalog that was consulted.
        catalog: String,
        /// Requested operation.
        operation: String,
    },
    /// The value's `Display` implementation reported an error.
    #[error("formatting parameter '{parameter}' of operation '{operation}' failed")]
    Format {
        /// Operation being rendered.
        operation: String,
        /// Parameter whose value failed to format.
        parameter: String,
    },
}

/// Any failure surfaced by the catalog layer.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// See [`DeclarationError`].
    #[error(transparent)]
    Declaration(#[from] DeclarationError),
    /// See [`RenderError`].
    #[error(transparent)]
    Render(#[from] RenderError),
    /// The backend failed to write the line. The error is passed through as is.
    #[error("backend write failed: {0}")]
    Backend(#[from] io::Error),
}

impl CatalogError {
    /// Returns the backend error, if this is one.
    #[must_use]
    pub fn as_backend(&self) -> Option<&io::Error> {
        match self {
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = CatalogError> = std::result::Result<T, E>;
