//! Error types with diagnostics using miette
//!
//! Only conversion from loosely typed input can fail; every arithmetic
//! operation is total and propagates IEEE results instead.

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while building a [`Point`](crate::Point).
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    #[error("invalid point format: found {found}")]
    #[diagnostic(
        code(point_geometry::convert::invalid_format),
        help("expected [x, y] or {{x, y}} point format")
    )]
    InvalidFormat {
        /// Human readable description of the rejected input shape
        found: String,
    },
}

impl PointError {
    pub(crate) fn invalid_format(found: impl Into<String>) -> Self {
        PointError::InvalidFormat {
            found: found.into(),
        }
    }
}
