// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract-violation errors reported by the grid and its value types.

use thiserror::Error;

/// A violated precondition of a grid operation.
///
/// None of these are transient: retrying the same call with the same arguments fails the
/// same way. Operations check their preconditions before mutating, so the grid is left
/// unchanged whenever one of these is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A constructor or query argument is outside its accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// An index (cell, matrix element, or claimed cell of a body) is out of range.
    #[error("out of range: {0}")]
    OutOfRange(&'static str),
    /// General-purpose inconsistency, such as a non-finite body position.
    #[error("runtime error: {0}")]
    Runtime(&'static str),
}

/// Result alias for fallible grid operations.
pub type Result<T> = core::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    extern crate std;

    use super::GridError;
    use std::string::ToString;

    #[test]
    fn display_names_the_kind() {
        let err = GridError::OutOfRange("Grid::cell_index");
        assert_eq!(err.to_string(), "out of range: Grid::cell_index");
        let err = GridError::InvalidArgument("rows must be greater than 0");
        assert!(err.to_string().starts_with("invalid argument"));
    }
}
