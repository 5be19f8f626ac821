// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precondition checking level for the grid hot paths.

/// How much a [`Grid`][crate::Grid] checks on its hot paths.
///
/// Construction arguments and relocation sources are always checked. This setting
/// only covers the per-call checks that cost something on every index computation
/// and query.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Validation {
    /// Report out-of-bound and non-finite positions and oversized query distances.
    Checked,
    /// Skip those checks.
    ///
    /// A position outside the bound is clamped into the nearest edge cell, and a
    /// query distance larger than the cell size may silently miss bodies that are
    /// more than one cell away. Neither is memory-unsafe.
    Unchecked,
}

impl Validation {
    /// Whether hot-path preconditions are reported.
    #[inline]
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::Checked)
    }
}

impl Default for Validation {
    /// [`Checked`][Self::Checked] when debug assertions are enabled, else
    /// [`Unchecked`][Self::Unchecked].
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Validation;

    #[test]
    fn default_follows_debug_assertions() {
        assert_eq!(Validation::default().is_checked(), cfg!(debug_assertions));
        assert!(!Validation::Unchecked.is_checked());
    }
}
