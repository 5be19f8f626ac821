// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating-point scalar abstraction used for positions and distances.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Floating-point coordinate type accepted by the grid.
///
/// Implemented for `f32` and `f64`. The square root and hypotenuse go through
/// `kurbo`'s float helpers when the `std` feature is disabled.
pub trait Scalar:
    Copy
    + PartialOrd
    + Default
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Convert a count (rows, columns) to the scalar type.
    fn from_usize(n: usize) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Length of the hypotenuse of a right triangle with legs `self` and `other`.
    fn hypot(self, other: Self) -> Self;

    /// Whether the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Min of the two scalar values.
    fn min(a: Self, b: Self) -> Self;

    /// Map a coordinate to a cell coordinate along one axis.
    ///
    /// Computes `floor((value - origin) / cell_size)`, rounding toward −∞ and
    /// saturating at the `i32` range. Monotonic in `value` for fixed `origin`
    /// and `cell_size`.
    fn cell_coord(value: Self, origin: Self, cell_size: Self) -> i32;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline(always)]
            fn zero() -> Self {
                0.0
            }

            #[allow(
                clippy::cast_precision_loss,
                reason = "Grid shapes are far below the exactly representable integer range."
            )]
            #[inline]
            fn from_usize(n: usize) -> Self {
                n as Self
            }

            #[cfg(feature = "std")]
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }

            #[cfg(not(feature = "std"))]
            #[inline]
            fn sqrt(self) -> Self {
                kurbo::common::FloatFuncs::sqrt(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn hypot(self, other: Self) -> Self {
                <$ty>::hypot(self, other)
            }

            #[cfg(not(feature = "std"))]
            #[inline]
            fn hypot(self, other: Self) -> Self {
                kurbo::common::FloatFuncs::hypot(self, other)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            #[inline]
            fn min(a: Self, b: Self) -> Self {
                <$ty>::min(a, b)
            }

            #[allow(
                clippy::cast_possible_truncation,
                reason = "the float-to-int `as` cast saturates, which is the clamping we want"
            )]
            #[inline]
            fn cell_coord(value: Self, origin: Self, cell_size: Self) -> i32 {
                debug_assert!(cell_size > 0.0, "cells must have a positive extent");
                let offset = (value - origin) / cell_size;
                let truncated = offset as i32;
                // `as` truncates toward zero; negative fractions floor one cell lower.
                if offset < 0.0 && (truncated as Self) > offset {
                    truncated.saturating_sub(1)
                } else {
                    truncated
                }
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);
