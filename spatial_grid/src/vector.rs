// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D vector / coordinate value type.

use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{GridError, Result};
use crate::scalar::Scalar;

/// A 2D coordinate or displacement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component (grows downward, toward higher rows).
    pub y: T,
}

impl<T> Vector2<T> {
    /// Create a vector from its components.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Vector2<T> {
    /// A vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: T) -> Self {
        Self { x: v, y: v }
    }
}

impl<T: Copy + Mul<Output = T>> Vector2<T> {
    /// Multiply component by component.
    #[inline]
    pub fn cwise_mul(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

impl<T: Copy + Mul<Output = T> + Add<Output = T>> Vector2<T> {
    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl<T: Copy + Div<Output = T>> Vector2<T> {
    /// Divide component by component.
    ///
    /// No zero check is performed; see [`checked_cwise_div`][Self::checked_cwise_div].
    #[inline]
    pub fn cwise_div(self, other: Self) -> Self {
        Self::new(self.x / other.x, self.y / other.y)
    }
}

impl<T: Copy + Div<Output = T> + PartialEq + Default> Vector2<T> {
    /// Divide component by component, rejecting a divisor with a zero component.
    pub fn checked_cwise_div(self, other: Self) -> Result<Self> {
        let zero = T::default();
        if other.x == zero || other.y == zero {
            return Err(GridError::InvalidArgument(
                "Vector2::cwise_div: divisor must not have a zero component",
            ));
        }
        Ok(self.cwise_div(other))
    }
}

impl<T: Scalar> Vector2<T> {
    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    ///
    /// Prefer [`distance_squared`][Self::distance_squared] when only comparing distances.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> T {
        let d = other - self;
        d.x * d.x + d.y * d.y
    }
}

impl<T: Add<Output = T>> Add for Vector2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: AddAssign> AddAssign for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Sub<Output = T>> Sub for Vector2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: SubAssign> SubAssign for Vector2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vector2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Copy + MulAssign> MulAssign<T> for Vector2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl<T: Neg<Output = T>> Neg for Vector2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($ty:ty),*) => {
        $(
            impl Mul<Vector2<$ty>> for $ty {
                type Output = Vector2<$ty>;

                #[inline]
                fn mul(self, rhs: Vector2<$ty>) -> Vector2<$ty> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i32, u32, f32, f64);

impl From<kurbo::Point> for Vector2<f64> {
    #[inline]
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2<f64>> for kurbo::Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<kurbo::Vec2> for Vector2<f64> {
    #[inline]
    fn from(v: kurbo::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2<f64>> for kurbo::Vec2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Integer vector.
pub type Vector2i = Vector2<i32>;
/// Unsigned integer vector.
pub type Vector2u = Vector2<u32>;
/// Single-precision vector.
pub type Vector2f = Vector2<f32>;
/// Double-precision vector.
pub type Vector2d = Vector2<f64>;
