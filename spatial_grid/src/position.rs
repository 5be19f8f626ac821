// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position accessor capability.

use crate::scalar::Scalar;
use crate::vector::Vector2;

/// Extracts the current position of a body.
///
/// The accessor is handed to the grid once, at construction, and dispatched
/// statically on every indexing and query call. It must be pure: reading the
/// position of a body twice without an intervening mutation must give the same
/// value, otherwise the grid can no longer find the body in the cell it was
/// indexed under.
///
/// Zero-sized accessor types are the cheapest form:
///
/// ```rust
/// use spatial_grid::{PositionAccessor, Vector2f};
///
/// struct Particle {
///     pos: [f32; 2],
/// }
///
/// struct ParticlePosition;
///
/// impl PositionAccessor<Particle> for ParticlePosition {
///     type Scalar = f32;
///
///     fn position(&self, body: &Particle) -> Vector2f {
///         Vector2f::new(body.pos[0], body.pos[1])
///     }
/// }
/// ```
///
/// Closures taking `&B` work as well, as long as the parameter type is spelled out.
pub trait PositionAccessor<B: ?Sized> {
    /// Coordinate type of the returned position.
    type Scalar: Scalar;

    /// Current position of `body`.
    fn position(&self, body: &B) -> Vector2<Self::Scalar>;
}

impl<B, T, F> PositionAccessor<B> for F
where
    B: ?Sized,
    T: Scalar,
    F: Fn(&B) -> Vector2<T>,
{
    type Scalar = T;

    #[inline]
    fn position(&self, body: &B) -> Vector2<T> {
        self(body)
    }
}
