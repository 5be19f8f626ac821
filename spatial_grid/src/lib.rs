// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial Grid: a uniform 2D grid for broad-phase proximity queries.
//!
//! A [`Grid`] partitions a fixed rectangular bound into `rows × columns` equally
//! sized cells and tracks a dynamic set of point-like bodies by the cell containing
//! their current position.
//!
//! - Add, remove, and relocate bodies in O(1) per call.
//! - Find every body within a distance of one body ([`Grid::query_distance`]).
//! - Find every pair of bodies within a distance of each other
//!   ([`Grid::query_distance_pair`]).
//!
//! Both queries touch only a small neighborhood of cells, so their cost follows
//! local density rather than the total number of bodies. In exchange, the query
//! distance may not exceed the cell size.
//!
//! Bodies are shared through [`Rc`](alloc::rc::Rc) and identified by address. The
//! grid reads positions through a [`PositionAccessor`] supplied at construction and
//! never observes positions changing by itself: after moving a body, call
//! [`Grid::update_body_cell`] with the cell it was last placed in.
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use spatial_grid::{FloatRect, Grid, Vector2f};
//!
//! struct Ball {
//!     pos: Cell<Vector2f>,
//! }
//!
//! let mut grid = Grid::new(
//!     FloatRect::from_ltrb(0.0, 0.0, 100.0, 100.0),
//!     10,
//!     10,
//!     |b: &Ball| b.pos.get(),
//! )
//! .unwrap();
//!
//! let a = Rc::new(Ball { pos: Cell::new(Vector2f::new(12.0, 12.0)) });
//! let b = Rc::new(Ball { pos: Cell::new(Vector2f::new(25.0, 12.0)) });
//! let a_cell = grid.add_body(Rc::clone(&a)).unwrap();
//! grid.add_body(Rc::clone(&b)).unwrap();
//!
//! // Too far apart for a 5-unit radius.
//! assert!(grid.query_distance(&a, a_cell, 5.0).unwrap().is_empty());
//!
//! // Move `a` next to `b`, then tell the grid.
//! a.pos.set(Vector2f::new(22.0, 12.0));
//! let a_cell = grid.update_body_cell(&a, a_cell).unwrap();
//!
//! let near = grid.query_distance(&a, a_cell, 5.0).unwrap();
//! assert_eq!(near.len(), 1);
//! assert!(Rc::ptr_eq(&near[0], &b));
//! assert_eq!(grid.query_distance_pair(5.0).unwrap().len(), 1);
//! ```
//!
//! ## Validation
//!
//! Index and distance preconditions are checked according to the grid's
//! [`Validation`] level. It defaults to [`Validation::Checked`] in builds with debug
//! assertions and to [`Validation::Unchecked`] otherwise, and can be chosen
//! explicitly with [`Grid::with_validation`]. Unchecked grids clamp out-of-bound
//! positions into the nearest edge cell.
//!
//! ## Features
//!
//! - `std` *(default)*: use the standard library's float math.
//! - `libm`: use `libm` float math through `kurbo`, for `no_std` targets.
//!
//! ### Float semantics
//!
//! Positions are expected to be finite. Checked grids report NaN and infinite
//! positions as [`GridError::Runtime`].

#![no_std]

extern crate alloc;

mod cell;
mod error;
mod grid;
mod matrix;
mod pair;
mod position;
mod rect;
mod scalar;
mod validation;
mod vector;

pub use cell::CellBodies;
pub use error::{GridError, Result};
pub use grid::{CellIndex, Grid};
pub use matrix::Matrix;
pub use pair::BodyPair;
pub use position::PositionAccessor;
pub use rect::{DoubleRect, FloatRect, IntRect, Rect};
pub use scalar::Scalar;
pub use validation::Validation;
pub use vector::{Vector2, Vector2d, Vector2f, Vector2i, Vector2u};
