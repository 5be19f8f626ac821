// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The uniform grid: cell indexing, body bookkeeping, and proximity queries.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::cell::{Arena, Cell, CellBodies};
use crate::error::{GridError, Result};
use crate::matrix::Matrix;
use crate::pair::BodyPair;
use crate::position::PositionAccessor;
use crate::rect::Rect;
use crate::scalar::Scalar;
use crate::validation::Validation;
use crate::vector::Vector2;

/// Neighbor offsets `(row, column)` scanned by the radius query, in report order:
/// top-left, top, top-right, left, right, bottom-left, bottom, bottom-right.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Location of a cell inside a grid.
///
/// Returned by every operation that places a body, so callers can keep it and hand
/// it back to [`Grid::remove_body`] and [`Grid::update_body_cell`] instead of having
/// the grid recompute it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    /// Row, counted from the top of the bound.
    pub row: usize,
    /// Column, counted from the left of the bound.
    pub column: usize,
}

impl CellIndex {
    /// Create a cell index.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for CellIndex {
    #[inline]
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

/// Uniform spatial grid over a fixed rectangular bound.
///
/// The bound is split into `rows × columns` equally sized cells. Each body lives in
/// exactly one cell, the one containing its position as reported by the grid's
/// [`PositionAccessor`]. The grid never observes positions changing on its own:
/// after moving a body, call [`update_body_cell`][Self::update_body_cell].
///
/// Bodies are shared through [`Rc`] and identified by address, so two bodies with
/// equal values are still distinct entries. The grid is not `Clone`.
pub struct Grid<B, A: PositionAccessor<B>> {
    cells: Matrix<Cell>,
    arena: Arena<B>,
    body_count: usize,
    bound: Rect<A::Scalar>,
    cell_size: Vector2<A::Scalar>,
    accessor: A,
    validation: Validation,
}

impl<B, A: PositionAccessor<B>> Debug for Grid<B, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let occupied_cells = self.cells.iter().filter(|c| !c.is_empty()).count();
        f.debug_struct("Grid")
            .field("bound", &self.bound)
            .field("rows", &self.rows())
            .field("columns", &self.columns())
            .field("cell_size", &self.cell_size)
            .field("body_count", &self.body_count)
            .field("occupied_cells", &occupied_cells)
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

#[inline]
fn is_same<B>(candidate: &Rc<B>, body: &B) -> bool {
    core::ptr::eq(Rc::as_ptr(candidate), body)
}

/// Clamp a signed cell coordinate into `0..len`.
#[inline]
fn clamp_axis(coord: i32, len: usize) -> usize {
    usize::try_from(coord).map_or(0, |c| c.min(len - 1))
}

impl<B, A: PositionAccessor<B>> Grid<B, A> {
    /// Create a grid with the default [`Validation`] level.
    ///
    /// Fails with [`GridError::InvalidArgument`] when `rows` or `columns` is zero,
    /// when `rows × columns` cells cannot be allocated, or when the bound does not have
    /// a finite, strictly positive width and height.
    pub fn new(bound: Rect<A::Scalar>, rows: usize, columns: usize, accessor: A) -> Result<Self> {
        Self::with_validation(bound, rows, columns, accessor, Validation::default())
    }

    /// Create a grid with an explicit [`Validation`] level.
    pub fn with_validation(
        bound: Rect<A::Scalar>,
        rows: usize,
        columns: usize,
        accessor: A,
        validation: Validation,
    ) -> Result<Self> {
        if rows == 0 || columns == 0 {
            tracing::warn!(rows, columns, "rejected grid shape");
            return Err(GridError::InvalidArgument(
                "Grid::new: rows and columns must be greater than 0",
            ));
        }
        let zero = A::Scalar::zero();
        if !bound.position.is_finite()
            || !bound.size.is_finite()
            || bound.size.x <= zero
            || bound.size.y <= zero
        {
            tracing::warn!(?bound, "rejected grid bound");
            return Err(GridError::InvalidArgument(
                "Grid::new: bound must have a finite, strictly positive size",
            ));
        }
        let cell_size = bound.size.checked_cwise_div(Vector2::new(
            A::Scalar::from_usize(columns),
            A::Scalar::from_usize(rows),
        ))?;
        let cells = Matrix::new(rows, columns).inspect_err(|_| {
            tracing::warn!(rows, columns, "rejected grid shape");
        })?;

        tracing::debug!(rows, columns, ?cell_size, ?validation, "created spatial grid");
        Ok(Self {
            cells,
            arena: Arena::default(),
            body_count: 0,
            bound,
            cell_size,
            accessor,
            validation,
        })
    }

    /// The region partitioned by this grid.
    #[inline]
    pub fn bound(&self) -> Rect<A::Scalar> {
        self.bound
    }

    /// Number of cell rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    /// Number of cell columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.cells.columns()
    }

    /// Cell width (`x`) and height (`y`): the bound size divided by `(columns, rows)`.
    #[inline]
    pub fn cell_size(&self) -> Vector2<A::Scalar> {
        self.cell_size
    }

    /// The position accessor this grid was built with.
    #[inline]
    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    /// Current hot-path [`Validation`] level.
    #[inline]
    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// Change the hot-path [`Validation`] level.
    #[inline]
    pub fn set_validation(&mut self, validation: Validation) {
        self.validation = validation;
    }

    /// Total number of body references held across all cells.
    #[inline]
    pub fn body_count(&self) -> usize {
        self.body_count
    }

    /// Whether the grid holds no bodies.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body_count == 0
    }

    /// Cell containing `position`.
    ///
    /// Under [`Validation::Checked`] a non-finite position fails with
    /// [`GridError::Runtime`] and a position outside `[0, rows) × [0, columns)` after
    /// flooring fails with [`GridError::OutOfRange`]. Note that the right and bottom
    /// edges of the bound are outside the last cell. Under [`Validation::Unchecked`]
    /// the index is clamped into the grid instead.
    pub fn cell_index_of(&self, position: Vector2<A::Scalar>) -> Result<CellIndex> {
        let row = A::Scalar::cell_coord(position.y, self.bound.position.y, self.cell_size.y);
        let column = A::Scalar::cell_coord(position.x, self.bound.position.x, self.cell_size.x);

        if !self.validation.is_checked() {
            return Ok(CellIndex::new(
                clamp_axis(row, self.rows()),
                clamp_axis(column, self.columns()),
            ));
        }

        if !position.is_finite() {
            tracing::warn!(?position, "non-finite body position");
            return Err(GridError::Runtime("Grid::cell_index: position is not finite"));
        }
        match (usize::try_from(row), usize::try_from(column)) {
            (Ok(row), Ok(column)) if self.cells.contains(row, column) => {
                Ok(CellIndex::new(row, column))
            }
            _ => {
                tracing::warn!(?position, row, column, "position outside grid bound");
                Err(GridError::OutOfRange("Grid::cell_index: out of range"))
            }
        }
    }

    /// Cell index of `body`, computed from its current position.
    pub fn cell_index(&self, body: &B) -> Result<CellIndex> {
        self.cell_index_of(self.accessor.position(body))
    }

    /// Cell that `body` should currently be in, based on its live position.
    ///
    /// This is not a lookup: it does not check that the body was ever added. Use it to
    /// obtain a cell for [`remove_body`][Self::remove_body] or
    /// [`update_body_cell`][Self::update_body_cell] when none was cached.
    #[inline]
    pub fn body_cell(&self, body: &B) -> Result<CellIndex> {
        self.cell_index(body)
    }

    /// Number of bodies in `cell`, or 0 when `cell` is outside the grid.
    pub fn cell_len(&self, cell: CellIndex) -> usize {
        self.cells.get(cell.row, cell.column).map_or(0, Cell::len)
    }

    /// Bodies in `cell`, in insertion order.
    ///
    /// Fails with [`GridError::OutOfRange`] when `cell` is outside the grid.
    pub fn cell_bodies(&self, cell: CellIndex) -> Result<CellBodies<'_, B>> {
        let c = self
            .cells
            .at(cell.row, cell.column)
            .map_err(|_| GridError::OutOfRange("Grid::cell_bodies: out of range"))?;
        Ok(c.iter(&self.arena))
    }

    /// All bodies, cell by cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<B>> + '_ {
        self.cells.iter().flat_map(|c| c.iter(&self.arena))
    }

    /// Add a body to the cell containing its position and return that cell.
    ///
    /// Adding the same body twice stores two references to it.
    pub fn add_body(&mut self, body: Rc<B>) -> Result<CellIndex> {
        let index = self.cell_index(&body)?;
        let slot = self.arena.insert(body);
        self.cells[(index.row, index.column)].push_back(&mut self.arena, slot);
        self.body_count += 1;
        Ok(index)
    }

    /// Remove every reference to `body` stored in `cell` and return how many were removed.
    ///
    /// The grid trusts `cell`: if the body is elsewhere, nothing is removed and 0 is
    /// returned. The same happens when `cell` is outside the grid.
    pub fn remove_body(&mut self, body: &B, cell: CellIndex) -> usize {
        let Some(c) = self.cells.get_mut(cell.row, cell.column) else {
            return 0;
        };
        let removed = c.remove_where(&mut self.arena, |candidate| is_same(candidate, body));
        self.body_count -= removed;
        removed
    }

    /// Move `body` to the cell matching its current position and return that cell.
    ///
    /// `previous` must be the cell the body was last placed in. When the body is still
    /// in the same cell this does nothing. Otherwise its reference is relinked from
    /// `previous` into the new cell without reallocating. Fails with
    /// [`GridError::OutOfRange`] when `previous` does not hold the body (or lies outside
    /// the grid), and with any error of [`cell_index`][Self::cell_index].
    pub fn update_body_cell(&mut self, body: &B, previous: CellIndex) -> Result<CellIndex> {
        let Some(previous_cell) = self.cells.get(previous.row, previous.column) else {
            tracing::warn!(?previous, "relocation from a cell outside the grid");
            return Err(GridError::OutOfRange(
                "Grid::update_body_cell: previous cell is out of range",
            ));
        };
        let next = self.cell_index(body)?;
        if next == previous {
            return Ok(next);
        }

        let Some(slot) = previous_cell.find(&self.arena, |candidate| is_same(candidate, body))
        else {
            tracing::warn!(?previous, "relocated body not found in its previous cell");
            return Err(GridError::OutOfRange("Grid::update_body_cell: body not found"));
        };

        self.cells[(previous.row, previous.column)].unlink(&mut self.arena, slot);
        self.cells[(next.row, next.column)].push_back(&mut self.arena, slot);
        tracing::trace!(?previous, ?next, "relocated body");
        Ok(next)
    }

    /// Remove all bodies.
    pub fn clear_all_bodies(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::default();
        }
        self.arena.clear();
        tracing::debug!(removed = self.body_count, "cleared spatial grid");
        self.body_count = 0;
    }

    fn check_distance(&self, distance: A::Scalar) -> Result<()> {
        if !self.validation.is_checked() {
            return Ok(());
        }
        let limit = A::Scalar::min(self.cell_size.x, self.cell_size.y);
        if !distance.is_finite() || distance < A::Scalar::zero() || distance > limit {
            tracing::warn!(?distance, ?limit, "query distance exceeds cell size");
            return Err(GridError::InvalidArgument(
                "Only distance smaller than or equal to cell size is supported",
            ));
        }
        Ok(())
    }

    /// Visit every other body within `distance` of `body`, without allocating.
    ///
    /// See [`query_distance`][Self::query_distance] for the order and preconditions.
    pub fn visit_distance<F: FnMut(&Rc<B>)>(
        &self,
        body: &B,
        cell: CellIndex,
        distance: A::Scalar,
        mut f: F,
    ) -> Result<()> {
        self.check_distance(distance)?;
        let center = self
            .cells
            .at(cell.row, cell.column)
            .map_err(|_| GridError::OutOfRange("Grid::query_distance: cell is out of range"))?;

        let origin = self.accessor.position(body);
        let threshold = distance * distance;
        let is_nearby =
            |other: &B| self.accessor.position(other).distance_squared(origin) <= threshold;

        for other in center.iter(&self.arena) {
            if !is_same(other, body) && is_nearby(other) {
                f(other);
            }
        }

        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(row), Some(column)) = (
                cell.row.checked_add_signed(dr),
                cell.column.checked_add_signed(dc),
            ) else {
                continue;
            };
            let Some(neighbor) = self.cells.get(row, column) else {
                continue;
            };
            for other in neighbor.iter(&self.arena) {
                if is_nearby(other) {
                    f(other);
                }
            }
        }
        Ok(())
    }

    /// Every other body whose distance to `body` is at most `distance`.
    ///
    /// `cell` is the cell holding `body`. Only that cell and its (up to) eight
    /// neighbors are scanned, so `distance` must not exceed the smaller of the cell
    /// width and height; under [`Validation::Checked`] a larger (or negative)
    /// distance fails with [`GridError::InvalidArgument`].
    ///
    /// Results come from the body's own cell first, then from the neighbors in the
    /// order top-left, top, top-right, left, right, bottom-left, bottom, bottom-right,
    /// each in insertion order. `body` itself is never reported.
    pub fn query_distance(
        &self,
        body: &B,
        cell: CellIndex,
        distance: A::Scalar,
    ) -> Result<Vec<Rc<B>>> {
        let mut out = Vec::new();
        self.visit_distance(body, cell, distance, |other| out.push(Rc::clone(other)))?;
        Ok(out)
    }

    /// Every unordered pair of distinct bodies at most `distance` apart.
    ///
    /// A body added more than once is never paired with itself.
    ///
    /// Has the same `distance` precondition as [`query_distance`][Self::query_distance].
    ///
    /// ```text
    /// +----+----+----+
    /// | TL | T  |    |   The sweep stops at every cell C that has a top, left and
    /// +----+----+----+   top-left neighbor and tests all pairs among the bodies of
    /// | L  | C  |    |   {C, L, T, TL}. Each shared edge and each diagonal between
    /// +----+----+----+   two cells is covered by the window whose bottom-right
    /// |    |    |    |   cell touches it, so no neighborhood is ever missed.
    /// +----+----+----+
    /// ```
    ///
    /// Bodies in the same cell meet in several overlapping windows, so results are
    /// collected in a set whose [`BodyPair`] equality ignores order. Grids with a single
    /// row or column sweep 1×2, 2×1 or 1×1 windows instead.
    pub fn query_distance_pair(&self, distance: A::Scalar) -> Result<HashSet<BodyPair<B>>> {
        self.check_distance(distance)?;
        let threshold = distance * distance;

        let rows = self.rows();
        let columns = self.columns();
        let mut result = HashSet::new();
        let mut window: SmallVec<[(&Rc<B>, Vector2<A::Scalar>); 16]> = SmallVec::new();

        for row in rows.min(2) - 1..rows {
            for column in columns.min(2) - 1..columns {
                window.clear();
                let mut gather = |r: usize, c: usize| {
                    for body in self.cells[(r, c)].iter(&self.arena) {
                        window.push((body, self.accessor.position(body)));
                    }
                };
                gather(row, column);
                if column > 0 {
                    gather(row, column - 1);
                }
                if row > 0 {
                    gather(row - 1, column);
                    if column > 0 {
                        gather(row - 1, column - 1);
                    }
                }

                for (i, &(a, pa)) in window.iter().enumerate() {
                    for &(b, pb) in &window[i + 1..] {
                        if !Rc::ptr_eq(a, b) && pa.distance_squared(pb) <= threshold {
                            result.insert(BodyPair::new(Rc::clone(a), Rc::clone(b)));
                        }
                    }
                }
            }
        }

        Ok(result)
    }
}
