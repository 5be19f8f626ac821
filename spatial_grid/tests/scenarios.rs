// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios over a populated grid.

use std::f32::consts::PI;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spatial_grid::{CellIndex, FloatRect, Grid, GridError, PositionAccessor, Validation, Vector2f};

#[derive(Debug)]
struct Body {
    position: [f32; 2],
}

struct BodyPosition;

impl PositionAccessor<Body> for BodyPosition {
    type Scalar = f32;

    fn position(&self, body: &Body) -> Vector2f {
        Vector2f::new(body.position[0], body.position[1])
    }
}

fn checked_grid(rows: usize, columns: usize) -> Grid<Body, BodyPosition> {
    Grid::with_validation(
        FloatRect::from_ltrb(0.0, 0.0, 100.0, 100.0),
        rows,
        columns,
        BodyPosition,
        Validation::Checked,
    )
    .unwrap()
}

fn random_bodies(rng: &mut StdRng, n: usize) -> Vec<Rc<Body>> {
    (0..n)
        .map(|_| {
            Rc::new(Body {
                position: [rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)],
            })
        })
        .collect()
}

#[test]
fn shape_and_cell_indices() {
    let grid = checked_grid(10, 5);
    assert_eq!(grid.cell_size(), Vector2f::new(20.0, 10.0));
    assert_eq!(
        grid.cell_index(&Body { position: [0.5, 5.7] }).unwrap(),
        CellIndex::new(0, 0)
    );
    assert_eq!(
        grid.cell_index(&Body { position: [85.5, 99.9] }).unwrap(),
        CellIndex::new(9, 4)
    );
    assert!(matches!(
        grid.cell_index(&Body { position: [100.0, 100.0] }),
        Err(GridError::OutOfRange(_))
    ));
}

#[test]
fn random_bodies_are_counted_and_removed_once() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut grid = checked_grid(10, 5);
    let bodies = random_bodies(&mut rng, 100);
    for b in &bodies {
        let cell = grid.add_body(Rc::clone(b)).unwrap();
        assert!(cell.row < 10 && cell.column < 5);
    }
    assert_eq!(grid.body_count(), 100);

    for b in &bodies {
        let cell = grid.body_cell(b).unwrap();
        assert_eq!(grid.remove_body(b, cell), 1);
    }
    assert_eq!(grid.body_count(), 0);
    assert!(grid.is_empty());
}

#[test]
fn clear_drops_grid_references_only() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut grid = checked_grid(10, 5);
    let bodies = random_bodies(&mut rng, 100);
    for b in &bodies {
        grid.add_body(Rc::clone(b)).unwrap();
    }
    assert!(bodies.iter().all(|b| Rc::strong_count(b) == 2));

    grid.clear_all_bodies();
    assert_eq!(grid.body_count(), 0);
    assert!(bodies.iter().all(|b| Rc::strong_count(b) == 1));
}

#[test]
fn corner_cluster_radius_query() {
    let mut grid = Grid::with_validation(
        FloatRect::from_ltrb(0.0, 0.0, 2.0, 2.0),
        2,
        2,
        BodyPosition,
        Validation::Checked,
    )
    .unwrap();
    let first = Rc::new(Body { position: [0.9, 0.9] });
    let first_cell = grid.add_body(Rc::clone(&first)).unwrap();
    for position in [[1.1, 0.9], [0.9, 1.1], [1.1, 1.1]] {
        grid.add_body(Rc::new(Body { position })).unwrap();
    }

    assert_eq!(grid.query_distance(&first, first_cell, 0.1).unwrap().len(), 0);
    // A small margin over 0.2 absorbs rounding.
    assert_eq!(grid.query_distance(&first, first_cell, 0.2001).unwrap().len(), 2);
    assert_eq!(grid.query_distance(&first, first_cell, 0.3).unwrap().len(), 3);
}

#[test]
fn pair_query_on_corner_clusters() {
    let mut grid = checked_grid(10, 10);

    // Four bodies meet around every other grid corner, 2 units apart along each axis:
    //
    // +----+----+----+----+--
    // |   .|.   |   .|.   |
    // +----+----+----+----+--
    // |   '|'   |   '|'   |
    // +----+----+----+----+--
    for i in 0..10 {
        for j in 0..10 {
            let x = 10.0 * j as f32 + if j % 2 == 0 { 9.0 } else { 1.0 };
            let y = 10.0 * i as f32 + if i % 2 == 0 { 9.0 } else { 1.0 };
            grid.add_body(Rc::new(Body { position: [x, y] })).unwrap();
        }
    }

    assert_eq!(grid.query_distance_pair(1.0).unwrap().len(), 0);
    // 4 axis-aligned neighbors per cluster, 25 clusters.
    assert_eq!(grid.query_distance_pair(2.001).unwrap().len(), 100);
    // C(4, 2) pairs per cluster once diagonals (2√2) are in reach.
    assert_eq!(grid.query_distance_pair(3.0).unwrap().len(), 150);
}

#[test]
fn pair_query_on_a_circle() {
    let mut grid = checked_grid(10, 10);
    const RADIUS: f32 = 4.0;
    for i in 0..100 {
        let theta = 2.0 * PI * (i as f32 / 100.0);
        let position = [20.0 + RADIUS * theta.cos(), 20.0 + RADIUS * theta.sin()];
        grid.add_body(Rc::new(Body { position })).unwrap();
    }

    // Neighbors on the circle are 4 * sqrt(2 * (1 - cos(2π / 100))) ≈ 0.2512 apart.
    assert_eq!(grid.query_distance_pair(0.26).unwrap().len(), 100);
    // The diameter (8) is below the cell size (10): every pair qualifies.
    assert_eq!(grid.query_distance_pair(8.001).unwrap().len(), 4950);
}

#[test]
fn pair_results_have_no_self_pairs() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut grid = checked_grid(8, 8);
    for b in random_bodies(&mut rng, 300) {
        grid.add_body(b).unwrap();
    }
    let pairs = grid.query_distance_pair(12.5).unwrap();
    assert!(!pairs.is_empty());
    assert!(pairs.iter().all(|p| !Rc::ptr_eq(p.first(), p.second())));
}

#[test]
fn unchecked_grid_skips_distance_check() {
    let mut grid = Grid::with_validation(
        FloatRect::from_ltrb(0.0, 0.0, 100.0, 100.0),
        10,
        10,
        BodyPosition,
        Validation::Unchecked,
    )
    .unwrap();
    let a = Rc::new(Body { position: [5.0, 5.0] });
    let cell = grid.add_body(Rc::clone(&a)).unwrap();
    grid.add_body(Rc::new(Body { position: [19.0, 5.0] })).unwrap();
    // Beyond the 3×3 block nothing is found, but the call itself succeeds.
    grid.add_body(Rc::new(Body { position: [35.0, 5.0] })).unwrap();
    assert_eq!(grid.query_distance(&a, cell, 40.0).unwrap().len(), 1);
}
