// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bouncing bodies: a broad-phase loop driven by a spatial grid.
//!
//! Bodies drift inside a box and bounce off its walls. Every step, each body is
//! relocated in the grid and the pair query reports bodies close enough to touch.
//!
//! Run:
//! - `RUST_LOG=spatial_grid=debug cargo run -p spatial_grid_demos --example bouncing_bodies`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spatial_grid::{CellIndex, DoubleRect, Grid, PositionAccessor, Vector2d};
use tracing_subscriber::EnvFilter;

const WORLD: f64 = 200.0;
const CONTACT: f64 = 2.5;
const STEPS: usize = 20;

#[derive(Debug)]
struct Ball {
    center: Cell<Point>,
    velocity: Cell<Vec2>,
}

struct Center;

impl PositionAccessor<Ball> for Center {
    type Scalar = f64;

    fn position(&self, ball: &Ball) -> Vector2d {
        ball.center.get().into()
    }
}

impl Ball {
    fn step(&self) {
        let mut p = self.center.get() + self.velocity.get();
        let mut v = self.velocity.get();
        // Stay strictly inside the bound: its right and bottom edges are outside the last cell.
        let max = WORLD - 1e-6;
        if !(0.0..max).contains(&p.x) {
            v.x = -v.x;
            p.x = p.x.clamp(0.0, max);
        }
        if !(0.0..max).contains(&p.y) {
            v.y = -v.y;
            p.y = p.y.clamp(0.0, max);
        }
        self.center.set(p);
        self.velocity.set(v);
    }
}

fn main() -> Result<(), spatial_grid::GridError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bound = DoubleRect::from(kurbo::Rect::new(0.0, 0.0, WORLD, WORLD));
    let mut grid = Grid::new(bound, 20, 20, Center)?;
    let mut rng = StdRng::seed_from_u64(2025);

    let mut balls: Vec<(Rc<Ball>, CellIndex)> = Vec::new();
    for _ in 0..400 {
        let ball = Rc::new(Ball {
            center: Cell::new(Point::new(
                rng.gen_range(0.0..WORLD - 1.0),
                rng.gen_range(0.0..WORLD - 1.0),
            )),
            velocity: Cell::new(Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0))),
        });
        let cell = grid.add_body(Rc::clone(&ball))?;
        balls.push((ball, cell));
    }
    tracing::info!(bodies = grid.body_count(), "populated grid");

    for step in 0..STEPS {
        for (ball, cell) in &mut balls {
            ball.step();
            *cell = grid.update_body_cell(ball, *cell)?;
        }
        let contacts = grid.query_distance_pair(CONTACT)?;
        let (probe, probe_cell) = &balls[0];
        let near_probe = grid.query_distance(probe, *probe_cell, 10.0)?.len();
        tracing::info!(step, contacts = contacts.len(), near_probe, "stepped");
    }

    // Retire every other ball.
    let mut removed = 0;
    for (ball, cell) in balls.iter().step_by(2) {
        removed += grid.remove_body(ball, *cell);
    }
    tracing::info!(removed, remaining = grid.body_count(), "retired half the bodies");

    grid.clear_all_bodies();
    println!("{grid:?}");
    Ok(())
}
