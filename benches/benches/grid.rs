// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hot-path benchmarks: relocation and both proximity queries.

#![allow(missing_docs, reason = "criterion macros generate undocumented items")]

use std::cell::Cell;
use std::hint::black_box;
use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spatial_grid::{CellIndex, FloatRect, Grid, Validation, Vector2f};

struct Body {
    position: Cell<Vector2f>,
}

type BodyGrid = Grid<Body, fn(&Body) -> Vector2f>;

fn body_position(body: &Body) -> Vector2f {
    body.position.get()
}

fn populated(n: usize, validation: Validation) -> (BodyGrid, Vec<(Rc<Body>, CellIndex)>) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = Grid::with_validation(
        FloatRect::from_ltrb(0.0, 0.0, 1000.0, 1000.0),
        50,
        50,
        body_position as fn(&Body) -> Vector2f,
        validation,
    )
    .unwrap();
    let bodies = (0..n)
        .map(|_| {
            let body = Rc::new(Body {
                position: Cell::new(Vector2f::new(
                    rng.gen_range(0.0..999.0),
                    rng.gen_range(0.0..999.0),
                )),
            });
            let cell = grid.add_body(Rc::clone(&body)).unwrap();
            (body, cell)
        })
        .collect();
    (grid, bodies)
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    for n in [1_000_usize, 10_000] {
        for validation in [Validation::Checked, Validation::Unchecked] {
            let (grid, bodies) = populated(n, validation);
            let label = format!("{n}/{validation:?}");
            group.bench_with_input(BenchmarkId::new("distance", &label), &bodies, |b, bodies| {
                b.iter(|| {
                    let mut hits = 0;
                    for (body, cell) in bodies {
                        grid.visit_distance(body, *cell, 10.0, |_| hits += 1).unwrap();
                    }
                    black_box(hits)
                });
            });
            group.bench_function(BenchmarkId::new("distance_pair", &label), |b| {
                b.iter(|| black_box(grid.query_distance_pair(10.0).unwrap().len()));
            });
        }
    }
    group.finish();
}

fn bench_relocation(c: &mut Criterion) {
    let (mut grid, mut bodies) = populated(10_000, Validation::Unchecked);
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("update_body_cell/10000", |b| {
        b.iter(|| {
            for (body, cell) in &mut bodies {
                let p = body.position.get();
                let step = Vector2f::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
                let next = p + step;
                body.position.set(Vector2f::new(
                    next.x.clamp(0.0, 999.0),
                    next.y.clamp(0.0, 999.0),
                ));
                *cell = grid.update_body_cell(body, *cell).unwrap();
            }
        });
    });
}

criterion_group!(benches, bench_queries, bench_relocation);
criterion_main!(benches);
