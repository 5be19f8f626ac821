// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `spatial_grid`. See `benches/grid.rs`.
