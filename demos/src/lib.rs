// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for `spatial_grid`. See the `examples/` directory.
