// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for grid geometry.
//!
//! Every descriptor produced by this crate carries an explicit `z_index`. Painters should sort
//! by `(z_index, index)` for a deterministic order; the values leave room for series marks,
//! which conventionally sit at `0` and above.

/// Plot background fill.
pub const GRID_BACKGROUND: i32 = -100;
/// Stripe bands between gridlines.
pub const GRID_STRIPES: i32 = -75;
/// Gridlines, drawn over the stripes and behind series.
pub const GRID_LINES: i32 = -50;
