// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cartesian grid geometry for 2D chart plot areas.
//!
//! Given a plot rectangle and per-orientation configuration, this crate computes:
//! - **Gridlines**: horizontal and vertical rules at resolved pixel positions.
//! - **Stripes**: alternating fill bands between those positions, snapped to whole pixels.
//! - An optional plot **background**.
//!
//! Positions come from an explicit list, a caller generator, or the axis ticks, in that
//! order of precedence (see [`resolve_positions`]). Lines can be hidden, emitted as default
//! [`LineDescriptor`]s, or produced by caller code through a [`LineStrategy`].
//!
//! The crate does no painting. Descriptors carry final coordinates, `peniko` paint, and
//! a `z_index` (see the `GRID_*` constants) for a renderer to consume.
//!
//! ```
//! use cartesian_grid::{BoundingBox, GridSpec, Orientation};
//! use peniko::color::palette::css;
//!
//! let geometry = GridSpec::new(BoundingBox::new(0.0, 0.0, 500.0, 401.0))
//!     .with_points(Orientation::Horizontal, [10.0, 20.0, 30.0, 100.0, 400.0])
//!     .with_fill(Orientation::Horizontal, [css::RED, css::GREEN])
//!     .geometry();
//!
//! assert_eq!(geometry.horizontal_lines.len(), 5);
//! let heights: Vec<f64> = geometry.horizontal_stripes.iter().map(|s| s.height).collect();
//! assert_eq!(heights, [10.0, 10.0, 10.0, 70.0, 300.0, 1.0]);
//! ```
//!
//! Nothing here returns an error. Inputs that cannot produce geometry (a degenerate plot,
//! a generator returning non-finite values, an empty fill list) degrade to emitting
//! nothing for the affected element.

#![no_std]

extern crate alloc;

mod bounds;
#[cfg(not(feature = "std"))]
mod float;
mod grid;
mod line;
mod log;
mod resolve;
mod scale;
mod stripe;
mod style;
mod z_order;

pub use bounds::{BoundingBox, ChartOffset, Orientation, is_renderable};
pub use grid::{GridBackground, GridGeometry, GridSpec, OrientationSpec};
pub use line::{
    GridLine, GridLineProps, LineDescriptor, LineProjector, LineRenderer, LineStrategy,
    LineTemplate,
};
pub use resolve::{
    GeneratorContext, PositionGenerator, PositionSources, resolve_positions, validate_generated,
};
pub use scale::{AxisScale, GridAxis, ScaleBand, ScaleLinear};
pub use stripe::{Band, StripeDescriptor, bands, compute_stripes};
pub use style::{DEFAULT_GRID_STROKE, GridStyle, StrokeStyle};
pub use z_order::*;
