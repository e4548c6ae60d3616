// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alternating fill bands between gridline positions.
//!
//! Stripes partition the plot along one axis at the resolved gridline positions. Band
//! lengths are rounded to whole pixels and laid end to end from the plot edge, so adjacent
//! stripes never overlap or leave hairline gaps, even when the positions carry floating
//! point noise.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use smallvec::SmallVec;

use crate::bounds::{BoundingBox, Orientation};
use crate::log;
use crate::z_order;

#[cfg(not(feature = "std"))]
#[allow(
    unused_imports,
    reason = "`f64::round` is inherent in `core` on newer toolchains"
)]
use crate::float::FloatExt;

/// A filled band along one axis, spanning the plot across the other.
#[derive(Clone, Debug, PartialEq)]
pub struct StripeDescriptor {
    /// Which family this stripe belongs to.
    pub orientation: Orientation,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Fill paint. Stripes are never stroked.
    pub fill: Brush,
    /// Fill opacity, as configured on the grid.
    pub fill_opacity: f64,
    /// Index among emitted stripes of this orientation.
    pub index: usize,
    /// Rendering order hint.
    pub z_index: i32,
}

impl StripeDescriptor {
    /// Returns the stripe as a `kurbo::Rect`.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// A run along one axis: `[start, start + length)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// Start coordinate.
    pub start: f64,
    /// Length in whole pixels, always positive.
    pub length: f64,
}

/// Splits the span `[start, start + extent]` into bands at `positions`.
///
/// Positions are taken in the order given, with the span edges added on either side.
/// Each band runs from a cursor (initially `start`) to the next boundary, rounded half
/// away from zero. Positive lengths are emitted and advance the cursor; zero or negative
/// lengths are dropped and leave the cursor in place. Positions outside the span are not
/// clamped.
pub fn bands(start: f64, extent: f64, positions: &[f64]) -> Vec<Band> {
    let mut boundaries: SmallVec<[f64; 16]> = SmallVec::with_capacity(positions.len() + 2);
    boundaries.push(start);
    boundaries.extend_from_slice(positions);
    boundaries.push(start + extent);
    boundaries.dedup();

    let mut out = Vec::with_capacity(boundaries.len());
    let mut cursor = start;
    for next in &boundaries[1..] {
        let length = (next - cursor).round();
        // NaN boundaries fall through here too.
        if length > 0.0 {
            out.push(Band {
                start: cursor,
                length,
            });
            cursor += length;
        }
    }
    out
}

/// Computes stripes of `orientation` over `bounds`.
///
/// Fills cycle over emitted stripes. An empty `fills` list yields no stripes.
pub fn compute_stripes(
    orientation: Orientation,
    positions: &[f64],
    bounds: &BoundingBox,
    fills: &[Brush],
    fill_opacity: f64,
) -> Vec<StripeDescriptor> {
    if fills.is_empty() {
        return Vec::new();
    }
    let (start, extent) = bounds.span(orientation);
    let stripes: Vec<StripeDescriptor> = bands(start, extent, positions)
        .into_iter()
        .enumerate()
        .map(|(index, band)| {
            let (x, y, width, height) = match orientation {
                Orientation::Horizontal => (bounds.x, band.start, bounds.width, band.length),
                Orientation::Vertical => (band.start, bounds.y, band.length, bounds.height),
            };
            StripeDescriptor {
                orientation,
                x,
                y,
                width,
                height,
                fill: fills[index % fills.len()].clone(),
                fill_opacity,
                index,
                z_index: z_order::GRID_STRIPES,
            }
        })
        .collect();
    log::trace!(?orientation, stripes = stripes.len(), "computed stripes");
    stripes
}
