// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis scales as seen by the grid.
//!
//! The grid does not own axes. It only needs a way to turn tick values into pixel
//! coordinates, which is what [`AxisScale`] captures. Two small scales are provided for
//! convenience; any `Fn(f64) -> f64` is also a scale.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
#[allow(
    unused_imports,
    reason = "`f64::round` is inherent in `core` on newer toolchains"
)]
use crate::float::FloatExt;

/// A domain-to-pixel mapping consumed by the grid's tick fallback.
pub trait AxisScale {
    /// Maps a domain value to a pixel coordinate.
    fn map(&self, value: f64) -> f64;

    /// Width of a band in pixels, or `0` for continuous scales.
    fn bandwidth(&self) -> f64 {
        0.0
    }

    /// Pixel coordinate of the gridline for `value`: the center of its band.
    fn grid_coordinate(&self, value: f64) -> f64 {
        self.map(value) + 0.5 * self.bandwidth()
    }
}

impl<F: Fn(f64) -> f64> AxisScale for F {
    fn map(&self, value: f64) -> f64 {
        self(value)
    }
}

/// An axis as handed to the grid: its scale plus optional pre-computed ticks.
#[derive(Clone)]
pub struct GridAxis {
    /// Domain to pixel mapping.
    pub scale: Arc<dyn AxisScale>,
    /// Tick values in domain space, if the axis has resolved them.
    pub ticks: Option<Vec<f64>>,
}

impl core::fmt::Debug for GridAxis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridAxis")
            .field("scale", &"<dyn AxisScale>")
            .field("ticks", &self.ticks)
            .finish()
    }
}

impl GridAxis {
    /// Creates an axis without ticks.
    pub fn new(scale: impl AxisScale + 'static) -> Self {
        Self {
            scale: Arc::new(scale),
            ticks: None,
        }
    }

    /// Sets the tick values.
    pub fn with_ticks(mut self, ticks: impl Into<Vec<f64>>) -> Self {
        self.ticks = Some(ticks.into());
        self
    }

    /// Returns a copy of this axis with its ticks replaced (or cleared).
    pub fn with_ticks_replaced(&self, ticks: Option<Vec<f64>>) -> Self {
        Self {
            scale: Arc::clone(&self.scale),
            ticks,
        }
    }

    /// Maps every tick to its gridline coordinate, dropping non-finite results.
    pub fn tick_coordinates(&self) -> Vec<f64> {
        let Some(ticks) = &self.ticks else {
            return Vec::new();
        };
        ticks
            .iter()
            .map(|v| self.scale.grid_coordinate(*v))
            .filter(|c| c.is_finite())
            .collect()
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }
}

impl AxisScale for ScaleLinear {
    fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }
}

/// A categorical scale that splits a pixel range into `count` equal bands.
///
/// Domain values are band indices. Gridlines for a band sit on its center.
#[derive(Clone, Copy, Debug)]
pub struct ScaleBand {
    origin: f64,
    extent: f64,
    count: usize,
    padding: f64,
}

impl ScaleBand {
    /// Creates `count` touching bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            origin: range.0.min(range.1),
            extent: (range.1 - range.0).abs(),
            count,
            padding: 0.0,
        }
    }

    /// Sets the gap between bands, and before the first and after the last band, as a
    /// fraction of the band step in `[0, 1)`.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.clamp(0.0, 0.99);
        self
    }

    /// Distance between the starts of consecutive bands.
    fn step(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.extent / (self.count as f64 + self.padding)
    }
}

impl AxisScale for ScaleBand {
    /// Returns the start of the band, or `NaN` for values that are not a band index, so
    /// the grid skips them.
    fn map(&self, value: f64) -> f64 {
        if value.round() != value || value < 0.0 || value >= self.count as f64 {
            return f64::NAN;
        }
        let step = self.step();
        self.origin + step * (self.padding + value)
    }

    fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }
}
