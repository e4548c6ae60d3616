// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot bounds, chart offsets, and grid orientation.

use kurbo::Rect;

/// Returns `true` if a plot area of `width` x `height` can hold any grid geometry.
///
/// Both values must be finite and strictly positive. `NaN`, infinities, zero, and negative
/// sizes all reject the whole grid.
pub fn is_renderable(width: f64, height: f64) -> bool {
    width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0
}

/// The plot rectangle a grid is laid over, in pixels with a top-left origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, extending right from `x`.
    pub width: f64,
    /// Height, extending down from `y`.
    pub height: f64,
}

impl BoundingBox {
    /// Creates a bounding box from an origin and a size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if the size passes [`is_renderable`] and the origin is not `NaN`.
    pub fn is_renderable(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan() && is_renderable(self.width, self.height)
    }

    /// Returns the box as a `kurbo::Rect`.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Returns `(start, extent)` along the axis that positions of `orientation` vary on.
    ///
    /// Horizontal lines are positioned along y, vertical lines along x.
    pub fn span(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Horizontal => (self.y, self.height),
            Orientation::Vertical => (self.x, self.width),
        }
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }
}

/// Offsets of the plot area inside the whole chart.
///
/// Grid geometry never translates by these values; they are handed to position generators,
/// and the built-in tick fallback uses the plot edges they describe.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartOffset {
    /// Distance from the chart's left edge to the plot.
    pub left: f64,
    /// Distance from the chart's top edge to the plot.
    pub top: f64,
    /// Distance from the plot to the chart's right edge.
    pub right: f64,
    /// Distance from the plot to the chart's bottom edge.
    pub bottom: f64,
    /// Plot width.
    pub width: f64,
    /// Plot height.
    pub height: f64,
}

impl ChartOffset {
    /// Returns the plot edges `(min, max)` along the axis that positions of `orientation`
    /// vary on.
    pub fn edges(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Horizontal => (self.top, self.top + self.height),
            Orientation::Vertical => (self.left, self.left + self.width),
        }
    }
}

/// Which family of gridlines (and stripes) a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Lines running left to right, placed at y positions (the y-axis).
    Horizontal,
    /// Lines running top to bottom, placed at x positions (the x-axis).
    Vertical,
}

impl Orientation {
    /// Returns the other orientation.
    pub fn other(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}
