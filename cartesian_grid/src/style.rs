// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid styling defaults.

use peniko::{Brush, Color};
use smallvec::SmallVec;

/// Default gridline stroke (`#ccc`).
pub const DEFAULT_GRID_STROKE: Color = Color::from_rgb8(0xcc, 0xcc, 0xcc);

/// A paint + width pair for gridlines, with an optional dash pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Alternating dash/gap lengths. Empty means a solid line.
    pub dash: SmallVec<[f64; 4]>,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash: SmallVec::new(),
        }
    }

    /// Sets the dash pattern.
    pub fn with_dash(mut self, dash: &[f64]) -> Self {
        self.dash = SmallVec::from_slice(dash);
        self
    }

    /// Returns `true` if the stroke has a dash pattern.
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(DEFAULT_GRID_STROKE, 1.0)
    }
}

/// Styling shared by every element of a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke for default gridlines.
    pub stroke: StrokeStyle,
    /// Opacity applied to stripes and the background, as a fraction.
    ///
    /// Passed through to descriptors unchanged.
    pub fill_opacity: f64,
    /// Optional fill for the whole plot area, painted under stripes and lines.
    pub background: Option<Brush>,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::default(),
            fill_opacity: 1.0,
            background: None,
        }
    }
}

impl GridStyle {
    /// Sets the gridline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the stripe and background opacity.
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = fill_opacity;
        self
    }

    /// Fills the plot area behind the grid.
    pub fn with_background(mut self, background: impl Into<Brush>) -> Self {
        self.background = Some(background.into());
        self
    }
}
