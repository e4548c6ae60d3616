// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid composition.
//!
//! [`GridSpec`] owns everything a Cartesian grid is configured with: the plot bounds, a
//! per-orientation description of where lines go and how they are drawn, and shared styling.
//! [`GridSpec::geometry`] resolves it into flat, renderer-agnostic descriptors:
//! - an optional background,
//! - horizontal and vertical gridlines,
//! - horizontal and vertical stripes.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;

use crate::bounds::{BoundingBox, ChartOffset, Orientation};
use crate::line::{GridLine, LineDescriptor, LineProjector, LineStrategy};
use crate::log;
use crate::resolve::{GeneratorContext, PositionGenerator, PositionSources, resolve_positions};
use crate::scale::GridAxis;
use crate::stripe::{StripeDescriptor, compute_stripes};
use crate::style::GridStyle;
use crate::z_order;

/// Configuration for one family of gridlines.
pub struct OrientationSpec<R> {
    /// How lines are drawn. [`LineStrategy::Hidden`] also suppresses stripes.
    pub line: LineStrategy<R>,
    /// Explicit pixel positions.
    pub points: Option<Vec<f64>>,
    /// Position generator, used when `points` is `None`.
    pub generator: Option<PositionGenerator>,
    /// Domain values the grid is kept in sync with.
    pub values: Option<Vec<f64>>,
    /// Stripe fills, cycled over stripes. Empty means no stripes.
    pub fill: Vec<Brush>,
}

impl<R> Default for OrientationSpec<R> {
    fn default() -> Self {
        Self {
            line: LineStrategy::Default,
            points: None,
            generator: None,
            values: None,
            fill: Vec::new(),
        }
    }
}

impl<R> Clone for OrientationSpec<R> {
    fn clone(&self) -> Self {
        Self {
            line: self.line.clone(),
            points: self.points.clone(),
            generator: self.generator.clone(),
            values: self.values.clone(),
            fill: self.fill.clone(),
        }
    }
}

impl<R> core::fmt::Debug for OrientationSpec<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrientationSpec")
            .field("line", &self.line)
            .field("points", &self.points)
            .field("generator", &self.generator.is_some())
            .field("values", &self.values)
            .field("fill", &self.fill)
            .finish()
    }
}

/// A Cartesian grid description.
///
/// `R` is the renderable produced by custom line strategies. Grids that only use default
/// lines can ignore it: [`GridSpec::new`] fixes it to [`LineDescriptor`].
#[derive(Clone, Debug)]
pub struct GridSpec<R = LineDescriptor> {
    /// The plot rectangle.
    pub bounds: BoundingBox,
    /// Shared styling.
    pub style: GridStyle,
    /// Working width of the whole chart, handed to generators. Defaults to the plot width.
    pub chart_width: Option<f64>,
    /// Working height of the whole chart, handed to generators. Defaults to the plot height.
    pub chart_height: Option<f64>,
    /// Plot offset inside the chart.
    pub offset: Option<ChartOffset>,
    /// Caller `sync_with_ticks` flag, forwarded to generators.
    pub sync_with_ticks: Option<bool>,
    /// The x-axis, which places vertical lines.
    pub x_axis: Option<GridAxis>,
    /// The y-axis, which places horizontal lines.
    pub y_axis: Option<GridAxis>,
    /// Horizontal lines and stripes.
    pub horizontal: OrientationSpec<R>,
    /// Vertical lines and stripes.
    pub vertical: OrientationSpec<R>,
}

impl GridSpec {
    /// Creates a grid over `bounds` that emits default lines.
    pub fn new(bounds: impl Into<BoundingBox>) -> Self {
        Self::for_output(bounds)
    }
}

impl<R> GridSpec<R> {
    /// Creates a grid over `bounds` whose custom line strategies produce `R`.
    pub fn for_output(bounds: impl Into<BoundingBox>) -> Self {
        Self {
            bounds: bounds.into(),
            style: GridStyle::default(),
            chart_width: None,
            chart_height: None,
            offset: None,
            sync_with_ticks: None,
            x_axis: None,
            y_axis: None,
            horizontal: OrientationSpec::default(),
            vertical: OrientationSpec::default(),
        }
    }

    /// Sets the shared styling.
    pub fn with_style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the working chart size handed to generators.
    pub fn with_chart_size(mut self, width: f64, height: f64) -> Self {
        self.chart_width = Some(width);
        self.chart_height = Some(height);
        self
    }

    /// Sets the plot offset inside the chart.
    pub fn with_offset(mut self, offset: ChartOffset) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the `sync_with_ticks` flag handed to generators.
    pub fn with_sync_with_ticks(mut self, sync: bool) -> Self {
        self.sync_with_ticks = Some(sync);
        self
    }

    /// Sets the x-axis.
    pub fn with_x_axis(mut self, axis: GridAxis) -> Self {
        self.x_axis = Some(axis);
        self
    }

    /// Sets the y-axis.
    pub fn with_y_axis(mut self, axis: GridAxis) -> Self {
        self.y_axis = Some(axis);
        self
    }

    /// Sets the line strategy for one orientation.
    pub fn with_lines(mut self, orientation: Orientation, line: LineStrategy<R>) -> Self {
        self.orientation_mut(orientation).line = line;
        self
    }

    /// Hides the lines (and stripes) of one orientation.
    pub fn without_lines(self, orientation: Orientation) -> Self {
        self.with_lines(orientation, LineStrategy::Hidden)
    }

    /// Sets explicit pixel positions for one orientation.
    pub fn with_points(mut self, orientation: Orientation, points: impl Into<Vec<f64>>) -> Self {
        self.orientation_mut(orientation).points = Some(points.into());
        self
    }

    /// Sets the position generator for one orientation.
    pub fn with_generator(
        mut self,
        orientation: Orientation,
        generator: impl Fn(&GeneratorContext, Option<bool>) -> Option<Vec<f64>> + 'static,
    ) -> Self {
        self.orientation_mut(orientation).generator = Some(Arc::new(generator));
        self
    }

    /// Sets the domain values one orientation is kept in sync with.
    pub fn with_values(mut self, orientation: Orientation, values: impl Into<Vec<f64>>) -> Self {
        self.orientation_mut(orientation).values = Some(values.into());
        self
    }

    /// Sets the stripe fills for one orientation.
    pub fn with_fill<B: Into<Brush>>(
        mut self,
        orientation: Orientation,
        fill: impl IntoIterator<Item = B>,
    ) -> Self {
        self.orientation_mut(orientation).fill = fill.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the configuration of one orientation.
    pub fn orientation(&self, orientation: Orientation) -> &OrientationSpec<R> {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn orientation_mut(&mut self, orientation: Orientation) -> &mut OrientationSpec<R> {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    fn axis(&self, orientation: Orientation) -> Option<&GridAxis> {
        match orientation {
            Orientation::Horizontal => self.y_axis.as_ref(),
            Orientation::Vertical => self.x_axis.as_ref(),
        }
    }

    /// Returns the position sources for one orientation.
    pub fn sources(&self, orientation: Orientation) -> PositionSources<'_> {
        let spec = self.orientation(orientation);
        PositionSources {
            points: spec.points.as_deref(),
            generator: spec.generator.as_ref(),
            values: spec.values.as_deref(),
            axis: self.axis(orientation),
            sync_with_ticks: self.sync_with_ticks,
            chart_width: self.chart_width.unwrap_or(self.bounds.width),
            chart_height: self.chart_height.unwrap_or(self.bounds.height),
            offset: self.offset,
        }
    }

    /// Resolves the geometry of the grid.
    ///
    /// Returns empty geometry, without consulting any position source, when the bounds
    /// are not renderable. Otherwise each orientation's positions are resolved exactly once,
    /// horizontal first, and shared by its lines and stripes.
    pub fn geometry(&self) -> GridGeometry<R> {
        if !self.bounds.is_renderable() {
            log::debug!(
                x = self.bounds.x,
                y = self.bounds.y,
                width = self.bounds.width,
                height = self.bounds.height,
                "grid bounds are not renderable; skipping"
            );
            return GridGeometry::default();
        }

        let horizontal = resolve_positions(
            Orientation::Horizontal,
            &self.sources(Orientation::Horizontal),
        );
        let vertical = resolve_positions(Orientation::Vertical, &self.sources(Orientation::Vertical));

        let projector = LineProjector {
            bounds: self.bounds,
            style: &self.style,
            horizontal: &self.horizontal.line,
            vertical: &self.vertical.line,
            horizontal_fill: &self.horizontal.fill,
            vertical_fill: &self.vertical.fill,
            horizontal_points: self.horizontal.points.as_deref(),
            vertical_points: self.vertical.points.as_deref(),
        };

        let geometry = GridGeometry {
            background: self.background(),
            horizontal_stripes: self.stripes(Orientation::Horizontal, &horizontal),
            vertical_stripes: self.stripes(Orientation::Vertical, &vertical),
            horizontal_lines: projector.project(Orientation::Horizontal, &horizontal),
            vertical_lines: projector.project(Orientation::Vertical, &vertical),
        };
        log::trace!(
            horizontal_lines = geometry.horizontal_lines.len(),
            vertical_lines = geometry.vertical_lines.len(),
            horizontal_stripes = geometry.horizontal_stripes.len(),
            vertical_stripes = geometry.vertical_stripes.len(),
            "resolved grid geometry"
        );
        geometry
    }

    fn background(&self) -> Option<GridBackground> {
        let fill = self.style.background.clone()?;
        Some(GridBackground {
            x: self.bounds.x,
            y: self.bounds.y,
            width: self.bounds.width,
            height: self.bounds.height,
            fill,
            fill_opacity: self.style.fill_opacity,
            z_index: z_order::GRID_BACKGROUND,
        })
    }

    fn stripes(&self, orientation: Orientation, positions: &[f64]) -> Vec<StripeDescriptor> {
        let spec = self.orientation(orientation);
        if !spec.line.is_enabled() {
            return Vec::new();
        }
        compute_stripes(
            orientation,
            positions,
            &self.bounds,
            &spec.fill,
            self.style.fill_opacity,
        )
    }
}

/// A fill covering the whole plot area.
#[derive(Clone, Debug, PartialEq)]
pub struct GridBackground {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Fill opacity.
    pub fill_opacity: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl GridBackground {
    /// Returns the background as a `kurbo::Rect`.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// The resolved geometry of a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridGeometry<R = LineDescriptor> {
    /// Plot background, if one is configured.
    pub background: Option<GridBackground>,
    /// Horizontal lines, in position order.
    pub horizontal_lines: Vec<GridLine<R>>,
    /// Vertical lines, in position order.
    pub vertical_lines: Vec<GridLine<R>>,
    /// Horizontal stripes, top to bottom in emission order.
    pub horizontal_stripes: Vec<StripeDescriptor>,
    /// Vertical stripes, left to right in emission order.
    pub vertical_stripes: Vec<StripeDescriptor>,
}

impl<R> Default for GridGeometry<R> {
    fn default() -> Self {
        Self {
            background: None,
            horizontal_lines: Vec::new(),
            vertical_lines: Vec::new(),
            horizontal_stripes: Vec::new(),
            vertical_stripes: Vec::new(),
        }
    }
}

impl<R> GridGeometry<R> {
    /// Returns the lines of one orientation.
    pub fn lines(&self, orientation: Orientation) -> &[GridLine<R>] {
        match orientation {
            Orientation::Horizontal => &self.horizontal_lines,
            Orientation::Vertical => &self.vertical_lines,
        }
    }

    /// Returns the stripes of one orientation.
    pub fn stripes(&self, orientation: Orientation) -> &[StripeDescriptor] {
        match orientation {
            Orientation::Horizontal => &self.horizontal_stripes,
            Orientation::Vertical => &self.vertical_stripes,
        }
    }

    /// Returns the total number of emitted elements.
    pub fn len(&self) -> usize {
        usize::from(self.background.is_some())
            + self.horizontal_lines.len()
            + self.vertical_lines.len()
            + self.horizontal_stripes.len()
            + self.vertical_stripes.len()
    }

    /// Returns `true` if nothing is emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
