// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridline generation.
//!
//! A gridline is a rule spanning the plot along one axis. Each orientation picks a
//! [`LineStrategy`]: hide the lines, emit default [`LineDescriptor`]s, or hand a fully
//! populated [`GridLineProps`] record to caller code that builds its own renderable.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{BezPath, Line, Point};
use peniko::Brush;

use crate::bounds::{BoundingBox, Orientation};
use crate::style::{GridStyle, StrokeStyle};
use crate::z_order;

/// A stroked gridline in scene coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct LineDescriptor {
    /// Which family this line belongs to.
    pub orientation: Orientation,
    /// The resolved position: y for horizontal lines, x for vertical ones.
    pub position: f64,
    /// Start point x.
    pub x1: f64,
    /// Start point y.
    pub y1: f64,
    /// End point x.
    pub x2: f64,
    /// End point y.
    pub y2: f64,
    /// Index of the position this line was generated from.
    pub index: usize,
    /// Stroke paint, width, and dash pattern.
    pub stroke: StrokeStyle,
    /// Fill paint. Gridlines are unfilled by default.
    pub fill: Option<Brush>,
    /// Rendering order hint.
    pub z_index: i32,
}

impl LineDescriptor {
    /// Creates a horizontal line at `y` from `x1` to `x2`.
    pub fn horizontal(y: f64, x1: f64, x2: f64) -> Self {
        Self::new(Orientation::Horizontal, y, x1, y, x2, y)
    }

    /// Creates a vertical line at `x` from `y1` to `y2`.
    pub fn vertical(x: f64, y1: f64, y2: f64) -> Self {
        Self::new(Orientation::Vertical, x, x, y1, x, y2)
    }

    /// Creates the default line for `position`, spanning `bounds` across the opposite axis.
    pub fn spanning(orientation: Orientation, position: f64, bounds: &BoundingBox) -> Self {
        match orientation {
            Orientation::Horizontal => {
                Self::horizontal(position, bounds.x, bounds.x + bounds.width)
            }
            Orientation::Vertical => Self::vertical(position, bounds.y, bounds.y + bounds.height),
        }
    }

    fn new(orientation: Orientation, position: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            orientation,
            position,
            x1,
            y1,
            x2,
            y2,
            index: 0,
            stroke: StrokeStyle::default(),
            fill: None,
            z_index: z_order::GRID_LINES,
        }
    }

    /// Sets the position index.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns the line segment.
    pub fn line(&self) -> Line {
        Line::new(Point::new(self.x1, self.y1), Point::new(self.x2, self.y2))
    }

    /// Returns the line as a two-point path.
    pub fn path(&self) -> BezPath {
        let mut p = BezPath::new();
        p.move_to((self.x1, self.y1));
        p.line_to((self.x2, self.y2));
        p
    }
}

/// Caller code that turns a populated [`GridLineProps`] into its own renderable.
pub type LineRenderer<R> = Arc<dyn Fn(&GridLineProps<'_, R>) -> R>;

/// A pre-built renderable that gridline props are merged onto.
pub trait LineTemplate<R> {
    /// Returns a copy of the template with `props` applied.
    fn merge(&self, props: &GridLineProps<'_, R>) -> R;
}

/// Line props override the template's position and paint; its stroke width, dash
/// pattern, and z-index are kept.
impl LineTemplate<Self> for LineDescriptor {
    fn merge(&self, props: &GridLineProps<'_, Self>) -> Self {
        let position = match props.orientation {
            Orientation::Horizontal => props.y1,
            Orientation::Vertical => props.x1,
        };
        Self {
            orientation: props.orientation,
            position,
            x1: props.x1,
            y1: props.y1,
            x2: props.x2,
            y2: props.y2,
            index: props.index,
            stroke: StrokeStyle {
                brush: props.stroke.clone(),
                ..self.stroke.clone()
            },
            fill: props.fill.clone(),
            z_index: self.z_index,
        }
    }
}

/// How the lines of one orientation are drawn.
pub enum LineStrategy<R> {
    /// No lines (and no stripes) for this orientation.
    Hidden,
    /// Default [`LineDescriptor`]s.
    Default,
    /// Call the renderer once per line with a keyed props record.
    Render(LineRenderer<R>),
    /// Merge each line's props onto a template. Props carry no key in this variant.
    Template(Arc<dyn LineTemplate<R>>),
}

impl<R> LineStrategy<R> {
    /// Wraps a renderer callback.
    pub fn render(f: impl Fn(&GridLineProps<'_, R>) -> R + 'static) -> Self {
        Self::Render(Arc::new(f))
    }

    /// Wraps a template.
    pub fn template(template: impl LineTemplate<R> + 'static) -> Self {
        Self::Template(Arc::new(template))
    }

    /// Returns `false` only for [`LineStrategy::Hidden`].
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl<R> Default for LineStrategy<R> {
    fn default() -> Self {
        Self::Default
    }
}

impl<R> Clone for LineStrategy<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Hidden => Self::Hidden,
            Self::Default => Self::Default,
            Self::Render(f) => Self::Render(Arc::clone(f)),
            Self::Template(t) => Self::Template(Arc::clone(t)),
        }
    }
}

impl<R> core::fmt::Debug for LineStrategy<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Hidden => f.write_str("Hidden"),
            Self::Default => f.write_str("Default"),
            Self::Render(_) => f.write_str("Render(..)"),
            Self::Template(_) => f.write_str("Template(..)"),
        }
    }
}

/// Everything custom line code is given for a single gridline.
#[derive(Debug)]
pub struct GridLineProps<'a, R> {
    /// Which family the line belongs to.
    pub orientation: Orientation,
    /// Default stroke paint.
    pub stroke: Brush,
    /// Default fill (none).
    pub fill: Option<Brush>,
    /// Grid width.
    pub width: f64,
    /// Grid height.
    pub height: f64,
    /// Grid origin x.
    pub x: f64,
    /// Grid origin y.
    pub y: f64,
    /// Whether the other orientation draws lines.
    pub other_enabled: bool,
    /// Horizontal stripe fills, as configured.
    pub horizontal_fill: &'a [Brush],
    /// Vertical stripe fills, as configured.
    pub vertical_fill: &'a [Brush],
    /// Explicit horizontal positions, as configured.
    pub horizontal_points: Option<&'a [f64]>,
    /// Explicit vertical positions, as configured.
    pub vertical_points: Option<&'a [f64]>,
    /// The strategy drawing this line.
    pub line: &'a LineStrategy<R>,
    /// Stable per-line key (`line-{index}`). `None` for templates.
    pub key: Option<String>,
    /// Start point x.
    pub x1: f64,
    /// Start point y.
    pub y1: f64,
    /// End point x.
    pub x2: f64,
    /// End point y.
    pub y2: f64,
    /// Index of the position this line was generated from.
    pub index: usize,
}

/// A generated gridline: either a default descriptor or a caller renderable.
#[derive(Clone, Debug, PartialEq)]
pub enum GridLine<R> {
    /// A default line.
    Line(LineDescriptor),
    /// Output of a [`LineStrategy::Render`] or [`LineStrategy::Template`] strategy.
    Custom(R),
}

impl<R> GridLine<R> {
    /// Returns the default line, if this is one.
    pub fn as_line(&self) -> Option<&LineDescriptor> {
        match self {
            Self::Line(line) => Some(line),
            Self::Custom(_) => None,
        }
    }

    /// Returns the custom renderable, if this is one.
    pub fn as_custom(&self) -> Option<&R> {
        match self {
            Self::Line(_) => None,
            Self::Custom(r) => Some(r),
        }
    }
}

/// Shared inputs for projecting positions into gridlines.
#[derive(Debug)]
pub struct LineProjector<'a, R> {
    /// Plot bounds the lines span.
    pub bounds: BoundingBox,
    /// Grid styling.
    pub style: &'a GridStyle,
    /// Strategy for horizontal lines.
    pub horizontal: &'a LineStrategy<R>,
    /// Strategy for vertical lines.
    pub vertical: &'a LineStrategy<R>,
    /// Horizontal stripe fills, forwarded to props.
    pub horizontal_fill: &'a [Brush],
    /// Vertical stripe fills, forwarded to props.
    pub vertical_fill: &'a [Brush],
    /// Explicit horizontal positions, forwarded to props.
    pub horizontal_points: Option<&'a [f64]>,
    /// Explicit vertical positions, forwarded to props.
    pub vertical_points: Option<&'a [f64]>,
}

impl<'a, R> LineProjector<'a, R> {
    fn strategy(&self, orientation: Orientation) -> &'a LineStrategy<R> {
        match orientation {
            Orientation::Horizontal => self.horizontal,
            Orientation::Vertical => self.vertical,
        }
    }

    /// Generates one line per position, in position order.
    pub fn project(&self, orientation: Orientation, positions: &[f64]) -> Vec<GridLine<R>> {
        let strategy = self.strategy(orientation);
        if !strategy.is_enabled() {
            return Vec::new();
        }
        positions
            .iter()
            .enumerate()
            .map(|(index, position)| {
                let line = LineDescriptor::spanning(orientation, *position, &self.bounds)
                    .with_index(index);
                match strategy {
                    LineStrategy::Hidden | LineStrategy::Default => {
                        GridLine::Line(line.with_stroke(self.style.stroke.clone()))
                    }
                    LineStrategy::Render(f) => {
                        let key = Some(format!("line-{index}"));
                        GridLine::Custom(f(&self.props(strategy, &line, key)))
                    }
                    LineStrategy::Template(t) => {
                        GridLine::Custom(t.merge(&self.props(strategy, &line, None)))
                    }
                }
            })
            .collect()
    }

    fn props(
        &self,
        strategy: &'a LineStrategy<R>,
        line: &LineDescriptor,
        key: Option<String>,
    ) -> GridLineProps<'a, R> {
        GridLineProps {
            orientation: line.orientation,
            stroke: self.style.stroke.brush.clone(),
            fill: None,
            width: self.bounds.width,
            height: self.bounds.height,
            x: self.bounds.x,
            y: self.bounds.y,
            other_enabled: self.strategy(line.orientation.other()).is_enabled(),
            horizontal_fill: self.horizontal_fill,
            vertical_fill: self.vertical_fill,
            horizontal_points: self.horizontal_points,
            vertical_points: self.vertical_points,
            line: strategy,
            key,
            x1: line.x1,
            y1: line.y1,
            x2: line.x2,
            y2: line.y2,
            index: line.index,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use core::cell::RefCell;
    use std::rc::Rc;

    use peniko::color::palette::css;

    use super::*;
    use crate::style::DEFAULT_GRID_STROKE;

    const BOUNDS: BoundingBox = BoundingBox::new(0.0, 0.0, 500.0, 500.0);

    fn projector<'a, R>(
        style: &'a GridStyle,
        horizontal: &'a LineStrategy<R>,
        vertical: &'a LineStrategy<R>,
    ) -> LineProjector<'a, R> {
        LineProjector {
            bounds: BOUNDS,
            style,
            horizontal,
            vertical,
            horizontal_fill: &[],
            vertical_fill: &[],
            horizontal_points: Some(&[10.0, 20.0, 30.0, 100.0, 400.0]),
            vertical_points: Some(&[100.0, 200.0, 300.0, 400.0]),
        }
    }

    #[test]
    fn default_lines_span_the_opposite_axis() {
        let style = GridStyle::default();
        let enabled = LineStrategy::<LineDescriptor>::Default;
        let p = projector(&style, &enabled, &enabled);

        let h = p.project(Orientation::Horizontal, &[1.0, 2.0]);
        let lines: Vec<_> = h.iter().filter_map(GridLine::as_line).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            (lines[1].x1, lines[1].y1, lines[1].x2, lines[1].y2),
            (0.0, 2.0, 500.0, 2.0)
        );
        assert_eq!(lines[1].index, 1);
        assert_eq!(lines[1].stroke.brush, Brush::Solid(DEFAULT_GRID_STROKE));
        assert_eq!(lines[1].fill, None);

        let v = p.project(Orientation::Vertical, &[5.0]);
        let line = v[0].as_line().expect("default line");
        assert_eq!(
            (line.x1, line.y1, line.x2, line.y2),
            (5.0, 0.0, 5.0, 500.0)
        );
        assert_eq!(line.position, 5.0);
    }

    #[test]
    fn lines_follow_position_order_without_sorting() {
        let style = GridStyle::default();
        let enabled = LineStrategy::<LineDescriptor>::Default;
        let p = projector(&style, &enabled, &enabled);
        let out = p.project(Orientation::Horizontal, &[30.0, 10.0, 30.0]);
        let ys: Vec<f64> = out.iter().filter_map(GridLine::as_line).map(|l| l.y1).collect();
        assert_eq!(ys, vec![30.0, 10.0, 30.0]);
    }

    #[test]
    fn hidden_strategy_emits_nothing() {
        let style = GridStyle::default();
        let hidden = LineStrategy::<LineDescriptor>::Hidden;
        let enabled = LineStrategy::Default;
        let p = projector(&style, &hidden, &enabled);
        assert!(p.project(Orientation::Horizontal, &[1.0, 2.0, 3.0]).is_empty());
        assert_eq!(p.project(Orientation::Vertical, &[1.0, 2.0, 3.0]).len(), 3);
    }

    #[test]
    fn render_callback_gets_keyed_props() {
        #[derive(Debug, PartialEq)]
        struct Seen {
            key: Option<String>,
            index: usize,
            coords: (f64, f64, f64, f64),
            other_enabled: bool,
            size: (f64, f64),
            horizontal_points: Option<Vec<f64>>,
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let render = LineStrategy::render(move |props: &GridLineProps<'_, u32>| {
            assert!(matches!(props.line, LineStrategy::Render(_)));
            assert_eq!(props.stroke, Brush::Solid(DEFAULT_GRID_STROKE));
            assert_eq!(props.fill, None);
            sink.borrow_mut().push(Seen {
                key: props.key.clone(),
                index: props.index,
                coords: (props.x1, props.y1, props.x2, props.y2),
                other_enabled: props.other_enabled,
                size: (props.width, props.height),
                horizontal_points: props.horizontal_points.map(<[f64]>::to_vec),
            });
            7
        });
        let style = GridStyle::default();
        let enabled = LineStrategy::Default;
        let p = projector(&style, &render, &enabled);

        let out = p.project(Orientation::Horizontal, &[1.0, 2.0]);
        assert_eq!(out, vec![GridLine::Custom(7), GridLine::Custom(7)]);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2, "one call per position");
        assert_eq!(
            seen[1],
            Seen {
                key: Some("line-1".into()),
                index: 1,
                coords: (0.0, 2.0, 500.0, 2.0),
                other_enabled: true,
                size: (500.0, 500.0),
                horizontal_points: Some(vec![10.0, 20.0, 30.0, 100.0, 400.0]),
            }
        );
    }

    #[test]
    fn render_callback_sees_other_orientation_hidden() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let render = LineStrategy::render(move |props: &GridLineProps<'_, ()>| {
            sink.borrow_mut().push(props.other_enabled);
        });
        let style = GridStyle::default();
        let hidden = LineStrategy::Hidden;
        let p = projector(&style, &hidden, &render);
        p.project(Orientation::Vertical, &[1.0]);
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn template_merges_props_without_key() {
        #[derive(Debug)]
        struct KeyProbe(Rc<RefCell<Vec<Option<String>>>>);

        impl LineTemplate<Option<String>> for KeyProbe {
            fn merge(&self, props: &GridLineProps<'_, Option<String>>) -> Option<String> {
                self.0.borrow_mut().push(props.key.clone());
                props.key.clone()
            }
        }

        let keys = Rc::new(RefCell::new(Vec::new()));
        let template = LineStrategy::template(KeyProbe(keys.clone()));
        let style = GridStyle::default();
        let enabled = LineStrategy::Default;
        let p = projector(&style, &enabled, &template);
        let out = p.project(Orientation::Vertical, &[1.0, 2.0, 3.0]);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|l| l.as_custom() == Some(&None)));
        assert_eq!(*keys.borrow(), vec![None, None, None]);
    }

    #[test]
    fn descriptor_template_keeps_its_width_and_takes_props_paint() {
        let template = LineDescriptor::horizontal(0.0, 0.0, 0.0)
            .with_stroke(StrokeStyle::solid(css::RED, 3.0).with_dash(&[4.0, 2.0]))
            .with_z_index(5);
        let strategy = LineStrategy::template(template);
        let style = GridStyle::default();
        let enabled = LineStrategy::Default;
        let p = projector(&style, &strategy, &enabled);
        let out = p.project(Orientation::Horizontal, &[42.0]);
        let GridLine::Custom(line) = &out[0] else {
            panic!("expected a merged template");
        };
        assert_eq!((line.x1, line.y1, line.x2, line.y2), (0.0, 42.0, 500.0, 42.0));
        assert_eq!(line.position, 42.0);
        assert_eq!(line.stroke.brush, Brush::Solid(DEFAULT_GRID_STROKE));
        assert_eq!(line.stroke.stroke_width, 3.0);
        assert!(line.stroke.is_dashed());
        assert_eq!(line.z_index, 5);
    }

    #[test]
    fn path_is_a_two_point_segment() {
        let line = LineDescriptor::vertical(10.0, 0.0, 50.0);
        assert_eq!(line.line().length(), 50.0);
        assert_eq!(line.path().elements().len(), 2);
    }
}
