// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridline position resolution.
//!
//! Each orientation resolves its pixel positions independently, from the first source that
//! applies:
//! 1. an explicit position list (even an empty one),
//! 2. a caller-supplied [`PositionGenerator`], called exactly once,
//! 3. the axis ticks, mapped through the axis scale.
//!
//! Nothing here fails. Inputs that cannot produce positions resolve to an empty list.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::bounds::{ChartOffset, Orientation};
use crate::log;
use crate::scale::GridAxis;

/// Caller hook that computes gridline positions.
///
/// The second argument is the effective `sync_with_ticks` flag. Returning `None` (or a list
/// containing a non-finite value) resolves to no positions.
pub type PositionGenerator = Arc<dyn Fn(&GeneratorContext, Option<bool>) -> Option<Vec<f64>>>;

/// Everything a [`PositionGenerator`] is given to work with.
#[derive(Clone, Debug)]
pub struct GeneratorContext {
    /// The axis for this orientation, with ticks replaced by the explicit values if any.
    pub axis: Option<GridAxis>,
    /// Working width of the whole chart.
    pub width: f64,
    /// Working height of the whole chart.
    pub height: f64,
    /// Plot offset inside the chart, forwarded as supplied.
    pub offset: Option<ChartOffset>,
}

/// The candidate position sources for one orientation.
#[derive(Clone, Copy, Default)]
pub struct PositionSources<'a> {
    /// Explicit pixel positions. Wins over everything when present.
    pub points: Option<&'a [f64]>,
    /// Caller generator, consulted when there are no explicit points.
    pub generator: Option<&'a PositionGenerator>,
    /// Domain values to keep the grid in sync with. Non-empty values force
    /// `sync_with_ticks` and replace the axis ticks handed to generators.
    pub values: Option<&'a [f64]>,
    /// The axis for this orientation.
    pub axis: Option<&'a GridAxis>,
    /// Caller `sync_with_ticks` flag.
    pub sync_with_ticks: Option<bool>,
    /// Working width of the whole chart.
    pub chart_width: f64,
    /// Working height of the whole chart.
    pub chart_height: f64,
    /// Plot offset inside the chart.
    pub offset: Option<ChartOffset>,
}

impl core::fmt::Debug for PositionSources<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PositionSources")
            .field("points", &self.points)
            .field("generator", &self.generator.is_some())
            .field("values", &self.values)
            .field("axis", &self.axis)
            .field("sync_with_ticks", &self.sync_with_ticks)
            .field("chart_width", &self.chart_width)
            .field("chart_height", &self.chart_height)
            .field("offset", &self.offset)
            .finish()
    }
}

impl PositionSources<'_> {
    fn sync_values(&self) -> Option<&[f64]> {
        self.values.filter(|v| !v.is_empty())
    }

    /// Returns the `sync_with_ticks` flag generators are called with.
    pub fn effective_sync_with_ticks(&self) -> Option<bool> {
        if self.sync_values().is_some() {
            Some(true)
        } else {
            self.sync_with_ticks
        }
    }

    /// Builds the context generators are called with.
    pub fn context(&self) -> GeneratorContext {
        let axis = self.axis.map(|axis| match self.sync_values() {
            Some(values) => axis.with_ticks_replaced(Some(values.to_vec())),
            None => axis.clone(),
        });
        GeneratorContext {
            axis,
            width: self.chart_width,
            height: self.chart_height,
            offset: self.offset,
        }
    }
}

/// Resolves the gridline positions for one orientation.
pub fn resolve_positions(orientation: Orientation, sources: &PositionSources<'_>) -> Vec<f64> {
    explicit_points(sources)
        .or_else(|| generated_points(sources))
        .or_else(|| tick_points(orientation, sources))
        .unwrap_or_default()
}

fn explicit_points(sources: &PositionSources<'_>) -> Option<Vec<f64>> {
    sources.points.map(<[f64]>::to_vec)
}

fn generated_points(sources: &PositionSources<'_>) -> Option<Vec<f64>> {
    let generator = sources.generator?;
    let out = generator(&sources.context(), sources.effective_sync_with_ticks());
    Some(validate_generated(out))
}

/// Accepts generator output only if it is present and every value is finite.
pub fn validate_generated(out: Option<Vec<f64>>) -> Vec<f64> {
    match out {
        Some(points) if points.iter().all(|p| p.is_finite()) => points,
        Some(_) => {
            log::debug!("generator returned non-finite positions; ignoring them");
            Vec::new()
        }
        None => {
            log::debug!("generator returned no positions");
            Vec::new()
        }
    }
}

/// The built-in generator: axis ticks mapped to pixel coordinates.
///
/// Unless ticks are being synced, the plot edges described by the offset are added when no
/// tick lands on them exactly, so the grid always closes at the plot boundary.
fn tick_points(orientation: Orientation, sources: &PositionSources<'_>) -> Option<Vec<f64>> {
    if sources.axis.is_none() && sources.offset.is_none() {
        return None;
    }
    let ctx = sources.context();
    let mut points = ctx
        .axis
        .as_ref()
        .map(GridAxis::tick_coordinates)
        .unwrap_or_default();
    if sources.effective_sync_with_ticks() != Some(true)
        && let Some(offset) = ctx.offset
    {
        let (min, max) = offset.edges(orientation);
        complete_edges(&mut points, min, max);
    }
    log::trace!(?orientation, len = points.len(), "positions from axis ticks");
    Some(points)
}

fn complete_edges(points: &mut Vec<f64>, min: f64, max: f64) {
    let has_min = points.contains(&min);
    let has_max = points.contains(&max);
    if !has_min && min.is_finite() {
        points.push(min);
    }
    if !has_max && max.is_finite() {
        points.push(max);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use core::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::scale::ScaleLinear;

    fn offset() -> ChartOffset {
        ChartOffset {
            left: 3.0,
            top: 1.0,
            right: 4.0,
            bottom: 2.0,
            width: 5.0,
            height: 6.0,
        }
    }

    fn fixed(points: Option<Vec<f64>>, calls: Rc<Cell<usize>>) -> PositionGenerator {
        Arc::new(move |_ctx: &GeneratorContext, _sync: Option<bool>| {
            calls.set(calls.get() + 1);
            points.clone()
        })
    }

    #[test]
    fn explicit_points_win_even_when_empty() {
        let calls = Rc::new(Cell::new(0));
        let generator = fixed(Some(vec![1.0, 2.0]), calls.clone());
        for points in [&[10.0, 20.0, 30.0][..], &[][..]] {
            let sources = PositionSources {
                points: Some(points),
                generator: Some(&generator),
                ..Default::default()
            };
            assert_eq!(resolve_positions(Orientation::Horizontal, &sources), points);
        }
        assert_eq!(calls.get(), 0, "generator must not run");
    }

    #[test]
    fn generator_runs_once_and_is_used_verbatim() {
        let calls = Rc::new(Cell::new(0));
        let generator = fixed(Some(vec![5.0, 1.0, 5.0]), calls.clone());
        let sources = PositionSources {
            generator: Some(&generator),
            ..Default::default()
        };
        let out = resolve_positions(Orientation::Vertical, &sources);
        assert_eq!(out, vec![5.0, 1.0, 5.0], "no sorting or dedup");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn invalid_generator_output_is_empty() {
        let outputs = [
            None,
            Some(vec![]),
            Some(vec![1.0, f64::NAN]),
            Some(vec![f64::INFINITY]),
        ];
        for out in outputs {
            let calls = Rc::new(Cell::new(0));
            let generator = fixed(out.clone(), calls.clone());
            let sources = PositionSources {
                generator: Some(&generator),
                offset: Some(offset()),
                ..Default::default()
            };
            assert!(
                resolve_positions(Orientation::Horizontal, &sources).is_empty(),
                "{out:?} should resolve to nothing"
            );
            assert_eq!(calls.get(), 1);
        }
    }

    #[derive(Debug, PartialEq)]
    struct Seen {
        ticks: Option<Option<Vec<f64>>>,
        width: f64,
        height: f64,
        offset: Option<ChartOffset>,
        sync: Option<bool>,
    }

    fn recording(seen: Rc<RefCell<Vec<Seen>>>) -> PositionGenerator {
        Arc::new(move |ctx: &GeneratorContext, sync: Option<bool>| {
            seen.borrow_mut().push(Seen {
                ticks: ctx.axis.as_ref().map(|a| a.ticks.clone()),
                width: ctx.width,
                height: ctx.height,
                offset: ctx.offset,
                sync,
            });
            Some(Vec::new())
        })
    }

    #[test]
    fn generator_receives_context_and_caller_sync_flag() {
        let axis = GridAxis::new(ScaleLinear::new((0.0, 1.0), (0.0, 1.0))).with_ticks(vec![7.0]);
        for sync in [Some(true), Some(false), None] {
            let seen = Rc::new(RefCell::new(Vec::new()));
            let generator = recording(seen.clone());
            let sources = PositionSources {
                generator: Some(&generator),
                axis: Some(&axis),
                sync_with_ticks: sync,
                chart_width: 300.0,
                chart_height: 200.0,
                offset: Some(offset()),
                ..Default::default()
            };
            resolve_positions(Orientation::Horizontal, &sources);
            assert_eq!(
                *seen.borrow(),
                vec![Seen {
                    ticks: Some(Some(vec![7.0])),
                    width: 300.0,
                    height: 200.0,
                    offset: Some(offset()),
                    sync,
                }]
            );
        }
    }

    #[test]
    fn non_empty_values_force_sync_and_replace_ticks() {
        let axis = GridAxis::new(ScaleLinear::new((0.0, 1.0), (0.0, 1.0))).with_ticks(vec![7.0]);
        let values = [1.0, 2.0];
        let seen = Rc::new(RefCell::new(Vec::new()));
        let generator = recording(seen.clone());
        let sources = PositionSources {
            generator: Some(&generator),
            values: Some(&values),
            axis: Some(&axis),
            sync_with_ticks: Some(false),
            ..Default::default()
        };
        resolve_positions(Orientation::Vertical, &sources);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].sync, Some(true));
        assert_eq!(seen[0].ticks, Some(Some(vec![1.0, 2.0])));
    }

    #[test]
    fn empty_values_pass_sync_and_ticks_through() {
        let axis = GridAxis::new(ScaleLinear::new((0.0, 1.0), (0.0, 1.0)));
        for sync in [Some(true), Some(false), None] {
            let seen = Rc::new(RefCell::new(Vec::new()));
            let generator = recording(seen.clone());
            let sources = PositionSources {
                generator: Some(&generator),
                values: Some(&[]),
                axis: Some(&axis),
                sync_with_ticks: sync,
                ..Default::default()
            };
            resolve_positions(Orientation::Vertical, &sources);
            let seen = seen.borrow();
            assert_eq!(seen[0].sync, sync);
            assert_eq!(seen[0].ticks, Some(None));
        }
    }

    #[test]
    fn tick_fallback_maps_ticks_and_closes_plot_edges() {
        let axis = GridAxis::new(ScaleLinear::new((0.0, 100.0), (0.0, 500.0)))
            .with_ticks(vec![0.0, 50.0]);
        let plot = ChartOffset {
            left: 0.0,
            top: 5.0,
            right: 5.0,
            bottom: 5.0,
            width: 500.0,
            height: 490.0,
        };
        let sources = PositionSources {
            axis: Some(&axis),
            offset: Some(plot),
            ..Default::default()
        };
        assert_eq!(
            resolve_positions(Orientation::Vertical, &sources),
            vec![0.0, 250.0, 500.0]
        );

        let synced = PositionSources {
            sync_with_ticks: Some(true),
            ..sources
        };
        assert_eq!(
            resolve_positions(Orientation::Vertical, &synced),
            vec![0.0, 250.0]
        );
    }

    #[test]
    fn tick_fallback_without_axis_uses_plot_edges_only() {
        let plot = ChartOffset {
            left: 5.0,
            top: 5.0,
            right: 5.0,
            bottom: 5.0,
            width: 490.0,
            height: 490.0,
        };
        let sources = PositionSources {
            offset: Some(plot),
            ..Default::default()
        };
        assert_eq!(
            resolve_positions(Orientation::Horizontal, &sources),
            vec![5.0, 495.0]
        );
        assert!(resolve_positions(Orientation::Horizontal, &PositionSources::default()).is_empty());
    }

    #[test]
    fn tick_fallback_uses_values_when_present() {
        let axis = GridAxis::new(|v: f64| v * 10.0).with_ticks(vec![1.0]);
        let values = [2.0, 3.0];
        let sources = PositionSources {
            axis: Some(&axis),
            values: Some(&values),
            offset: Some(offset()),
            ..Default::default()
        };
        assert_eq!(
            resolve_positions(Orientation::Horizontal, &sources),
            vec![20.0, 30.0],
            "synced values skip edge completion"
        );
    }
}
