// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `cartesian_grid_demo`.

use cartesian_grid::{GridGeometry, GridLine, LineDescriptor, StripeDescriptor};
use kurbo::{BezPath, Rect};
use peniko::Brush;

#[derive(Debug)]
enum Element {
    Rect {
        rect: Rect,
        fill: Brush,
        fill_opacity: f64,
    },
    Line(LineDescriptor),
    Path {
        path: BezPath,
        stroke: Brush,
        stroke_width: f64,
    },
}

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    elements: Vec<(i32, Element)>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    /// Adds grid geometry whose custom lines are themselves line descriptors.
    pub(crate) fn add_grid(&mut self, geometry: &GridGeometry) {
        if let Some(bg) = &geometry.background {
            self.elements.push((
                bg.z_index,
                Element::Rect {
                    rect: bg.rect(),
                    fill: bg.fill.clone(),
                    fill_opacity: bg.fill_opacity,
                },
            ));
        }
        for stripe in geometry
            .horizontal_stripes
            .iter()
            .chain(&geometry.vertical_stripes)
        {
            self.add_stripe(stripe);
        }
        for line in geometry
            .horizontal_lines
            .iter()
            .chain(&geometry.vertical_lines)
        {
            let line = match line {
                GridLine::Line(line) | GridLine::Custom(line) => line,
            };
            self.elements.push((line.z_index, Element::Line(line.clone())));
        }
    }

    fn add_stripe(&mut self, stripe: &StripeDescriptor) {
        self.elements.push((
            stripe.z_index,
            Element::Rect {
                rect: stripe.rect(),
                fill: stripe.fill.clone(),
                fill_opacity: stripe.fill_opacity,
            },
        ));
    }

    /// Adds a stroked series path on top of the grid.
    pub(crate) fn add_path(&mut self, path: BezPath, stroke: impl Into<Brush>, stroke_width: f64) {
        self.elements.push((
            0,
            Element::Path {
                path,
                stroke: stroke.into(),
                stroke_width,
            },
        ));
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        // Stable sort keeps emission order within a layer.
        let mut order: Vec<usize> = (0..self.elements.len()).collect();
        order.sort_by_key(|i| self.elements[*i].0);

        for i in order {
            match &self.elements[i].1 {
                Element::Rect {
                    rect,
                    fill,
                    fill_opacity,
                } => {
                    out.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}" stroke="none""#,
                        rect.x0,
                        rect.y0,
                        rect.width(),
                        rect.height(),
                    ));
                    write_paint_attr(&mut out, "fill", fill);
                    if *fill_opacity != 1.0 {
                        out.push_str(&format!(r#" opacity="{fill_opacity}""#));
                    }
                    out.push_str("/>\n");
                }
                Element::Line(line) => {
                    out.push_str(&format!(
                        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" fill="none""#,
                        line.x1, line.y1, line.x2, line.y2
                    ));
                    write_paint_attr(&mut out, "stroke", &line.stroke.brush);
                    out.push_str(&format!(r#" stroke-width="{}""#, line.stroke.stroke_width));
                    if line.stroke.is_dashed() {
                        let dash: Vec<String> =
                            line.stroke.dash.iter().map(|d| d.to_string()).collect();
                        out.push_str(&format!(r#" stroke-dasharray="{}""#, dash.join(" ")));
                    }
                    out.push_str("/>\n");
                }
                Element::Path {
                    path,
                    stroke,
                    stroke_width,
                } => {
                    let d = path.to_svg();
                    out.push_str(&format!(r#"<path d="{d}" fill="none""#));
                    write_paint_attr(&mut out, "stroke", stroke);
                    out.push_str(&format!(r#" stroke-width="{stroke_width}""#));
                    out.push_str("/>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
