// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid demos for `cartesian_grid`, written as a single HTML report.
mod html;
mod svg;

use cartesian_grid::{
    AxisScale, BoundingBox, ChartOffset, GeneratorContext, GridAxis, GridGeometry, GridLineProps,
    GridSpec, GridStyle, LineDescriptor, LineStrategy, Orientation, ScaleBand, ScaleLinear,
    StrokeStyle,
};
use kurbo::{BezPath, Rect};
use peniko::Color;
use peniko::color::palette::css;

use html::HtmlSection;

const VIEW: Rect = Rect::new(0.0, 0.0, 560.0, 360.0);
const PLOT: BoundingBox = BoundingBox::new(40.0, 20.0, 480.0, 300.0);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let sections = vec![
        explicit_points_demo(),
        stripes_demo(),
        axis_ticks_demo(),
        generator_demo(),
        custom_lines_demo(),
        degenerate_demo(),
    ];

    let html = html::render_report("cartesian_grid demo", &sections);
    std::fs::write("cartesian_grid_demo.html", html).expect("write cartesian_grid_demo.html");
    tracing::info!(sections = sections.len(), "wrote cartesian_grid_demo.html");
}

fn render(geometry: &GridGeometry, series: Option<BezPath>) -> String {
    let mut scene = svg::SvgScene::default();
    scene.set_view_box(VIEW);
    scene.add_grid(geometry);
    if let Some(path) = series {
        scene.add_path(path, css::STEEL_BLUE, 2.0);
    }
    scene.to_svg_string()
}

fn explicit_points_demo() -> HtmlSection {
    let geometry = GridSpec::new(PLOT)
        .with_points(Orientation::Horizontal, [60.0, 120.0, 180.0, 240.0, 300.0])
        .with_points(Orientation::Vertical, [100.0, 200.0, 300.0, 400.0, 500.0])
        .geometry();
    HtmlSection::new("Explicit positions", render(&geometry, None))
        .with_note(format!("{} lines", geometry.len()))
}

fn stripes_demo() -> HtmlSection {
    let style = GridStyle::default()
        .with_fill_opacity(0.35)
        .with_background(Color::from_rgb8(0xfa, 0xfa, 0xf5));
    let geometry = GridSpec::new(PLOT)
        .with_style(style)
        // Float noise from upstream arithmetic; stripes still snap to whole pixels.
        .with_points(
            Orientation::Horizontal,
            [1.1 * 1.1 * 100.0, 1.1 * 2.1 * 100.0, 260.0],
        )
        .with_points(Orientation::Vertical, [100.0, 220.0, 160.0, 400.0])
        .with_fill(Orientation::Horizontal, [css::LIGHT_GRAY, css::WHITE])
        .with_fill(Orientation::Vertical, [css::LAVENDER])
        .geometry();
    let heights: Vec<String> = geometry
        .horizontal_stripes
        .iter()
        .map(|s| s.height.to_string())
        .collect();
    HtmlSection::new("Stripes", render(&geometry, None))
        .with_note(format!("horizontal stripe heights: {}", heights.join(", ")))
        .with_note(format!(
            "vertical stripes: {} (the out-of-order 160 drops a band)",
            geometry.vertical_stripes.len()
        ))
}

fn axis_ticks_demo() -> HtmlSection {
    let y = ScaleLinear::new((0.0, 42.0), (PLOT.y + PLOT.height, PLOT.y));
    let x = ScaleBand::new((PLOT.x, PLOT.x + PLOT.width), 6).with_padding(0.2);
    let offset = ChartOffset {
        left: PLOT.x,
        top: PLOT.y,
        right: VIEW.width() - PLOT.x - PLOT.width,
        bottom: VIEW.height() - PLOT.y - PLOT.height,
        width: PLOT.width,
        height: PLOT.height,
    };
    let geometry = GridSpec::new(PLOT)
        .with_chart_size(VIEW.width(), VIEW.height())
        .with_offset(offset)
        .with_y_axis(GridAxis::new(y).with_ticks([0.0, 10.0, 20.0, 30.0, 40.0]))
        .with_x_axis(GridAxis::new(x).with_ticks([0.0, 1.0, 2.0, 3.0, 4.0, 5.0]))
        .with_style(GridStyle::default().with_stroke(StrokeStyle::solid(css::SILVER, 1.0)))
        .geometry();

    let values = [12.0, 30.0, 18.0, 36.0, 25.0, 41.0];
    let mut series = BezPath::new();
    for (i, v) in values.iter().enumerate() {
        let p = (x.grid_coordinate(i as f64), y.map(*v));
        if i == 0 {
            series.move_to(p);
        } else {
            series.line_to(p);
        }
    }

    HtmlSection::new("Axis ticks", render(&geometry, Some(series)))
        .with_note("vertical lines sit on band centers; horizontal ones close at the plot edges")
}

fn generator_demo() -> HtmlSection {
    let geometry = GridSpec::new(PLOT)
        .with_generator(Orientation::Vertical, |ctx: &GeneratorContext, _sync| {
            let step = ctx.width / 12.0;
            Some((1..12).map(|i| PLOT.x + step * f64::from(i)).collect())
        })
        .with_generator(Orientation::Horizontal, |_: &GeneratorContext, _sync| {
            // Rejected: not every value is finite.
            Some(vec![50.0, f64::NAN])
        })
        .geometry();
    HtmlSection::new("Generators", render(&geometry, None)).with_note(format!(
        "{} vertical lines, {} horizontal lines",
        geometry.vertical_lines.len(),
        geometry.horizontal_lines.len()
    ))
}

fn custom_lines_demo() -> HtmlSection {
    let dashed = LineStrategy::render(|props: &GridLineProps<'_, LineDescriptor>| {
        let stroke = if props.index % 2 == 0 {
            StrokeStyle::solid(css::DARK_GRAY, 1.0)
        } else {
            StrokeStyle::solid(props.stroke.clone(), 1.0).with_dash(&[4.0, 4.0])
        };
        LineDescriptor::horizontal(props.y1, props.x1, props.x2)
            .with_index(props.index)
            .with_stroke(stroke)
    });
    let template = LineDescriptor::vertical(0.0, 0.0, 0.0)
        .with_stroke(StrokeStyle::solid(css::BLACK, 0.5).with_dash(&[1.0, 3.0]));
    let geometry = GridSpec::new(PLOT)
        .with_points(Orientation::Horizontal, [50.0, 100.0, 150.0, 200.0, 250.0])
        .with_points(Orientation::Vertical, [140.0, 280.0, 420.0])
        .with_lines(Orientation::Horizontal, dashed)
        .with_lines(Orientation::Vertical, LineStrategy::template(template))
        .geometry();
    HtmlSection::new("Custom lines", render(&geometry, None))
}

fn degenerate_demo() -> HtmlSection {
    let geometry = GridSpec::new(BoundingBox::new(40.0, 20.0, 0.0, 300.0))
        .with_points(Orientation::Horizontal, [60.0, 120.0])
        .with_fill(Orientation::Horizontal, [css::RED, css::GREEN])
        .geometry();
    HtmlSection::new("Degenerate bounds", render(&geometry, None))
        .with_note(format!("zero width renders {} elements", geometry.len()))
}
