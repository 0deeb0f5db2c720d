// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG demo for `rankgrid_chart`.
//!
//! Renders the built-in sample chart at two sizes, remeasuring between
//! them, and writes one SVG per size.

mod svg;
mod table;

use kurbo::{Affine, Point, Rect, Vec2};
use rankgrid_chart::{
    GridMeasurer, Mark, MarkKind, RankingChart, RankingChartSpec, Size, UniformGridMeasurer,
};

fn main() {
    let spec = RankingChartSpec::default();
    let mut chart = spec.build(&mut rand::thread_rng());

    let passes = [
        ("rankgrid_demo_1.svg", Size::new(960.0, 420.0)),
        ("rankgrid_demo_2.svg", Size::new(720.0, 360.0)),
    ];
    for (path, size) in passes {
        let svg = render_pass(&mut chart, size);
        std::fs::write(path, svg).expect("write demo svg");
        println!("wrote {path}");
    }
}

fn render_pass(chart: &mut RankingChart, size: Size) -> String {
    let measurer = UniformGridMeasurer::new(
        Point::ZERO,
        size,
        chart.grid().row_count(),
        chart.grid().col_count(),
    );
    chart.remeasure(&measurer);
    let grid_origin = measurer
        .grid_bounds()
        .map(|b| Vec2::new(b.x0, b.y0))
        .unwrap_or_default();

    let mut scene = svg::SvgScene::default();
    scene.extend(table::table_marks(chart.grid(), &measurer));
    scene.extend(
        chart
            .overlay_marks()
            .into_iter()
            .map(|mark| offset(mark, grid_origin)),
    );
    // Caption x is already measured from the table's left edge.
    scene.extend(
        chart
            .legend_marks()
            .into_iter()
            .map(|mark| offset(mark, Vec2::new(measurer.origin.x, grid_origin.y))),
    );

    let captions_height = chart.captions().height() + 20.0;
    scene.set_view_box(Rect::new(
        measurer.origin.x,
        measurer.origin.y,
        measurer.origin.x + size.width,
        measurer.origin.y + size.height + captions_height,
    ));
    scene.to_svg_string()
}

fn offset(mark: Mark, by: Vec2) -> Mark {
    let kind = match mark.kind {
        MarkKind::Rect(mut r) => {
            r.rect = r.rect + by;
            MarkKind::Rect(r)
        }
        MarkKind::Text(mut t) => {
            t.pos += by;
            MarkKind::Text(t)
        }
        MarkKind::Path(mut p) => {
            p.path.apply_affine(Affine::translate(by));
            MarkKind::Path(p)
        }
    };
    Mark::new(mark.z_index, kind)
}
