use criterion::{Criterion, criterion_group, criterion_main};
use donut_rs::core::{DataPoint, Point, arc_path, layout};
use donut_rs::render::NullRenderer;
use donut_rs::{DonutChart, DonutChartConfig};
use std::hint::black_box;

fn generated_points(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| DataPoint::new(1.0 + (i % 7) as f64, "#336699", format!("slice-{i}")))
        .collect()
}

fn bench_arc_path_donut(c: &mut Criterion) {
    let center = Point::new(150.0, 150.0);

    c.bench_function("arc_path_donut", |b| {
        b.iter(|| {
            let path = arc_path(
                black_box(center),
                black_box(140.0),
                black_box(80.0),
                black_box(12.5),
                black_box(231.0),
            )
            .expect("valid arc");
            let _ = path.to_svg_path_data(3);
        })
    });
}

fn bench_layout_1k(c: &mut Criterion) {
    let points = generated_points(1_000);

    c.bench_function("layout_1k", |b| {
        b.iter(|| {
            let _ = layout(black_box(&points), black_box(100.0)).expect("layout");
        })
    });
}

fn bench_tick_and_render_64(c: &mut Criterion) {
    let config = DonutChartConfig::new(300.0).with_inner_radius(60.0);
    let mut chart = DonutChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(generated_points(64)).expect("set data");
    chart.tick(0.0).expect("start");
    let mut now = 0.0;

    c.bench_function("tick_and_render_64", |b| {
        b.iter(|| {
            now += 16.0;
            chart.tick(black_box(now)).expect("tick");
            chart.render().expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_arc_path_donut,
    bench_layout_1k,
    bench_tick_and_render_64
);
criterion_main!(benches);
