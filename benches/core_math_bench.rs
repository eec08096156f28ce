use criterion::{Criterion, criterion_group, criterion_main};
use slope_chart::ChartResult;
use slope_chart::api::{DualChartConfig, DualChartEngine};
use slope_chart::core::{
    ChartId, CompiledFunction, Expression, ExpressionCompiler, FnExpression, LinearScale,
    SampleGrid, ViewTransform, compute_display_domains, project_line_path, sample_series,
};
use slope_chart::interaction::{SnapTuning, resolve_snap};
use slope_chart::render::NullRenderer;
use std::hint::black_box;

struct CubicCompiler;

fn cubic(x: f64) -> f64 {
    x * x * x - 3.0 * x
}

fn cubic_slope(x: f64) -> f64 {
    3.0 * x * x - 3.0
}

impl ExpressionCompiler for CubicCompiler {
    fn compile(&self, _source: &str) -> ChartResult<Box<dyn Expression>> {
        Ok(Box::new(FnExpression::new("x ^ 3 - 3 * x", cubic)))
    }

    fn derive(&self, _source: &str) -> ChartResult<Box<dyn Expression>> {
        Ok(Box::new(FnExpression::new("3 * x ^ 2 - 3", cubic_slope)))
    }
}

fn compiled() -> CompiledFunction {
    CompiledFunction::compile(&CubicCompiler, "x^3-3*x").expect("compile")
}

fn bench_sample_series_default_grid(c: &mut Criterion) {
    let compiled = compiled();
    c.bench_function("sample_series_801", |b| {
        b.iter(|| {
            let _ = sample_series(black_box(&compiled), black_box(SampleGrid::default()))
                .expect("sampling should succeed");
        })
    });
}

fn bench_display_domains(c: &mut Criterion) {
    let series = sample_series(&compiled(), SampleGrid::default()).expect("sampling");
    c.bench_function("compute_display_domains_801", |b| {
        b.iter(|| {
            let _ = compute_display_domains(
                black_box(&series.function),
                black_box(&series.derivative),
            )
            .expect("domains should succeed");
        })
    });
}

fn bench_resolve_snap(c: &mut Criterion) {
    let series = sample_series(&compiled(), SampleGrid::default()).expect("sampling");
    let tuning = SnapTuning::default();
    c.bench_function("resolve_snap_801", |b| {
        b.iter(|| {
            let _ = resolve_snap(
                black_box(1.04),
                black_box(&series.derivative),
                black_box(Some(1.0)),
                tuning,
            );
        })
    });
}

fn bench_project_line_path(c: &mut Criterion) {
    let series = sample_series(&compiled(), SampleGrid::default()).expect("sampling");
    let x_scale = LinearScale::new((-22.0, 22.0), (0.0, 630.0)).expect("x scale");
    let y_scale = LinearScale::new((-8_800.0, 8_800.0), (250.0, 0.0)).expect("y scale");
    c.bench_function("project_line_path_801", |b| {
        b.iter(|| {
            let _ = project_line_path(
                black_box(&series.function),
                black_box(x_scale),
                black_box(y_scale),
            );
        })
    });
}

fn bench_engine_zoom_recompute(c: &mut Criterion) {
    let mut engine = DualChartEngine::new(
        NullRenderer::default(),
        Box::new(CubicCompiler),
        DualChartConfig::default(),
    )
    .expect("engine init");
    engine.plot("x^3-3*x").expect("plot");

    let mut step = 0_u32;
    c.bench_function("engine_zoom_recompute", |b| {
        b.iter(|| {
            step = step.wrapping_add(1);
            let k = 1.0 + f64::from(step % 16) * 0.25;
            engine
                .zoom(
                    black_box(ChartId::Function),
                    black_box(ViewTransform::new(-40.0, 12.0, k)),
                )
                .expect("zoom should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_sample_series_default_grid,
    bench_display_domains,
    bench_resolve_snap,
    bench_project_line_path,
    bench_engine_zoom_recompute
);
criterion_main!(benches);
