#![cfg(feature = "cairo-backend")]

mod common;

use cairo::{Context, Format, ImageSurface};
use common::TableCompiler;
use slope_chart::api::{DualChartConfig, DualChartEngine};
use slope_chart::core::ChartId;
use slope_chart::render::CairoRenderer;
use slope_chart::ChartError;

fn cairo_engine(source: &str) -> DualChartEngine<CairoRenderer> {
    let config = DualChartConfig::default();
    let renderer = CairoRenderer::for_config(&config).expect("renderer");
    let mut engine =
        DualChartEngine::new(renderer, Box::new(TableCompiler), config).expect("engine init");
    engine.plot(source).expect("plot");
    engine
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn surface_stacks_both_chart_containers() {
    let renderer = CairoRenderer::for_config(&DualChartConfig::default()).expect("renderer");
    assert_eq!(renderer.surface().width(), 700);
    assert_eq!(renderer.surface().height(), 500);
    assert_eq!(renderer.chart_offset(ChartId::Function), 0.0);
    assert_eq!(renderer.chart_offset(ChartId::Derivative), 300.0);
}

#[test]
fn offscreen_render_draws_regions_lines_and_hover() {
    let mut engine = cairo_engine("x^2");
    engine.pointer_over(ChartId::Function);
    let px = engine.x_scale().expect("x scale").map(3.0);
    engine
        .pointer_move(ChartId::Function, px, 0.0)
        .expect("pointer move");
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    let function = renderer.stats(ChartId::Function);
    let derivative = renderer.stats(ChartId::Derivative);

    assert_eq!(function.paths_drawn, 1);
    assert_eq!(function.circles_drawn, 1);
    assert_eq!(function.rects_drawn, 1);
    assert_eq!(derivative.rects_drawn, 3);
    assert_eq!(derivative.circles_drawn, 1);
    assert!(function.texts_drawn > 0);

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn external_context_render_keeps_charts_separate() {
    let mut engine = cairo_engine("-x");
    let surface = ImageSurface::create(Format::ARgb32, 700, 500).expect("surface");
    let context = Context::new(&surface).expect("context");

    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.stats(ChartId::Function).paths_drawn, 1);
    assert_eq!(renderer.stats(ChartId::Derivative).paths_drawn, 1);
}
