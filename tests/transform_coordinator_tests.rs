mod common;

use approx::assert_abs_diff_eq;
use common::{assert_close, engine, engine_with, plotted};
use slope_chart::api::{DualChartConfig, RecomputeGuard};
use slope_chart::core::{ChartId, ViewTransform};
use slope_chart::interaction::PointerPhase;
use slope_chart::render::{ElementClass, Primitive};

fn region_heights(scene: &slope_chart::render::ChartScene) -> (f64, f64, f64) {
    let rect = |class| match scene.first(class).map(|element| &element.primitive) {
        Some(Primitive::Rect(rect)) => *rect,
        other => panic!("expected region rect, got {other:?}"),
    };
    let positive = rect(ElementClass::PositiveRegion);
    let negative = rect(ElementClass::NegativeRegion);
    assert_eq!(positive.y, 0.0);
    assert_eq!(negative.y, positive.height);
    (positive.height, negative.height, negative.y)
}

#[test]
fn zoom_event_updates_shared_state_and_only_the_originating_pan() {
    let mut engine = plotted("x^2");
    engine
        .zoom(ChartId::Derivative, ViewTransform::new(-40.0, 12.0, 2.0))
        .expect("zoom");

    let view = engine.view_state();
    assert_eq!(view.shared_zoom(), 2.0);
    assert_eq!(view.shared_x(), ViewTransform::new(-40.0, 0.0, 2.0));
    assert_eq!(view.y_pan(ChartId::Function), 0.0);
    assert_eq!(view.y_pan(ChartId::Derivative), 12.0);
    assert_eq!(view.guard(), RecomputeGuard::Idle);

    let function = engine.chart(ChartId::Function).expect("function chart");
    let derivative = engine.chart(ChartId::Derivative).expect("derivative chart");
    assert_eq!(function.overlay().transform(), ViewTransform::new(-40.0, 0.0, 2.0));
    assert_eq!(derivative.overlay().transform(), ViewTransform::new(-40.0, 12.0, 2.0));
    assert_eq!(function.x_scale(), derivative.x_scale());
}

#[test]
fn synthetic_overlay_events_are_swallowed_by_the_guard() {
    let mut engine = plotted("x^2");
    engine
        .zoom(ChartId::Function, ViewTransform::new(10.0, 5.0, 2.0))
        .expect("zoom");
    assert_eq!(engine.view_state().suppressed_events(), 2);

    engine
        .zoom(ChartId::Function, ViewTransform::new(20.0, 5.0, 2.0))
        .expect("zoom");
    assert_eq!(engine.view_state().suppressed_events(), 4);
    // The echo did not overwrite the shared state with a stale transform.
    assert_eq!(engine.view_state().shared_x().x, 20.0);
}

#[test]
fn overflowing_zoom_leaves_view_and_charts_untouched() {
    let mut engine = plotted("x^2");
    let before = engine.snapshot();
    let scene_before = engine.scene(ChartId::Function).expect("scene").clone();

    let result = engine.zoom(ChartId::Function, ViewTransform::new(f64::MAX, 0.0, 0.1));
    assert!(result.is_err());

    let view = engine.view_state();
    assert_eq!(view.shared_x(), ViewTransform::IDENTITY);
    assert_eq!(view.shared_zoom(), 1.0);
    assert_eq!(view.y_pan(ChartId::Function), 0.0);
    assert_eq!(view.y_pan(ChartId::Derivative), 0.0);
    assert_eq!(view.guard(), RecomputeGuard::Idle);

    for chart in ChartId::ALL {
        let context = engine.chart(chart).expect("chart");
        assert_eq!(context.x_scale(), context.original_x_scale());
        assert_eq!(context.overlay().transform(), ViewTransform::IDENTITY);
    }
    assert_eq!(engine.scene(ChartId::Function), Some(&scene_before));
    assert_eq!(engine.snapshot(), before);

    // The engine still accepts a sane zoom afterwards.
    engine
        .zoom(ChartId::Function, ViewTransform::new(10.0, 0.0, 2.0))
        .expect("zoom");
    assert_eq!(engine.view_state().shared_zoom(), 2.0);
}

#[test]
fn zoom_factor_is_clamped_to_the_scale_extent() {
    let mut engine = plotted("x^2");
    engine
        .zoom(ChartId::Function, ViewTransform::new(0.0, 0.0, 40.0))
        .expect("zoom");
    assert_eq!(engine.view_state().shared_zoom(), 10.0);

    engine
        .zoom(ChartId::Function, ViewTransform::new(0.0, 0.0, 0.001))
        .expect("zoom");
    assert_eq!(engine.view_state().shared_zoom(), 0.1);
}

#[test]
fn current_x_scale_follows_the_shared_transform() {
    let mut engine = plotted("x^2");
    engine
        .zoom(ChartId::Function, ViewTransform::new(-630.0, 0.0, 2.0))
        .expect("zoom");

    let (start, end) = engine.x_scale().expect("x scale").domain();
    assert_abs_diff_eq!(start, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(end, 22.0, epsilon = 1e-9);
}

#[test]
fn repeated_recompute_never_duplicates_grid_lines() {
    let mut engine = plotted("x^2");
    for step in 0..5 {
        engine
            .zoom(
                ChartId::Function,
                ViewTransform::new(f64::from(step) * 3.0, 0.0, 1.5),
            )
            .expect("zoom");
    }
    engine
        .zoom(ChartId::Function, ViewTransform::new(12.0, 0.0, 1.5))
        .expect("zoom");

    for chart in ChartId::ALL {
        let scene = engine.scene(chart).expect("scene");
        let x_ticks = engine.x_scale().expect("x scale").ticks(10).len();
        let y_ticks = engine.y_scale(chart).expect("y scale").ticks(10).len();
        assert_eq!(scene.count(ElementClass::GridLineX), x_ticks);
        assert_eq!(scene.count(ElementClass::GridLineY), y_ticks);
        assert!(scene.count(ElementClass::AxisZeroX) <= 1);
        assert!(scene.count(ElementClass::AxisZeroY) <= 1);
        assert_eq!(scene.count(ElementClass::ZoomOverlay), 1);
    }
    assert_eq!(
        engine
            .scene(ChartId::Function)
            .expect("scene")
            .count(ElementClass::FunctionLine),
        1
    );
}

#[test]
fn zero_lines_disappear_when_zero_leaves_the_domain() {
    let mut engine = plotted("x^2");
    // Shift far enough right that x = 0 is off screen.
    engine
        .zoom(ChartId::Function, ViewTransform::new(-1_500.0, 0.0, 4.0))
        .expect("zoom");

    let scene = engine.scene(ChartId::Function).expect("scene");
    assert_eq!(scene.count(ElementClass::AxisZeroX), 0);
}

#[test]
fn region_split_sits_on_the_derivative_zero_row() {
    let config = DualChartConfig::default().with_chart_heights(300, 190);
    let mut engine = engine_with(config);
    engine.plot("-x").expect("plot");

    let derivative = engine.chart(ChartId::Derivative).expect("derivative chart");
    assert_eq!(derivative.plot_size(), (630.0, 140.0));
    assert_eq!(derivative.y_scale().domain(), (-2.0, 2.0));

    let (positive, negative, split) = region_heights(derivative.scene());
    assert_close(split, 70.0);
    assert_close(positive + negative, 140.0);

    engine
        .zoom(ChartId::Derivative, ViewTransform::new(0.0, 100.0, 1.0))
        .expect("zoom");
    let derivative = engine.chart(ChartId::Derivative).expect("derivative chart");
    let (positive, negative, _) = region_heights(derivative.scene());
    assert_close(positive, 140.0);
    assert_close(negative, 0.0);

    engine
        .zoom(ChartId::Derivative, ViewTransform::new(0.0, -300.0, 1.0))
        .expect("zoom");
    let derivative = engine.chart(ChartId::Derivative).expect("derivative chart");
    let (positive, negative, _) = region_heights(derivative.scene());
    assert_close(positive, 0.0);
    assert_close(negative, 140.0);
}

#[test]
fn function_chart_carries_no_regions() {
    let engine = plotted("x^2");
    let scene = engine.scene(ChartId::Function).expect("scene");
    assert_eq!(scene.count(ElementClass::PositiveRegion), 0);
    assert_eq!(scene.count(ElementClass::NegativeRegion), 0);
}

#[test]
fn zoom_before_plot_is_a_benign_no_op() {
    let mut engine = engine();
    engine
        .zoom(ChartId::Function, ViewTransform::new(5.0, 7.0, 3.0))
        .expect("zoom without charts");

    assert!(!engine.is_plotted());
    assert!(engine.scene(ChartId::Function).is_none());
    assert_eq!(engine.view_state().shared_zoom(), 3.0);
    assert_eq!(engine.view_state().suppressed_events(), 0);
    assert!(!engine.wheel(ChartId::Function, 10.0, 10.0, -100.0).expect("wheel"));
    engine.render().expect("render without charts");
    assert_eq!(engine.renderer().frames_rendered, 0);
}

#[test]
fn wheel_zooms_around_the_pointer() {
    let mut engine = plotted("x^2");
    let before = engine.x_scale().expect("x scale").invert(200.0);

    assert!(engine
        .wheel(ChartId::Function, 200.0, 100.0, -500.0)
        .expect("wheel"));
    assert_close(engine.view_state().shared_zoom(), 2.0);
    let after = engine.x_scale().expect("x scale").invert(200.0);
    assert_abs_diff_eq!(after, before, epsilon = 1e-9);

    // Back to the pointer phase held before the gesture.
    assert_ne!(
        engine.interaction().phase(ChartId::Function),
        PointerPhase::Dragging
    );
}

#[test]
fn wheel_at_the_extent_bound_reports_no_change() {
    let mut engine = plotted("x^2");
    engine
        .zoom(ChartId::Function, ViewTransform::new(0.0, 0.0, 10.0))
        .expect("zoom");
    assert!(!engine
        .wheel(ChartId::Function, 100.0, 100.0, -200.0)
        .expect("wheel"));
    assert_eq!(engine.view_state().shared_zoom(), 10.0);
}

#[test]
fn drag_pans_x_for_both_charts_and_y_for_the_dragged_one() {
    let mut engine = plotted("x^2");
    engine
        .drag_start(ChartId::Derivative, 100.0, 50.0)
        .expect("drag start");
    assert_eq!(
        engine.interaction().phase(ChartId::Derivative),
        PointerPhase::Dragging
    );
    assert!(engine
        .drag_move(ChartId::Derivative, 130.0, 70.0)
        .expect("drag move"));
    engine.drag_end(ChartId::Derivative);

    let view = engine.view_state();
    assert_eq!(view.shared_x().x, 30.0);
    assert_eq!(view.y_pan(ChartId::Derivative), 20.0);
    assert_eq!(view.y_pan(ChartId::Function), 0.0);
    assert_eq!(
        engine.interaction().phase(ChartId::Derivative),
        PointerPhase::Hovering
    );

    // A later drag on the other chart continues from the shared x.
    engine
        .drag_start(ChartId::Function, 0.0, 0.0)
        .expect("drag start");
    engine
        .drag_move(ChartId::Function, 10.0, 0.0)
        .expect("drag move");
    engine.drag_end(ChartId::Function);
    assert_eq!(engine.view_state().shared_x().x, 40.0);
    assert_eq!(engine.view_state().y_pan(ChartId::Derivative), 20.0);
}

#[test]
fn drag_move_without_drag_start_is_ignored() {
    let mut engine = plotted("x^2");
    assert!(!engine
        .drag_move(ChartId::Function, 10.0, 10.0)
        .expect("drag move"));
    assert!(engine.view_state().shared_x().is_identity());
}
