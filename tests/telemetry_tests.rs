mod common;

use common::plotted;
use slope_chart::core::{ChartId, ViewTransform};
use slope_chart::telemetry::{DEFAULT_FILTER, init_default_tracing, init_tracing_with};

#[test]
fn default_filter_targets_the_crate() {
    assert!(DEFAULT_FILTER.starts_with("slope_chart="));
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn subscriber_is_not_installed_without_the_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with("slope_chart=trace"));
}

#[cfg(feature = "telemetry")]
#[test]
fn subscriber_installs_once() {
    let first = init_tracing_with("slope_chart=trace");
    let second = init_default_tracing();
    assert!(!(first && second));

    // Traced paths keep working with a live subscriber.
    let mut engine = plotted("x^2");
    engine
        .zoom(ChartId::Function, ViewTransform::new(10.0, 0.0, 2.0))
        .expect("zoom");
    assert_eq!(engine.view_state().suppressed_events(), 2);
}

#[test]
fn engine_runs_without_a_subscriber() {
    let mut engine = plotted("sin(x)");
    engine
        .zoom(ChartId::Derivative, ViewTransform::new(0.0, 5.0, 1.0))
        .expect("zoom");
    assert_eq!(engine.view_state().y_pan(ChartId::Derivative), 5.0);
}
