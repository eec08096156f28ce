mod common;

use approx::assert_relative_eq;
use common::plotted;
use proptest::prelude::*;
use slope_chart::core::{ChartId, Domain, LinearScale, ViewTransform};

fn finite_value() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6_f64
}

fn zoom_step() -> impl Strategy<Value = (bool, f64, f64, f64)> {
    (any::<bool>(), -400.0..400.0_f64, -200.0..200.0_f64, 0.01..20.0_f64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn centered_domain_is_symmetric_and_covers_the_input(
        values in prop::collection::vec(finite_value(), 1..64)
    ) {
        let domain = Domain::centered(values.iter().copied());
        prop_assert_eq!(domain.min, -domain.max);
        prop_assert!(domain.max >= 1.0);
        for value in &values {
            prop_assert!(domain.contains(*value));
        }
    }

    #[test]
    fn scale_inverts_its_own_mapping(
        half_width in 1.0..1.0e4_f64,
        pixels in 10.0..2_000.0_f64,
        value in -1.0e4..1.0e4_f64,
    ) {
        let scale = LinearScale::new((-half_width, half_width), (0.0, pixels))
            .expect("valid scale");
        let round_trip = scale.invert(scale.map(value));
        assert_relative_eq!(round_trip, value, epsilon = 1e-6, max_relative = 1e-9);
    }

    #[test]
    fn rescaled_scale_tracks_the_transformed_pixels(
        x in -500.0..500.0_f64,
        k in 0.1..10.0_f64,
        pixel in 0.0..630.0_f64,
    ) {
        let original = LinearScale::new((-22.0, 22.0), (0.0, 630.0)).expect("valid scale");
        let transform = ViewTransform::new(x, 0.0, k);
        let rescaled = transform.rescale_x(original).expect("rescale");
        let expected = original.invert(transform.invert_x(pixel));
        assert_relative_eq!(rescaled.invert(pixel), expected, epsilon = 1e-9, max_relative = 1e-9);
    }

    #[test]
    fn identity_rescale_leaves_the_domain_unchanged(
        half_width in 0.5..1.0e5_f64,
    ) {
        let original = LinearScale::new((-half_width, half_width), (250.0, 0.0))
            .expect("valid scale");
        let once = ViewTransform::IDENTITY.rescale_y(original).expect("rescale");
        let twice = ViewTransform::IDENTITY.rescale_y(once).expect("rescale");
        assert_relative_eq!(twice.domain().0, original.domain().0, max_relative = 1e-12);
        assert_relative_eq!(twice.domain().1, original.domain().1, max_relative = 1e-12);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn both_charts_always_share_zoom_and_x_domain(
        steps in prop::collection::vec(zoom_step(), 1..8)
    ) {
        let mut engine = plotted("sin(x)");
        let mut last_pans = [0.0, 0.0];
        for (on_derivative, x, y, k) in steps {
            let chart = if on_derivative { ChartId::Derivative } else { ChartId::Function };
            engine.zoom(chart, ViewTransform::new(x, y, k)).expect("zoom");
            last_pans[chart.index()] = y;

            let view = engine.view_state();
            prop_assert!((0.1..=10.0).contains(&view.shared_zoom()));
            prop_assert_eq!(view.y_pans(), last_pans);

            let function = engine.chart(ChartId::Function).expect("function chart");
            let derivative = engine.chart(ChartId::Derivative).expect("derivative chart");
            prop_assert_eq!(function.x_scale().domain(), derivative.x_scale().domain());
            for context in [function, derivative] {
                let overlay = context.overlay().transform();
                prop_assert_eq!(overlay.k, view.shared_zoom());
                prop_assert_eq!(overlay.x, view.shared_x().x);
                prop_assert_eq!(overlay.y, view.y_pan(context.chart()));
            }
        }
    }
}
