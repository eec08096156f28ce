use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    ChartId, CompiledFunction, DisplayDomains, LinearScale, SampledSeries,
    compute_display_domains, sample_series,
};
use crate::error::ChartResult;
use crate::interaction::ZoomOverlay;
use crate::render::{
    ChartScene, CirclePrimitive, Color, ElementClass, LinePrimitive, Primitive, RectPrimitive,
    Renderer, TextHAlign, TextPrimitive,
};

use super::chart_context::{ChartContext, ChartSeries};
use super::grid_renderer::{render_axes, render_grid};
use super::{DualChartConfig, DualChartEngine, FormulaFragments, PluginEvent};

pub(super) struct ChartBuilder;

impl ChartBuilder {
    /// Compiles, samples and draws both charts from scratch.
    ///
    /// Everything fallible runs before the previous plot is touched, so a
    /// rejected expression leaves the current charts intact.
    pub(super) fn plot<R: Renderer>(
        engine: &mut DualChartEngine<R>,
        source: &str,
    ) -> ChartResult<()> {
        let compiled = CompiledFunction::compile(engine.compiler.as_ref(), source)?;
        let series = sample_series(&compiled, engine.config.sample_grid)?;
        let domains = compute_display_domains(&series.function, &series.derivative)?;
        let sample_count = series.function.len();
        let charts = Self::build_charts(&engine.config, domains, series)?;

        let fragments = FormulaFragments::new(
            &compiled.function.notation(),
            &compiled.derivative.notation(),
        );
        debug!(
            source = %compiled.source,
            sample_count,
            x_max = domains.x.max,
            y_max = domains.y.max,
            dy_max = domains.dy.max,
            "plotted expression"
        );

        engine.charts = charts;
        engine.function = Some(compiled);
        engine.view.reset();
        engine.interaction.reset();
        engine.formula.show(fragments);
        engine.emit_plugin_event(PluginEvent::Plotted { sample_count });
        Ok(())
    }

    fn build_charts(
        config: &DualChartConfig,
        domains: DisplayDomains,
        series: SampledSeries,
    ) -> ChartResult<IndexMap<ChartId, ChartContext>> {
        let SampledSeries {
            function,
            derivative,
        } = series;
        let mut charts = IndexMap::with_capacity(ChartId::ALL.len());
        charts.insert(
            ChartId::Function,
            Self::build_chart(
                config,
                ChartId::Function,
                domains,
                ChartSeries::Function(function),
            )?,
        );
        charts.insert(
            ChartId::Derivative,
            Self::build_chart(
                config,
                ChartId::Derivative,
                domains,
                ChartSeries::Derivative(derivative),
            )?,
        );
        Ok(charts)
    }

    fn build_chart(
        config: &DualChartConfig,
        chart: ChartId,
        domains: DisplayDomains,
        series: ChartSeries,
    ) -> ChartResult<ChartContext> {
        let (width, height) = config.plot_size(chart);
        let value_domain = match chart {
            ChartId::Function => domains.y,
            ChartId::Derivative => domains.dy,
        };
        let x_scale = LinearScale::new(domains.x.as_tuple(), (0.0, width))?;
        let y_scale = LinearScale::new(value_domain.as_tuple(), (height, 0.0))?;
        let overlay = ZoomOverlay::new(
            chart,
            width,
            height,
            config.scale_extent,
            config.wheel_sensitivity,
        )?;
        let scene = ChartScene::new(
            chart,
            config.container(chart),
            (config.margins.left, config.margins.top),
        );

        let mut context = ChartContext {
            chart,
            width,
            height,
            original_x: x_scale,
            original_y: y_scale,
            x_scale,
            y_scale,
            series,
            overlay,
            scene,
        };

        let style = config.style;
        context.sync_sign_regions(&style);
        render_grid(
            &mut context.scene,
            x_scale,
            y_scale,
            width,
            height,
            config.tick_count,
            &style,
        );
        render_axes(
            &mut context.scene,
            x_scale,
            y_scale,
            height,
            config.tick_count,
            &style,
        );
        context.sync_series_path(&style);
        Self::push_hover_elements(&mut context.scene, config);
        context.scene.push(
            ElementClass::ZoomOverlay,
            Primitive::Rect(RectPrimitive::new(
                0.0,
                0.0,
                width,
                height,
                Color::TRANSPARENT,
            )),
        );
        Ok(context)
    }

    /// Hover elements start hidden at the origin until the first pointer move.
    fn push_hover_elements(scene: &mut ChartScene, config: &DualChartConfig) {
        let style = config.style;
        let tone = match scene.chart() {
            ChartId::Function => style.flat_tone,
            ChartId::Derivative => style.derivative_hover,
        };
        scene.push_hidden(
            ElementClass::HoverMarker,
            Primitive::Circle(CirclePrimitive::new(
                0.0,
                0.0,
                style.hover_marker_radius,
                tone.fill,
                tone.stroke,
            )),
        );
        let label = match scene.chart() {
            ChartId::Function => {
                scene.push_hidden(
                    ElementClass::TangentLine,
                    Primitive::Line(LinePrimitive::new(
                        0.0,
                        0.0,
                        0.0,
                        0.0,
                        style.tangent_line_width,
                        tone.stroke,
                    )),
                );
                "m = 0.00"
            }
            ChartId::Derivative => "y = 0.00",
        };
        scene.push_hidden(
            ElementClass::HoverLabel,
            Primitive::Text(TextPrimitive::new(
                label,
                0.0,
                0.0,
                style.hover_font_size_px,
                tone.stroke,
                TextHAlign::Left,
            )),
        );
    }
}
