use std::time::Duration;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ChartId, CompiledFunction, ExpressionCompiler, ViewTransform};
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::interaction::{InteractionState, ZoomEvent, ZoomEventSource};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::error::ChartError;
#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::chart_builder::ChartBuilder;
use super::chart_context::ChartContext;
use super::hover_coordinator::HoverCoordinator;
use super::transform_coordinator::TransformCoordinator;
use super::{
    DualChartConfig, FormulaPanel, FormulaTypesetter, HoverReadout, PluginEvent, ViewState,
};

/// Main orchestration facade consumed by host applications.
///
/// `DualChartEngine` owns both chart contexts, the shared view state, pointer
/// state and the formula panel. Hosts forward input events and call
/// [`DualChartEngine::render`] whenever they want frames.
pub struct DualChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) compiler: Box<dyn ExpressionCompiler>,
    pub(super) config: DualChartConfig,
    pub(super) charts: IndexMap<ChartId, ChartContext>,
    pub(super) function: Option<CompiledFunction>,
    pub(super) view: ViewState,
    pub(super) interaction: InteractionState,
    pub(super) formula: FormulaPanel,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> DualChartEngine<R> {
    /// Creates an engine with no plot; call [`Self::plot`] or
    /// [`Self::plot_initial`] before dispatching zoom or hover input.
    pub fn new(
        renderer: R,
        compiler: Box<dyn ExpressionCompiler>,
        config: DualChartConfig,
    ) -> ChartResult<Self> {
        config.validate()?;
        let formula = FormulaPanel::new(config.formula_timing);
        Ok(Self {
            renderer,
            compiler,
            config,
            charts: IndexMap::new(),
            function: None,
            view: ViewState::default(),
            interaction: InteractionState::default(),
            formula,
            plugins: Vec::new(),
        })
    }

    pub fn set_formula_typesetter(&mut self, typesetter: Box<dyn FormulaTypesetter>) {
        self.formula.set_typesetter(typesetter);
    }

    /// Replaces both charts with a plot of `source`.
    pub fn plot(&mut self, source: &str) -> ChartResult<()> {
        ChartBuilder::plot(self, source)
    }

    /// Plots the configured initial expression.
    pub fn plot_initial(&mut self) -> ChartResult<()> {
        let source = self.config.initial_expression.clone();
        self.plot(&source)
    }

    pub fn zoom_start(&mut self, chart: ChartId) {
        TransformCoordinator::on_zoom_start(self, chart);
    }

    /// Applies a zoom transform reported for `chart`.
    pub fn zoom(&mut self, chart: ChartId, transform: ViewTransform) -> ChartResult<()> {
        TransformCoordinator::on_zoom_event(
            self,
            ZoomEvent {
                chart,
                transform,
                source: ZoomEventSource::Gesture,
            },
        )
    }

    pub fn zoom_end(&mut self, chart: ChartId) {
        TransformCoordinator::on_zoom_end(self, chart);
    }

    /// Wheel zoom around plot-local `(px, py)` on `chart`.
    ///
    /// Returns `false` when nothing changed, including before the first plot.
    pub fn wheel(&mut self, chart: ChartId, px: f64, py: f64, delta: f64) -> ChartResult<bool> {
        let Some(context) = self.charts.get_mut(&chart) else {
            debug!(?chart, "wheel ignored: chart is not plotted");
            return Ok(false);
        };
        let Some(event) = context.overlay.wheel(px, py, delta)? else {
            return Ok(false);
        };
        TransformCoordinator::on_zoom_start(self, chart);
        let result = TransformCoordinator::on_zoom_event(self, event);
        TransformCoordinator::on_zoom_end(self, chart);
        result.map(|()| true)
    }

    pub fn drag_start(&mut self, chart: ChartId, px: f64, py: f64) -> ChartResult<()> {
        let Some(context) = self.charts.get_mut(&chart) else {
            debug!(?chart, "drag ignored: chart is not plotted");
            return Ok(());
        };
        context.overlay.drag_start(px, py)?;
        TransformCoordinator::on_zoom_start(self, chart);
        Ok(())
    }

    /// Pans `chart` so the grabbed point follows the pointer.
    ///
    /// Returns `false` outside a drag or when the pointer did not move.
    pub fn drag_move(&mut self, chart: ChartId, px: f64, py: f64) -> ChartResult<bool> {
        let Some(context) = self.charts.get_mut(&chart) else {
            return Ok(false);
        };
        let Some(event) = context.overlay.drag_move(px, py)? else {
            return Ok(false);
        };
        TransformCoordinator::on_zoom_event(self, event)?;
        Ok(true)
    }

    pub fn drag_end(&mut self, chart: ChartId) {
        if let Some(context) = self.charts.get_mut(&chart) {
            context.overlay.drag_end();
        }
        TransformCoordinator::on_zoom_end(self, chart);
    }

    pub fn pointer_over(&mut self, chart: ChartId) {
        HoverCoordinator::pointer_over(self, chart);
    }

    /// Hover at plot-local `(px, py)` of `chart`.
    pub fn pointer_move(
        &mut self,
        chart: ChartId,
        px: f64,
        py: f64,
    ) -> ChartResult<Option<HoverReadout>> {
        HoverCoordinator::pointer_move(self, chart, px, py)
    }

    pub fn pointer_out(&mut self, chart: ChartId) {
        HoverCoordinator::pointer_out(self, chart);
    }

    /// Host window resized at `now`; restarts the formula layout debounce.
    pub fn window_resized(&mut self, now: Duration) {
        self.formula.on_window_resize(now);
    }

    /// Runs time-based work due at `now`.
    ///
    /// Returns `true` when a formula layout changed.
    pub fn poll(&mut self, now: Duration) -> bool {
        let changes = self.formula.poll(now);
        for &(slot, layout) in &changes {
            self.emit_plugin_event(PluginEvent::LayoutChanged { slot, layout });
        }
        !changes.is_empty()
    }

    /// Renders both charts, function chart first.
    pub fn render(&mut self) -> ChartResult<()> {
        if self.charts.is_empty() {
            return Ok(());
        }
        for context in self.charts.values() {
            let frame = context.scene.to_frame();
            self.renderer.render(&frame)?;
        }
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Renders both charts into an external cairo context, stacked vertically.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let mut offset_y = 0.0;
        for chart in self.charts.values() {
            let frame = chart.scene.to_frame();
            context.save().map_err(|err| {
                ChartError::InvalidData(format!("failed to save cairo context: {err}"))
            })?;
            context.translate(0.0, offset_y);
            let result = self.renderer.render_on_cairo_context(context, &frame);
            context.restore().map_err(|err| {
                ChartError::InvalidData(format!("failed to restore cairo context: {err}"))
            })?;
            result?;
            offset_y += f64::from(frame.viewport.height);
        }
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
