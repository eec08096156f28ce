use crate::core::{ChartId, LinearScale};
use crate::interaction::InteractionState;
use crate::render::{ChartScene, Renderer};

use super::chart_context::ChartContext;
use super::{DualChartConfig, DualChartEngine, FormulaPanel, ViewState};

impl<R: Renderer> DualChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &DualChartConfig {
        &self.config
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    #[must_use]
    pub fn is_plotted(&self) -> bool {
        ChartId::ALL
            .iter()
            .all(|chart| self.charts.contains_key(chart))
    }

    /// Source text of the current plot, trimmed.
    #[must_use]
    pub fn expression(&self) -> Option<&str> {
        self.function.as_ref().map(|compiled| compiled.source.as_str())
    }

    #[must_use]
    pub fn chart(&self, chart: ChartId) -> Option<&ChartContext> {
        self.charts.get(&chart)
    }

    #[must_use]
    pub fn scene(&self, chart: ChartId) -> Option<&ChartScene> {
        self.charts.get(&chart).map(ChartContext::scene)
    }

    /// Current shared x scale.
    #[must_use]
    pub fn x_scale(&self) -> Option<LinearScale> {
        self.charts.values().next().map(ChartContext::x_scale)
    }

    /// Current value scale of `chart`.
    #[must_use]
    pub fn y_scale(&self, chart: ChartId) -> Option<LinearScale> {
        self.charts.get(&chart).map(ChartContext::y_scale)
    }

    #[must_use]
    pub fn formula_panel(&self) -> &FormulaPanel {
        &self.formula
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
