use serde::{Deserialize, Serialize};

use crate::api::{FormulaLayout, FormulaSlot};
use crate::core::{ChartId, ViewTransform};
use crate::interaction::HoverState;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub shared_transform: ViewTransform,
    pub y_pans: [f64; 2],
    pub sample_count: usize,
    pub hover: HoverState,
    pub dragging: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    Plotted { sample_count: usize },
    ZoomChanged { chart: ChartId, transform: ViewTransform },
    HoverMoved { x: f64, y: f64, slope: f64 },
    SnapChanged { snapped_x: Option<f64> },
    HoverHidden,
    LayoutChanged { slot: FormulaSlot, layout: FormulaLayout },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read engine context without mutating core
/// internals directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
