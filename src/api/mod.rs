mod chart_builder;
mod chart_context;
mod engine;
mod engine_accessors;
mod engine_config;
mod formula_panel;
mod grid_renderer;
mod hover_coordinator;
mod plugin_dispatch;
mod plugin_registry;
mod snapshot;
mod transform_coordinator;
mod view_state;

pub use chart_context::{ChartContext, ChartSeries};
pub use engine::DualChartEngine;
pub use engine_config::{ChartMargins, ChartStyle, DualChartConfig, FormulaTiming, ToneColors};
pub use formula_panel::{
    FormulaFragments, FormulaLayout, FormulaMeasure, FormulaPanel, FormulaSlot,
    FormulaTypesetter, LayoutChange, LayoutTrigger,
};
pub use grid_renderer::{render_axes, render_grid};
pub use hover_coordinator::{HoverReadout, SlopeTone};
pub use snapshot::{
    ChartSnapshot, VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshot, ViewSnapshotJsonContractV1,
};
pub use view_state::{RecomputeGuard, ViewState};

pub use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
