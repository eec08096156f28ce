use serde::{Deserialize, Serialize};

use crate::core::{ChartId, ViewTransform};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, PointerPhase};
use crate::render::{Primitive, Renderer};

use super::{DualChartEngine, FormulaLayout};

pub const VIEW_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Scale state of one chart at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub chart: ChartId,
    pub plot_size: (f64, f64),
    pub original_x_domain: (f64, f64),
    pub original_y_domain: (f64, f64),
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub overlay_transform: ViewTransform,
    pub line_vertices: usize,
}

/// Deterministic engine state, useful for fixture-based regression tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub expression: Option<String>,
    pub shared_transform: ViewTransform,
    pub shared_zoom: f64,
    pub y_pans: [f64; 2],
    pub charts: Vec<ChartSnapshot>,
    pub hover: HoverState,
    pub pointer_phases: [PointerPhase; 2],
    pub suppressed_zoom_events: u64,
    pub formula_layouts: [Option<FormulaLayout>; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ViewSnapshot,
}

impl ViewSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ViewSnapshotJsonContractV1 {
            schema_version: VIEW_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ViewSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ViewSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != VIEW_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> DualChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        let charts = self
            .charts
            .values()
            .map(|context| {
                let line_vertices = context
                    .scene()
                    .first(context.series().line_class())
                    .map_or(0, |element| match &element.primitive {
                        Primitive::Path(path) => path.vertex_count(),
                        _ => 0,
                    });
                ChartSnapshot {
                    chart: context.chart(),
                    plot_size: context.plot_size(),
                    original_x_domain: context.original_x_scale().domain(),
                    original_y_domain: context.original_y_scale().domain(),
                    x_domain: context.x_scale().domain(),
                    y_domain: context.y_scale().domain(),
                    overlay_transform: context.overlay().transform(),
                    line_vertices,
                }
            })
            .collect();

        ViewSnapshot {
            expression: self.expression().map(str::to_owned),
            shared_transform: self.view.shared_x(),
            shared_zoom: self.view.shared_zoom(),
            y_pans: self.view.y_pans(),
            charts,
            hover: self.interaction.hover(),
            pointer_phases: ChartId::ALL.map(|chart| self.interaction.phase(chart)),
            suppressed_zoom_events: self.view.suppressed_events(),
            formula_layouts: self.formula.layouts(),
        }
    }

    /// Serializes the snapshot as pretty JSON.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
