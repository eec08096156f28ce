mod snap;
mod zoom_overlay;

use serde::{Deserialize, Serialize};

use crate::core::ChartId;

pub use snap::{SnapDecision, SnapTuning, resolve_snap};
pub use zoom_overlay::{ZoomEvent, ZoomEventSource, ZoomOverlay};

/// Pointer state machine of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerPhase {
    #[default]
    Idle,
    Hovering,
    Dragging,
}

/// Hover snap state shared by both charts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub snapped_x: Option<f64>,
    pub visible: bool,
}

/// Pointer phases of both charts plus the shared hover state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    phases: [PointerPhase; 2],
    hover: HoverState,
}

impl InteractionState {
    #[must_use]
    pub fn phase(self, chart: ChartId) -> PointerPhase {
        self.phases[chart.index()]
    }

    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    /// Hover is suppressed on both charts while either one is dragged.
    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.phases.contains(&PointerPhase::Dragging)
    }

    /// Returns `true` when hover elements should become visible.
    pub fn on_pointer_over(&mut self, chart: ChartId) -> bool {
        let phase = &mut self.phases[chart.index()];
        if *phase == PointerPhase::Idle {
            *phase = PointerPhase::Hovering;
        }
        if self.is_dragging() {
            return false;
        }
        self.hover.visible = true;
        true
    }

    pub fn on_pointer_out(&mut self, chart: ChartId) {
        let phase = &mut self.phases[chart.index()];
        if *phase == PointerPhase::Hovering {
            *phase = PointerPhase::Idle;
        }
        self.hover.visible = false;
        self.hover.snapped_x = None;
    }

    pub fn on_drag_start(&mut self, chart: ChartId) {
        self.phases[chart.index()] = PointerPhase::Dragging;
        self.hover.visible = false;
    }

    pub fn on_drag_end(&mut self, chart: ChartId) {
        let phase = &mut self.phases[chart.index()];
        if *phase == PointerPhase::Dragging {
            *phase = PointerPhase::Hovering;
        }
    }

    pub fn set_snapped_x(&mut self, snapped_x: Option<f64>) {
        self.hover.snapped_x = snapped_x;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
