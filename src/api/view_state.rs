use serde::{Deserialize, Serialize};

use crate::core::{ChartId, ScaleExtent, ViewTransform};

/// Re-entrancy guard around a full transform recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecomputeGuard {
    #[default]
    Idle,
    Recomputing,
}

/// Shared x zoom/pan plus the independent vertical pan of each chart.
///
/// `shared_x` never carries a vertical component; each chart's combined
/// transform is `{ shared_x.x, y_pans[i], shared_zoom }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    shared_x: ViewTransform,
    shared_zoom: f64,
    y_pans: [f64; 2],
    guard: RecomputeGuard,
    suppressed_events: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            shared_x: ViewTransform::IDENTITY,
            shared_zoom: 1.0,
            y_pans: [0.0; 2],
            guard: RecomputeGuard::Idle,
            suppressed_events: 0,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn shared_x(self) -> ViewTransform {
        self.shared_x
    }

    #[must_use]
    pub fn shared_zoom(self) -> f64 {
        self.shared_zoom
    }

    #[must_use]
    pub fn y_pan(self, chart: ChartId) -> f64 {
        self.y_pans[chart.index()]
    }

    #[must_use]
    pub fn y_pans(self) -> [f64; 2] {
        self.y_pans
    }

    #[must_use]
    pub fn guard(self) -> RecomputeGuard {
        self.guard
    }

    /// Synthetic zoom events swallowed by the guard since the last reset.
    #[must_use]
    pub fn suppressed_events(self) -> u64 {
        self.suppressed_events
    }

    /// Effective transform of one chart.
    #[must_use]
    pub fn combined(self, chart: ChartId) -> ViewTransform {
        ViewTransform::new(self.shared_x.x, self.y_pan(chart), self.shared_zoom)
    }

    /// Folds a zoom event of `chart` into the shared state.
    ///
    /// Only the originating chart's vertical pan is taken from the event.
    pub(crate) fn apply_zoom(&mut self, chart: ChartId, transform: ViewTransform, extent: ScaleExtent) {
        let k = extent.clamp(transform.k);
        self.shared_zoom = k;
        self.shared_x = ViewTransform::new(transform.x, 0.0, k);
        self.y_pans[chart.index()] = transform.y;
    }

    /// Enters `Recomputing`; returns `false` when a recompute is already running.
    pub(crate) fn begin_recompute(&mut self) -> bool {
        if self.guard == RecomputeGuard::Recomputing {
            return false;
        }
        self.guard = RecomputeGuard::Recomputing;
        true
    }

    pub(crate) fn end_recompute(&mut self) {
        self.guard = RecomputeGuard::Idle;
    }

    #[must_use]
    pub fn is_recomputing(self) -> bool {
        self.guard == RecomputeGuard::Recomputing
    }

    pub(crate) fn note_suppressed(&mut self) {
        self.suppressed_events += 1;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
