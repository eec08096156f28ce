//! Formula display boundary.
//!
//! Typesetting and measuring happen in a host collaborator. The panel hands it
//! the AsciiMath fragments of the current plot, then picks a layout for each
//! formula once the typeset output has settled or the window has stopped
//! resizing. Time is supplied by the host, so the panel never sleeps or spawns.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::error::ChartResult;

use super::FormulaTiming;

/// One of the two typeset formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormulaSlot {
    Function,
    Derivative,
}

impl FormulaSlot {
    pub const ALL: [FormulaSlot; 2] = [FormulaSlot::Function, FormulaSlot::Derivative];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Function => 0,
            Self::Derivative => 1,
        }
    }
}

/// AsciiMath sources, backtick-delimited, for both formulas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaFragments {
    pub function: String,
    pub derivative: String,
}

impl FormulaFragments {
    #[must_use]
    pub fn new(function_notation: &str, derivative_notation: &str) -> Self {
        Self {
            function: format!("`f(x) = {function_notation}`"),
            derivative: format!("`f'(x) = {derivative_notation}`"),
        }
    }

    #[must_use]
    pub fn get(&self, slot: FormulaSlot) -> &str {
        match slot {
            FormulaSlot::Function => &self.function,
            FormulaSlot::Derivative => &self.derivative,
        }
    }
}

/// Rendered width of a formula against the width available to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormulaMeasure {
    pub math_width: f64,
    pub container_width: f64,
}

/// Placement of a formula relative to its chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormulaLayout {
    SideBySide,
    Stacked,
}

impl FormulaLayout {
    /// Stacks the formula when it is wider than its container.
    #[must_use]
    pub fn for_measure(measure: FormulaMeasure) -> Self {
        if measure.math_width > measure.container_width {
            Self::Stacked
        } else {
            Self::SideBySide
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::SideBySide => "side-by-side-layout",
            Self::Stacked => "stacked-layout",
        }
    }
}

/// Host-side math typesetter.
pub trait FormulaTypesetter {
    fn typeset(&mut self, fragments: &FormulaFragments) -> ChartResult<()>;

    /// Returns `None` while the slot has no typeset output.
    fn measure(&self, slot: FormulaSlot) -> Option<FormulaMeasure>;
}

/// Why a layout pass was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutTrigger {
    TypesetSettled,
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingLayout {
    due: Duration,
    trigger: LayoutTrigger,
}

/// Layout change produced by a pass.
pub type LayoutChange = (FormulaSlot, FormulaLayout);

pub struct FormulaPanel {
    typesetter: Option<Box<dyn FormulaTypesetter>>,
    timing: FormulaTiming,
    now: Duration,
    fragments: Option<FormulaFragments>,
    layouts: [Option<FormulaLayout>; 2],
    pending: SmallVec<[PendingLayout; 4]>,
    typeset_failures: u64,
}

impl fmt::Debug for FormulaPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormulaPanel")
            .field("has_typesetter", &self.typesetter.is_some())
            .field("now", &self.now)
            .field("fragments", &self.fragments)
            .field("layouts", &self.layouts)
            .field("pending", &self.pending)
            .field("typeset_failures", &self.typeset_failures)
            .finish()
    }
}

impl FormulaPanel {
    #[must_use]
    pub fn new(timing: FormulaTiming) -> Self {
        Self {
            typesetter: None,
            timing,
            now: Duration::ZERO,
            fragments: None,
            layouts: [None; 2],
            pending: SmallVec::new(),
            typeset_failures: 0,
        }
    }

    pub fn set_typesetter(&mut self, typesetter: Box<dyn FormulaTypesetter>) {
        self.typesetter = Some(typesetter);
    }

    #[must_use]
    pub fn has_typesetter(&self) -> bool {
        self.typesetter.is_some()
    }

    #[must_use]
    pub fn fragments(&self) -> Option<&FormulaFragments> {
        self.fragments.as_ref()
    }

    #[must_use]
    pub fn layout(&self, slot: FormulaSlot) -> Option<FormulaLayout> {
        self.layouts[slot.index()]
    }

    #[must_use]
    pub fn layouts(&self) -> [Option<FormulaLayout>; 2] {
        self.layouts
    }

    #[must_use]
    pub fn pending_passes(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn typeset_failures(&self) -> u64 {
        self.typeset_failures
    }

    /// Last time seen through [`Self::poll`] or [`Self::on_window_resize`].
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Typesets new fragments and schedules the settle pass.
    ///
    /// A typesetter error is logged and swallowed; the previous layouts stay.
    /// Returns `true` when typesetting succeeded.
    pub fn show(&mut self, fragments: FormulaFragments) -> bool {
        let outcome = self
            .typesetter
            .as_mut()
            .map(|typesetter| typesetter.typeset(&fragments));
        self.fragments = Some(fragments);

        match outcome {
            None => {
                debug!("no formula typesetter attached; fragments stored only");
                false
            }
            Some(Err(err)) => {
                self.typeset_failures += 1;
                warn!(error = %err, "formula typesetting failed");
                false
            }
            Some(Ok(())) => {
                self.pending.push(PendingLayout {
                    due: self.now + self.timing.settle_delay(),
                    trigger: LayoutTrigger::TypesetSettled,
                });
                true
            }
        }
    }

    /// Restarts the resize debounce window.
    pub fn on_window_resize(&mut self, now: Duration) {
        self.advance(now);
        self.pending
            .retain(|task| task.trigger != LayoutTrigger::Resize);
        self.pending.push(PendingLayout {
            due: self.now + self.timing.resize_debounce(),
            trigger: LayoutTrigger::Resize,
        });
    }

    /// Runs the layout pass if any scheduled pass is due at `now`.
    ///
    /// Several due passes collapse into one. Returns the slots whose layout
    /// changed.
    pub fn poll(&mut self, now: Duration) -> SmallVec<[LayoutChange; 2]> {
        self.advance(now);
        let before = self.pending.len();
        let current = self.now;
        self.pending.retain(|task| task.due > current);
        if self.pending.len() == before {
            return SmallVec::new();
        }
        self.fit_layouts()
    }

    fn advance(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }

    fn fit_layouts(&mut self) -> SmallVec<[LayoutChange; 2]> {
        let mut changes = SmallVec::new();
        let Some(typesetter) = self.typesetter.as_ref() else {
            return changes;
        };
        for slot in FormulaSlot::ALL {
            let Some(measure) = typesetter.measure(slot) else {
                continue;
            };
            let layout = FormulaLayout::for_measure(measure);
            let entry = &mut self.layouts[slot.index()];
            if *entry != Some(layout) {
                *entry = Some(layout);
                changes.push((slot, layout));
            }
        }
        changes
    }
}
