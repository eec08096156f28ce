use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Identity of one of the two linked charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChartId {
    /// Upper chart plotting `f(x)`.
    Function,
    /// Lower chart plotting `f'(x)`.
    Derivative,
}

impl ChartId {
    pub const ALL: [ChartId; 2] = [ChartId::Function, ChartId::Derivative];

    /// Dense index for per-chart arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Function => 0,
            Self::Derivative => 1,
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Function => Self::Derivative,
            Self::Derivative => Self::Function,
        }
    }
}

/// One evaluation of the plotted function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FunctionSample {
    pub x: f64,
    pub y: f64,
}

impl FunctionSample {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One evaluation of the derivative on the same x grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivativeSample {
    pub x: f64,
    pub dy: f64,
}

impl DerivativeSample {
    #[must_use]
    pub fn new(x: f64, dy: f64) -> Self {
        Self { x, dy }
    }
}
