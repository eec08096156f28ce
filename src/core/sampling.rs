use serde::{Deserialize, Serialize};

use crate::core::expression::CompiledFunction;
use crate::core::{DerivativeSample, FunctionSample};
use crate::error::{ChartError, ChartResult};

/// Fixed x grid `start, start + step, ...` strictly below `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleGrid {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl Default for SampleGrid {
    fn default() -> Self {
        // The stop sits just past 20 so that x = 20 is sampled.
        Self {
            start: -20.0,
            stop: 20.01,
            step: 0.05,
        }
    }
}

impl SampleGrid {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.start.is_finite() || !self.stop.is_finite() || !self.step.is_finite() {
            return Err(ChartError::InvalidData(
                "sample grid bounds and step must be finite".to_owned(),
            ));
        }
        if self.step <= 0.0 || self.stop <= self.start {
            return Err(ChartError::InvalidData(
                "sample grid requires step > 0 and stop > start".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn len(self) -> usize {
        let count = ((self.stop - self.start) / self.step).ceil();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Grid values computed as `start + i * step` to avoid drift.
    pub fn xs(self) -> impl Iterator<Item = f64> {
        (0..self.len()).map(move |index| self.start + index as f64 * self.step)
    }
}

/// Parallel function and derivative samples on one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSeries {
    pub function: Vec<FunctionSample>,
    pub derivative: Vec<DerivativeSample>,
}

/// Evaluates `compiled` and its derivative on every grid value.
///
/// Evaluation errors propagate; non-finite values are kept and later break the
/// projected path.
pub fn sample_series(compiled: &CompiledFunction, grid: SampleGrid) -> ChartResult<SampledSeries> {
    let grid = grid.validate()?;
    let mut function = Vec::with_capacity(grid.len());
    let mut derivative = Vec::with_capacity(grid.len());
    for x in grid.xs() {
        function.push(FunctionSample::new(x, compiled.value_at(x)?));
        derivative.push(DerivativeSample::new(x, compiled.slope_at(x)?));
    }
    Ok(SampledSeries {
        function,
        derivative,
    })
}
