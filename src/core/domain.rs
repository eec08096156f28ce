use serde::{Deserialize, Serialize};

use crate::core::{DerivativeSample, FunctionSample};
use crate::error::{ChartError, ChartResult};

const PADDING_RATIO: f64 = 0.10;
const MIN_PADDING: f64 = 1.0;

/// Symmetric display interval `[-max, max]` for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Builds the padded symmetric domain covering `values`.
    ///
    /// Non-finite values are ignored; with nothing finite left the result is
    /// `[-1, 1]`.
    #[must_use]
    pub fn centered(values: impl IntoIterator<Item = f64>) -> Self {
        let max_abs = values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(0.0_f64, |acc, value| acc.max(value.abs()));
        let padding = (max_abs * PADDING_RATIO).max(MIN_PADDING);
        let max = max_abs + padding;
        Self { min: -max, max }
    }

    #[must_use]
    pub fn as_tuple(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Display domains for both charts: shared x, function y and derivative y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayDomains {
    pub x: Domain,
    pub y: Domain,
    pub dy: Domain,
}

/// Computes the symmetric domains both charts are built from.
pub fn compute_display_domains(
    function: &[FunctionSample],
    derivative: &[DerivativeSample],
) -> ChartResult<DisplayDomains> {
    if function.is_empty() || derivative.is_empty() {
        return Err(ChartError::InvalidData(
            "domain calculation requires non-empty sample sequences".to_owned(),
        ));
    }

    Ok(DisplayDomains {
        x: Domain::centered(function.iter().map(|sample| sample.x)),
        y: Domain::centered(function.iter().map(|sample| sample.y)),
        dy: Domain::centered(derivative.iter().map(|sample| sample.dy)),
    })
}
