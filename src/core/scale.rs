use serde::{Deserialize, Serialize};

use crate::core::ticks::{tick_step, ticks};
use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a data domain to a pixel range.
///
/// The range may be inverted (`r0 > r1`), which is how y axes map larger
/// values towards the top of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() || range.0 == range.1 {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Returns `true` when `value` lies inside the domain, edges included.
    #[must_use]
    pub fn domain_contains(self, value: f64) -> bool {
        let lo = self.domain_start.min(self.domain_end);
        let hi = self.domain_start.max(self.domain_end);
        (lo..=hi).contains(&value)
    }

    /// Maps a data value to pixel space. Non-finite input yields non-finite output.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel coordinate back to data space.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Same range, new domain.
    pub fn with_domain(self, domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        Self::new(
            (domain_start, domain_end),
            (self.range_start, self.range_end),
        )
    }

    /// Approximately `count` evenly spaced round values inside the domain.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        ticks(self.domain_start, self.domain_end, count)
    }

    /// Step between the values returned by [`LinearScale::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        tick_step(self.domain_start, self.domain_end, count)
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn inverted_range_maps_domain_max_to_top() {
        let scale = LinearScale::new((-10.0, 10.0), (250.0, 0.0)).expect("valid scale");
        assert_eq!(scale.map(10.0), 0.0);
        assert_eq!(scale.map(-10.0), 250.0);
        assert_eq!(scale.map(0.0), 125.0);
    }

    #[test]
    fn degenerate_range_is_rejected() {
        assert!(LinearScale::new((0.0, 1.0), (5.0, 5.0)).is_err());
        assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 5.0)).is_err());
    }
}
