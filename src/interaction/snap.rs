use serde::{Deserialize, Serialize};

use crate::core::DerivativeSample;
use crate::error::{ChartError, ChartResult};

/// Absorbs representation error at the inclusive band edges (`5.2 - 5.0`).
const BAND_EDGE_TOLERANCE: f64 = 1e-9;

/// Thresholds for magnetic snapping onto zero-slope samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapTuning {
    /// `|f'(x)|` below this counts as zero slope.
    pub derivative_epsilon: f64,
    /// Maximum x distance to acquire a snap.
    pub x_epsilon: f64,
    /// Release band is `x_epsilon * hysteresis_factor`.
    pub hysteresis_factor: f64,
    /// Tolerance used to re-identify the snapped sample.
    pub identity_tolerance: f64,
}

impl Default for SnapTuning {
    fn default() -> Self {
        Self {
            derivative_epsilon: 0.1,
            x_epsilon: 0.1,
            hysteresis_factor: 2.0,
            identity_tolerance: 0.01,
        }
    }
}

impl SnapTuning {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("derivative_epsilon", self.derivative_epsilon),
            ("x_epsilon", self.x_epsilon),
            ("identity_tolerance", self.identity_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "snap `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.hysteresis_factor.is_finite() || self.hysteresis_factor < 1.0 {
            return Err(ChartError::InvalidData(
                "snap hysteresis factor must be finite and >= 1".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn release_band(self) -> f64 {
        self.x_epsilon * self.hysteresis_factor
    }

    /// Slope shown to the user: near-zero values read as exactly zero.
    #[must_use]
    pub fn display_slope(self, raw: f64) -> f64 {
        if raw.abs() < self.derivative_epsilon {
            0.0
        } else {
            raw
        }
    }

    fn is_candidate(self, sample: &DerivativeSample) -> bool {
        sample.dy.abs() < self.derivative_epsilon
    }
}

/// Outcome of resolving one pointer position against the snap state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SnapDecision {
    /// No snap before or after; hover at the raw x.
    Free,
    /// A new snap was acquired at the given sample x.
    Acquired(f64),
    /// The existing snap still holds.
    Held(f64),
    /// The existing snap was dropped; hover at the raw x this move.
    Released,
}

impl SnapDecision {
    /// The x that hover feedback should use.
    #[must_use]
    pub fn resolved_x(self, raw_x: f64) -> f64 {
        match self {
            Self::Acquired(x) | Self::Held(x) => x,
            Self::Free | Self::Released => raw_x,
        }
    }

    /// Snap target to remember for the next move.
    #[must_use]
    pub fn snapped_x(self) -> Option<f64> {
        match self {
            Self::Acquired(x) | Self::Held(x) => Some(x),
            Self::Free | Self::Released => None,
        }
    }
}

/// Resolves the hover x for a pointer at data position `x0`.
///
/// An existing snap is kept while its sample is still a zero-slope candidate
/// and `x0` stays within the widened release band. A released snap is not
/// re-acquired on the same move. Without a snap, the first candidate in grid
/// order within `x_epsilon` is acquired.
#[must_use]
pub fn resolve_snap(
    x0: f64,
    derivative: &[DerivativeSample],
    snapped: Option<f64>,
    tuning: SnapTuning,
) -> SnapDecision {
    if !x0.is_finite() {
        return if snapped.is_some() {
            SnapDecision::Released
        } else {
            SnapDecision::Free
        };
    }

    let mut candidates = derivative.iter().filter(|sample| tuning.is_candidate(sample));

    match snapped {
        Some(target) => {
            let still_candidate = candidates
                .any(|sample| (sample.x - target).abs() < tuning.identity_tolerance);
            if still_candidate
                && (x0 - target).abs() <= tuning.release_band() + BAND_EDGE_TOLERANCE
            {
                SnapDecision::Held(target)
            } else {
                SnapDecision::Released
            }
        }
        None => candidates
            .find(|sample| (sample.x - x0).abs() <= tuning.x_epsilon + BAND_EDGE_TOLERANCE)
            .map_or(SnapDecision::Free, |sample| SnapDecision::Acquired(sample.x)),
    }
}

#[cfg(test)]
mod tests {
    use super::{SnapDecision, SnapTuning, resolve_snap};
    use crate::core::DerivativeSample;

    fn samples() -> Vec<DerivativeSample> {
        [(4.0, 1.0), (4.5, 0.5), (5.0, 0.0), (5.5, 0.5), (6.0, 1.0)]
            .into_iter()
            .map(|(x, dy)| DerivativeSample::new(x, dy))
            .collect()
    }

    #[test]
    fn lowest_in_band_candidate_wins_when_several_qualify() {
        let derivative = vec![
            DerivativeSample::new(0.9, 0.05),
            DerivativeSample::new(0.95, 0.05),
            DerivativeSample::new(1.0, 0.0),
            DerivativeSample::new(1.05, 0.05),
        ];
        let decision = resolve_snap(1.04, &derivative, None, SnapTuning::default());
        assert_eq!(decision, SnapDecision::Acquired(0.95));
    }

    #[test]
    fn release_does_not_resnap_on_the_same_move() {
        let decision = resolve_snap(5.05, &samples(), Some(4.5), SnapTuning::default());
        assert_eq!(decision, SnapDecision::Released);
        assert_eq!(decision.resolved_x(5.05), 5.05);
    }

    #[test]
    fn display_slope_zeroes_small_values() {
        let tuning = SnapTuning::default();
        assert_eq!(tuning.display_slope(0.05), 0.0);
        assert_eq!(tuning.display_slope(-0.05), 0.0);
        assert_eq!(tuning.display_slope(0.2), 0.2);
    }

    #[test]
    fn invalid_tuning_is_rejected() {
        let tuning = SnapTuning {
            hysteresis_factor: 0.5,
            ..SnapTuning::default()
        };
        assert!(tuning.validate().is_err());
    }
}
