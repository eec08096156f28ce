use serde::{Deserialize, Serialize};

use crate::core::{DerivativeSample, FunctionSample, LinearScale};

/// Projected path vertex in chart-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Anything that can be drawn as a line series.
pub trait SeriesPoint: Copy {
    fn x(self) -> f64;
    fn value(self) -> f64;
}

impl SeriesPoint for FunctionSample {
    fn x(self) -> f64 {
        self.x
    }

    fn value(self) -> f64 {
        self.y
    }
}

impl SeriesPoint for DerivativeSample {
    fn x(self) -> f64 {
        self.x
    }

    fn value(self) -> f64 {
        self.dy
    }
}

/// Projects samples into pixel polylines.
///
/// A sample whose value or projection is non-finite (for example a pole)
/// terminates the current run, so the result may contain several sub-paths.
/// Single-vertex runs are dropped because they cannot be stroked.
#[must_use]
pub fn project_line_path<P: SeriesPoint>(
    samples: &[P],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> Vec<Vec<PathPoint>> {
    let mut runs = Vec::new();
    let mut current: Vec<PathPoint> = Vec::new();

    for sample in samples {
        let x = x_scale.map(sample.x());
        let y = y_scale.map(sample.value());
        if x.is_finite() && y.is_finite() {
            current.push(PathPoint { x, y });
        } else if !current.is_empty() {
            let run = std::mem::take(&mut current);
            if run.len() >= 2 {
                runs.push(run);
            }
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::project_line_path;
    use crate::core::{FunctionSample, LinearScale};

    #[test]
    fn pole_splits_path_into_two_runs() {
        let samples: Vec<FunctionSample> = [-2.0, -1.0, 0.0, 1.0, 2.0]
            .into_iter()
            .map(|x: f64| FunctionSample::new(x, 1.0 / x))
            .collect();
        let x_scale = LinearScale::new((-2.0, 2.0), (0.0, 100.0)).expect("x scale");
        let y_scale = LinearScale::new((-2.0, 2.0), (100.0, 0.0)).expect("y scale");

        let runs = project_line_path(&samples, x_scale, y_scale);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1][0].x, 75.0);
    }
}
