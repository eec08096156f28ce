use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Pan/zoom relative to a chart's original scales.
///
/// A pixel `p` of the original projection lands at `p * k + x` horizontally
/// and `p * k + y` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        x: 0.0,
        y: 0.0,
        k: 1.0,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64, k: f64) -> Self {
        Self { x, y, k }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.k.is_finite() && self.k > 0.0
    }

    /// Pre-translates by `(dx, dy)` expressed in unscaled pixels.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + self.k * dx, self.y + self.k * dy, self.k)
    }

    /// Multiplies the zoom factor, keeping the translation.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x, self.y, self.k * factor)
    }

    #[must_use]
    pub fn apply_x(self, pixel: f64) -> f64 {
        pixel * self.k + self.x
    }

    #[must_use]
    pub fn apply_y(self, pixel: f64) -> f64 {
        pixel * self.k + self.y
    }

    #[must_use]
    pub fn invert_x(self, pixel: f64) -> f64 {
        (pixel - self.x) / self.k
    }

    #[must_use]
    pub fn invert_y(self, pixel: f64) -> f64 {
        (pixel - self.y) / self.k
    }

    /// Horizontal component only: `{x, 0, k}`.
    #[must_use]
    pub fn horizontal(self) -> Self {
        Self::new(self.x, 0.0, self.k)
    }

    /// Returns the scale whose domain is what `scale` shows after this transform
    /// is applied horizontally.
    pub fn rescale_x(self, scale: LinearScale) -> ChartResult<LinearScale> {
        self.ensure_finite()?;
        let (r0, r1) = scale.range();
        scale.with_domain(
            scale.invert(self.invert_x(r0)),
            scale.invert(self.invert_x(r1)),
        )
    }

    /// Vertical counterpart of [`ViewTransform::rescale_x`].
    pub fn rescale_y(self, scale: LinearScale) -> ChartResult<LinearScale> {
        self.ensure_finite()?;
        let (r0, r1) = scale.range();
        scale.with_domain(
            scale.invert(self.invert_y(r0)),
            scale.invert(self.invert_y(r1)),
        )
    }

    fn ensure_finite(self) -> ChartResult<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(ChartError::InvalidData(
                "view transform must be finite with k > 0".to_owned(),
            ))
        }
    }
}

/// Allowed zoom-factor interval for zoom gestures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleExtent {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleExtent {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 10.0,
        }
    }
}

impl ScaleExtent {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min <= 0.0 || self.min > self.max
        {
            return Err(ChartError::InvalidData(
                "scale extent must be finite with 0 < min <= max".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn clamp(self, k: f64) -> f64 {
        k.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(self, k: f64) -> bool {
        (self.min..=self.max).contains(&k)
    }
}
