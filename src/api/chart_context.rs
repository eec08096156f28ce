use crate::core::{
    ChartId, DerivativeSample, FunctionSample, LinearScale, PathPoint, ViewTransform,
    project_line_path,
};
use crate::error::ChartResult;
use crate::interaction::ZoomOverlay;
use crate::render::{ChartScene, ElementClass, PathPrimitive, Primitive, RectPrimitive};

use super::ChartStyle;

/// Samples plotted by one chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSeries {
    Function(Vec<FunctionSample>),
    Derivative(Vec<DerivativeSample>),
}

impl ChartSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Function(samples) => samples.len(),
            Self::Derivative(samples) => samples.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn line_class(&self) -> ElementClass {
        match self {
            Self::Function(_) => ElementClass::FunctionLine,
            Self::Derivative(_) => ElementClass::DerivativeLine,
        }
    }

    #[must_use]
    pub fn project(&self, x_scale: LinearScale, y_scale: LinearScale) -> Vec<Vec<PathPoint>> {
        match self {
            Self::Function(samples) => project_line_path(samples, x_scale, y_scale),
            Self::Derivative(samples) => project_line_path(samples, x_scale, y_scale),
        }
    }
}

/// Everything the transform coordinator needs to redraw one chart.
///
/// Built once per plot. Between plots only the current scales, the overlay
/// transform and the scene contents change.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartContext {
    pub(super) chart: ChartId,
    pub(super) width: f64,
    pub(super) height: f64,
    pub(super) original_x: LinearScale,
    pub(super) original_y: LinearScale,
    pub(super) x_scale: LinearScale,
    pub(super) y_scale: LinearScale,
    pub(super) series: ChartSeries,
    pub(super) overlay: ZoomOverlay,
    pub(super) scene: ChartScene,
}

impl ChartContext {
    #[must_use]
    pub fn chart(&self) -> ChartId {
        self.chart
    }

    /// Plot-area width and height in pixels.
    #[must_use]
    pub fn plot_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn original_x_scale(&self) -> LinearScale {
        self.original_x
    }

    #[must_use]
    pub fn original_y_scale(&self) -> LinearScale {
        self.original_y
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn series(&self) -> &ChartSeries {
        &self.series
    }

    #[must_use]
    pub fn overlay(&self) -> &ZoomOverlay {
        &self.overlay
    }

    #[must_use]
    pub fn scene(&self) -> &ChartScene {
        &self.scene
    }

    #[must_use]
    pub fn derivative_samples(&self) -> Option<&[DerivativeSample]> {
        match &self.series {
            ChartSeries::Derivative(samples) => Some(samples),
            ChartSeries::Function(_) => None,
        }
    }

    /// Pixel row of `value = 0` clamped into the plot area.
    #[must_use]
    pub fn zero_row(&self) -> f64 {
        let row = self.y_scale.map(0.0);
        if row.is_nan() {
            return self.height;
        }
        row.clamp(0.0, self.height)
    }

    /// Derives the scales `transform` produces from the original ones without
    /// touching the current pair.
    pub(super) fn rescaled(
        &self,
        transform: ViewTransform,
    ) -> ChartResult<(LinearScale, LinearScale)> {
        Ok((
            transform.rescale_x(self.original_x)?,
            transform.rescale_y(self.original_y)?,
        ))
    }

    pub(super) fn set_scales(&mut self, (x_scale, y_scale): (LinearScale, LinearScale)) {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
    }

    /// Re-projects the stored samples into the line element.
    pub(super) fn sync_series_path(&mut self, style: &ChartStyle) {
        let color = match self.series {
            ChartSeries::Function(_) => style.function_line_color,
            ChartSeries::Derivative(_) => style.derivative_line_color,
        };
        let path = Primitive::Path(PathPrimitive::new(
            self.series.project(self.x_scale, self.y_scale),
            style.series_line_width,
            color,
        ));
        let class = self.series.line_class();
        if !self.scene.update(class, path.clone()) {
            self.scene.push(class, path);
        }
    }

    /// Resizes the sign regions around the current zero crossing.
    ///
    /// Only the derivative chart carries regions.
    pub(super) fn sync_sign_regions(&mut self, style: &ChartStyle) {
        if self.chart != ChartId::Derivative {
            return;
        }
        let zero = self.zero_row();
        let positive = Primitive::Rect(RectPrimitive::new(
            0.0,
            0.0,
            self.width,
            zero,
            style.positive_region_fill,
        ));
        let negative = Primitive::Rect(RectPrimitive::new(
            0.0,
            zero,
            self.width,
            self.height - zero,
            style.negative_region_fill,
        ));
        for (class, primitive) in [
            (ElementClass::PositiveRegion, positive),
            (ElementClass::NegativeRegion, negative),
        ] {
            if !self.scene.update(class, primitive.clone()) {
                self.scene.push(class, primitive);
            }
        }
    }
}
