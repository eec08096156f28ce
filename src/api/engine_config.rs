use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{ChartId, SampleGrid, ScaleExtent, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::SnapTuning;
use crate::render::Color;

/// Space between a chart container's edge and its plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 30.0,
            left: 40.0,
        }
    }
}

/// Stroke and fill pair for one slope sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneColors {
    pub stroke: Color,
    pub fill: Color,
}

/// Visual constants for grids, axes, series and hover feedback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub grid_color: Color,
    pub grid_width: f64,
    pub zero_axis_color: Color,
    pub zero_axis_width: f64,
    pub axis_color: Color,
    pub axis_font_size_px: f64,
    pub axis_tick_size_px: f64,
    pub function_line_color: Color,
    pub derivative_line_color: Color,
    pub series_line_width: f64,
    pub positive_region_fill: Color,
    pub negative_region_fill: Color,
    pub hover_marker_radius: f64,
    pub hover_font_size_px: f64,
    pub hover_label_offset_px: f64,
    pub tangent_line_width: f64,
    pub flat_tone: ToneColors,
    pub rising_tone: ToneColors,
    pub falling_tone: ToneColors,
    /// Marker and label on the derivative chart; not tinted by slope sign.
    pub derivative_hover: ToneColors,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            grid_color: Color::from_hex(0xe0e0e0),
            grid_width: 0.5,
            zero_axis_color: Color::from_hex(0x666666),
            zero_axis_width: 1.0,
            axis_color: Color::from_hex(0x000000),
            axis_font_size_px: 10.0,
            axis_tick_size_px: 6.0,
            function_line_color: Color::from_hex(0x1f77b4),
            derivative_line_color: Color::from_hex(0xff7f0e),
            series_line_width: 2.0,
            positive_region_fill: Color::from_hex(0xd4edda),
            negative_region_fill: Color::from_hex(0xf8d7da),
            hover_marker_radius: 5.0,
            hover_font_size_px: 12.0,
            hover_label_offset_px: 5.0,
            tangent_line_width: 2.0,
            flat_tone: ToneColors {
                stroke: Color::from_hex(0x808080),
                fill: Color::from_hex(0xd3d3d3),
            },
            rising_tone: ToneColors {
                stroke: Color::from_hex(0x008000),
                fill: Color::from_hex(0xc3e6cb),
            },
            falling_tone: ToneColors {
                stroke: Color::from_hex(0xff0000),
                fill: Color::from_hex(0xf5c6cb),
            },
            derivative_hover: ToneColors {
                stroke: Color::from_hex(0x000000),
                fill: Color::from_hex(0x000000),
            },
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.grid_color,
            self.zero_axis_color,
            self.axis_color,
            self.function_line_color,
            self.derivative_line_color,
            self.positive_region_fill,
            self.negative_region_fill,
            self.flat_tone.stroke,
            self.flat_tone.fill,
            self.rising_tone.stroke,
            self.rising_tone.fill,
            self.falling_tone.stroke,
            self.falling_tone.fill,
            self.derivative_hover.stroke,
            self.derivative_hover.fill,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("grid_width", self.grid_width),
            ("zero_axis_width", self.zero_axis_width),
            ("axis_font_size_px", self.axis_font_size_px),
            ("axis_tick_size_px", self.axis_tick_size_px),
            ("series_line_width", self.series_line_width),
            ("hover_marker_radius", self.hover_marker_radius),
            ("hover_font_size_px", self.hover_font_size_px),
            ("tangent_line_width", self.tangent_line_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.hover_label_offset_px.is_finite() {
            return Err(ChartError::InvalidData(
                "style `hover_label_offset_px` must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Delays of the formula layout passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaTiming {
    /// Wait after typesetting completes before measuring.
    pub settle_delay_ms: u64,
    /// Quiet period before a resize triggers a layout pass.
    pub resize_debounce_ms: u64,
}

impl Default for FormulaTiming {
    fn default() -> Self {
        Self {
            settle_delay_ms: 50,
            resize_debounce_ms: 100,
        }
    }
}

impl FormulaTiming {
    #[must_use]
    pub fn settle_delay(self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    #[must_use]
    pub fn resize_debounce(self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can keep chart setup in a
/// JSON file next to their own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DualChartConfig {
    pub container_width: u32,
    pub function_height: u32,
    pub derivative_height: u32,
    pub margins: ChartMargins,
    pub sample_grid: SampleGrid,
    pub scale_extent: ScaleExtent,
    pub wheel_sensitivity: f64,
    pub tick_count: usize,
    /// Horizontal half-length of the tangent segment, in data units.
    pub tangent_half_run: f64,
    pub snap: SnapTuning,
    pub formula_timing: FormulaTiming,
    pub initial_expression: String,
    pub style: ChartStyle,
}

impl Default for DualChartConfig {
    fn default() -> Self {
        Self {
            container_width: 700,
            function_height: 300,
            derivative_height: 200,
            margins: ChartMargins::default(),
            sample_grid: SampleGrid::default(),
            scale_extent: ScaleExtent::default(),
            wheel_sensitivity: 0.002,
            tick_count: 10,
            tangent_half_run: 1.0,
            snap: SnapTuning::default(),
            formula_timing: FormulaTiming::default(),
            initial_expression: "x^2".to_owned(),
            style: ChartStyle::default(),
        }
    }
}

impl DualChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shared container width.
    #[must_use]
    pub fn with_container_width(mut self, width: u32) -> Self {
        self.container_width = width;
        self
    }

    /// Sets the container heights of the function and derivative charts.
    #[must_use]
    pub fn with_chart_heights(mut self, function_height: u32, derivative_height: u32) -> Self {
        self.function_height = function_height;
        self.derivative_height = derivative_height;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: ChartMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_sample_grid(mut self, grid: SampleGrid) -> Self {
        self.sample_grid = grid;
        self
    }

    #[must_use]
    pub fn with_scale_extent(mut self, extent: ScaleExtent) -> Self {
        self.scale_extent = extent;
        self
    }

    #[must_use]
    pub fn with_snap_tuning(mut self, snap: SnapTuning) -> Self {
        self.snap = snap;
        self
    }

    #[must_use]
    pub fn with_formula_timing(mut self, timing: FormulaTiming) -> Self {
        self.formula_timing = timing;
        self
    }

    #[must_use]
    pub fn with_initial_expression(mut self, expression: impl Into<String>) -> Self {
        self.initial_expression = expression.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Container size of one chart.
    #[must_use]
    pub fn container(&self, chart: ChartId) -> Viewport {
        let height = match chart {
            ChartId::Function => self.function_height,
            ChartId::Derivative => self.derivative_height,
        };
        Viewport::new(self.container_width, height)
    }

    /// Plot-area size of one chart (container minus margins).
    #[must_use]
    pub fn plot_size(&self, chart: ChartId) -> (f64, f64) {
        let container = self.container(chart);
        (
            f64::from(container.width) - self.margins.left - self.margins.right,
            f64::from(container.height) - self.margins.top - self.margins.bottom,
        )
    }

    pub fn validate(&self) -> ChartResult<()> {
        for chart in ChartId::ALL {
            let container = self.container(chart);
            if !container.is_valid() {
                return Err(ChartError::InvalidViewport {
                    width: container.width,
                    height: container.height,
                });
            }
        }
        let margins = self.margins;
        if [margins.top, margins.right, margins.bottom, margins.left]
            .iter()
            .any(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(ChartError::InvalidData(
                "chart margins must be finite and >= 0".to_owned(),
            ));
        }
        for chart in ChartId::ALL {
            let (width, height) = self.plot_size(chart);
            if width <= 0.0 || height <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margins leave no plot area for the {chart:?} chart"
                )));
            }
        }
        self.sample_grid.validate()?;
        self.scale_extent.validate()?;
        self.snap.validate()?;
        self.style.validate()?;
        if !self.wheel_sensitivity.is_finite() || self.wheel_sensitivity <= 0.0 {
            return Err(ChartError::InvalidData(
                "wheel sensitivity must be finite and > 0".to_owned(),
            ));
        }
        if self.tick_count == 0 {
            return Err(ChartError::InvalidData(
                "tick count must be > 0".to_owned(),
            ));
        }
        if !self.tangent_half_run.is_finite() || self.tangent_half_run <= 0.0 {
            return Err(ChartError::InvalidData(
                "tangent half run must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}
