use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{ChartId, LinearScale};
use crate::error::{ChartError, ChartResult};
use crate::interaction::resolve_snap;
use crate::render::{
    CirclePrimitive, ElementClass, LinePrimitive, Primitive, Renderer, TextHAlign, TextPrimitive,
};

use super::{ChartStyle, DualChartEngine, PluginEvent, ToneColors};

/// Sign class of the displayed slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlopeTone {
    Flat,
    Rising,
    Falling,
}

impl SlopeTone {
    #[must_use]
    pub fn from_slope(slope: f64) -> Self {
        if slope == 0.0 {
            Self::Flat
        } else if slope > 0.0 {
            Self::Rising
        } else {
            Self::Falling
        }
    }

    #[must_use]
    pub fn colors(self, style: &ChartStyle) -> ToneColors {
        match self {
            Self::Flat => style.flat_tone,
            Self::Rising => style.rising_tone,
            Self::Falling => style.falling_tone,
        }
    }
}

/// Values behind the hover feedback of one pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverReadout {
    pub x: f64,
    pub y: f64,
    /// Displayed slope; exactly `0.0` inside the zero-slope threshold.
    pub slope: f64,
    pub tone: SlopeTone,
    pub snapped: bool,
}

pub(super) struct HoverCoordinator;

impl HoverCoordinator {
    pub(super) fn pointer_over<R: Renderer>(engine: &mut DualChartEngine<R>, chart: ChartId) {
        if engine.interaction.on_pointer_over(chart) {
            Self::set_hover_visible(engine, true);
        }
    }

    pub(super) fn pointer_out<R: Renderer>(engine: &mut DualChartEngine<R>, chart: ChartId) {
        let had_snap = engine.interaction.hover().snapped_x.is_some();
        engine.interaction.on_pointer_out(chart);
        Self::set_hover_visible(engine, false);
        if had_snap {
            engine.emit_plugin_event(PluginEvent::SnapChanged { snapped_x: None });
        }
        engine.emit_plugin_event(PluginEvent::HoverHidden);
    }

    /// Resolves the pointer at plot-local `px` and redraws the hover feedback.
    ///
    /// Returns `None` while a drag is active, before the first plot, or when
    /// the function is not finite at the resolved x.
    pub(super) fn pointer_move<R: Renderer>(
        engine: &mut DualChartEngine<R>,
        chart: ChartId,
        px: f64,
        py: f64,
    ) -> ChartResult<Option<HoverReadout>> {
        if !px.is_finite() || !py.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }
        if engine.interaction.is_dragging() {
            trace!(?chart, "hover suppressed while dragging");
            return Ok(None);
        }
        let (Some(function_chart), Some(derivative_chart), Some(compiled)) = (
            engine.charts.get(&ChartId::Function),
            engine.charts.get(&ChartId::Derivative),
            engine.function.as_ref(),
        ) else {
            return Ok(None);
        };
        let Some(derivative_samples) = derivative_chart.derivative_samples() else {
            return Ok(None);
        };

        let x_scale = function_chart.x_scale();
        let y_scale = function_chart.y_scale();
        let dy_scale = derivative_chart.y_scale();
        let tuning = engine.config.snap;

        let x0 = x_scale.invert(px);
        let previous = engine.interaction.hover().snapped_x;
        let decision = resolve_snap(x0, derivative_samples, previous, tuning);
        let x = decision.resolved_x(x0);
        let y = compiled.value_at(x)?;
        let slope = tuning.display_slope(compiled.slope_at(x)?);

        engine.interaction.set_snapped_x(decision.snapped_x());
        if decision.snapped_x() != previous {
            engine.emit_plugin_event(PluginEvent::SnapChanged {
                snapped_x: decision.snapped_x(),
            });
        }

        if !y.is_finite() || !slope.is_finite() {
            trace!(x, "hover target is not finite");
            Self::set_hover_visible(engine, false);
            return Ok(None);
        }

        let readout = HoverReadout {
            x,
            y,
            slope,
            tone: SlopeTone::from_slope(slope),
            snapped: decision.snapped_x().is_some(),
        };
        Self::draw(engine, readout, x_scale, y_scale, dy_scale);
        let visible = engine.interaction.hover().visible;
        Self::set_hover_visible(engine, visible);
        engine.emit_plugin_event(PluginEvent::HoverMoved { x, y, slope });
        Ok(Some(readout))
    }

    fn draw<R: Renderer>(
        engine: &mut DualChartEngine<R>,
        readout: HoverReadout,
        x_scale: LinearScale,
        y_scale: LinearScale,
        dy_scale: LinearScale,
    ) {
        let style = engine.config.style;
        let half_run = engine.config.tangent_half_run;
        let tone = readout.tone.colors(&style);
        let HoverReadout { x, y, slope, .. } = readout;
        let offset = style.hover_label_offset_px;
        let cx = x_scale.map(x);

        if let Some(context) = engine.charts.get_mut(&ChartId::Function) {
            let cy = y_scale.map(y);
            let scene = &mut context.scene;
            scene.update(
                ElementClass::HoverMarker,
                Primitive::Circle(CirclePrimitive::new(
                    cx,
                    cy,
                    style.hover_marker_radius,
                    tone.fill,
                    tone.stroke,
                )),
            );
            scene.update(
                ElementClass::TangentLine,
                Primitive::Line(LinePrimitive::new(
                    x_scale.map(x - half_run),
                    y_scale.map(y - slope * half_run),
                    x_scale.map(x + half_run),
                    y_scale.map(y + slope * half_run),
                    style.tangent_line_width,
                    tone.stroke,
                )),
            );
            scene.update(
                ElementClass::HoverLabel,
                Primitive::Text(TextPrimitive::new(
                    format!("m = {slope:.2}"),
                    cx + offset,
                    cy - offset,
                    style.hover_font_size_px,
                    tone.stroke,
                    TextHAlign::Left,
                )),
            );
        }

        if let Some(context) = engine.charts.get_mut(&ChartId::Derivative) {
            let cy = dy_scale.map(slope);
            let scene = &mut context.scene;
            scene.update(
                ElementClass::HoverMarker,
                Primitive::Circle(CirclePrimitive::new(
                    cx,
                    cy,
                    style.hover_marker_radius,
                    style.derivative_hover.fill,
                    style.derivative_hover.stroke,
                )),
            );
            scene.update(
                ElementClass::HoverLabel,
                Primitive::Text(TextPrimitive::new(
                    format!("y = {slope:.2}"),
                    cx + offset,
                    cy - offset,
                    style.hover_font_size_px,
                    style.derivative_hover.stroke,
                    TextHAlign::Left,
                )),
            );
        }
    }

    pub(super) fn set_hover_visible<R: Renderer>(engine: &mut DualChartEngine<R>, visible: bool) {
        for context in engine.charts.values_mut() {
            context.scene.set_visible(&ElementClass::HOVER, visible);
        }
    }
}
