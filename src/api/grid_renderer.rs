use crate::core::{LinearScale, format_tick};
use crate::render::{
    ChartScene, ElementClass, LinePrimitive, Primitive, TextHAlign, TextPrimitive,
};

use super::ChartStyle;

const AXIS_LABEL_GAP_PX: f64 = 3.0;

/// Axis classes replaced wholesale by [`render_axes`].
const AXIS_CLASSES: [ElementClass; 2] = [ElementClass::XAxis, ElementClass::YAxis];

/// Redraws grid lines and zero lines of one chart.
///
/// Every grid-owned element is removed first, so repeated calls with the same
/// scales leave exactly one line per tick.
pub fn render_grid(
    scene: &mut ChartScene,
    x_scale: LinearScale,
    y_scale: LinearScale,
    width: f64,
    height: f64,
    tick_count: usize,
    style: &ChartStyle,
) {
    scene.remove_classes(&ElementClass::GRID);

    for tick in x_scale.ticks(tick_count) {
        let px = x_scale.map(tick);
        scene.push(
            ElementClass::GridLineX,
            Primitive::Line(LinePrimitive::new(
                px,
                0.0,
                px,
                height,
                style.grid_width,
                style.grid_color,
            )),
        );
    }
    for tick in y_scale.ticks(tick_count) {
        let py = y_scale.map(tick);
        scene.push(
            ElementClass::GridLineY,
            Primitive::Line(LinePrimitive::new(
                0.0,
                py,
                width,
                py,
                style.grid_width,
                style.grid_color,
            )),
        );
    }

    if x_scale.domain_contains(0.0) {
        let px = x_scale.map(0.0);
        scene.push(
            ElementClass::AxisZeroX,
            Primitive::Line(LinePrimitive::new(
                px,
                0.0,
                px,
                height,
                style.zero_axis_width,
                style.zero_axis_color,
            )),
        );
    }
    if y_scale.domain_contains(0.0) {
        let py = y_scale.map(0.0);
        scene.push(
            ElementClass::AxisZeroY,
            Primitive::Line(LinePrimitive::new(
                0.0,
                py,
                width,
                py,
                style.zero_axis_width,
                style.zero_axis_color,
            )),
        );
    }
}

/// Redraws the bottom x axis and the left y axis.
pub fn render_axes(
    scene: &mut ChartScene,
    x_scale: LinearScale,
    y_scale: LinearScale,
    height: f64,
    tick_count: usize,
    style: &ChartStyle,
) {
    scene.remove_classes(&AXIS_CLASSES);
    let tick = style.axis_tick_size_px;
    let font = style.axis_font_size_px;
    let axis_line = |x1, y1, x2, y2| {
        Primitive::Line(LinePrimitive::new(x1, y1, x2, y2, 1.0, style.axis_color))
    };

    let (x_start, x_end) = x_scale.range();
    scene.push(ElementClass::XAxis, axis_line(x_start, height, x_end, height));
    let x_step = x_scale.tick_step(tick_count);
    for value in x_scale.ticks(tick_count) {
        let px = x_scale.map(value);
        scene.push(ElementClass::XAxis, axis_line(px, height, px, height + tick));
        scene.push(
            ElementClass::XAxis,
            Primitive::Text(TextPrimitive::new(
                format_tick(value, x_step),
                px,
                height + tick + AXIS_LABEL_GAP_PX + font,
                font,
                style.axis_color,
                TextHAlign::Center,
            )),
        );
    }

    let (y_bottom, y_top) = y_scale.range();
    scene.push(ElementClass::YAxis, axis_line(0.0, y_top, 0.0, y_bottom));
    let y_step = y_scale.tick_step(tick_count);
    for value in y_scale.ticks(tick_count) {
        let py = y_scale.map(value);
        scene.push(ElementClass::YAxis, axis_line(-tick, py, 0.0, py));
        scene.push(
            ElementClass::YAxis,
            Primitive::Text(TextPrimitive::new(
                format_tick(value, y_step),
                -tick - AXIS_LABEL_GAP_PX,
                py + font / 3.0,
                font,
                style.axis_color,
                TextHAlign::Right,
            )),
        );
    }
}
