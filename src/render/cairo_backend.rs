use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::api::DualChartConfig;
use crate::core::ChartId;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, Primitive, RectPrimitive, RenderFrame,
    Renderer, TextHAlign, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub paths_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a widget draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer for the chart pair.
///
/// Offscreen rendering stacks the derivative chart below the function chart on
/// one image surface. Drawing into a host-owned context goes through
/// [`CairoContextRenderer`], where the caller positions each chart.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    chart_offsets: [f64; 2],
    stats: [CairoRenderStats; 2],
}

impl CairoRenderer {
    /// Surface of `width`×`height` pixels with both charts drawn at the top.
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        Self::with_offsets(width, height, [0.0, 0.0])
    }

    /// Surface sized to hold both chart containers of `config`, stacked.
    pub fn for_config(config: &DualChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let function = config.container(ChartId::Function);
        let derivative = config.container(ChartId::Derivative);
        let width = function.width.max(derivative.width);
        let height = function.height.saturating_add(derivative.height);
        Self::with_offsets(
            surface_dimension(width)?,
            surface_dimension(height)?,
            [0.0, f64::from(function.height)],
        )
    }

    fn with_offsets(width: i32, height: i32, chart_offsets: [f64; 2]) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            chart_offsets,
            stats: [CairoRenderStats::default(); 2],
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Vertical surface offset of `chart` in offscreen mode.
    #[must_use]
    pub fn chart_offset(&self, chart: ChartId) -> f64 {
        self.chart_offsets[chart.index()]
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    /// Counters of the most recent draw of `chart`.
    #[must_use]
    pub fn stats(&self, chart: ChartId) -> CairoRenderStats {
        self.stats[chart.index()]
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, writer: &mut impl std::io::Write) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        // Only this chart's container is cleared; the other chart may share the surface.
        apply_color(context, self.clear_color);
        context.rectangle(
            0.0,
            0.0,
            f64::from(frame.viewport.width),
            f64::from(frame.viewport.height),
        );
        context
            .fill()
            .map_err(|err| map_backend_error("failed to clear chart area", err))?;

        context.save().map_err(|err| map_backend_error("failed to save context", err))?;
        context.translate(frame.origin.0, frame.origin.1);

        let mut stats = CairoRenderStats::default();
        for (_, primitive) in &frame.primitives {
            match primitive {
                Primitive::Line(line) => {
                    draw_line(context, *line)?;
                    stats.lines_drawn += 1;
                }
                Primitive::Rect(rect) => {
                    draw_rect(context, *rect)?;
                    stats.rects_drawn += 1;
                }
                Primitive::Circle(circle) => {
                    draw_circle(context, *circle)?;
                    stats.circles_drawn += 1;
                }
                Primitive::Path(path) => {
                    if draw_path(context, path)? {
                        stats.paths_drawn += 1;
                    }
                }
                Primitive::Text(text) => {
                    draw_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
        }

        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;
        self.stats[frame.chart.index()] = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context.translate(0.0, self.chart_offset(frame.chart));
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_line(context: &Context, line: LinePrimitive) -> ChartResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn draw_circle(context: &Context, circle: CirclePrimitive) -> ChartResult<()> {
    context.new_sub_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
    apply_color(context, circle.fill_color);
    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill circle", err))?;
    apply_color(context, circle.stroke_color);
    context.set_line_width(circle.stroke_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke circle", err))
}

/// Strokes every run of `path`; returns `false` when there was nothing to draw.
fn draw_path(context: &Context, path: &PathPrimitive) -> ChartResult<bool> {
    if path.runs.is_empty() {
        return Ok(false);
    }
    for run in &path.runs {
        let mut vertices = run.iter();
        if let Some(first) = vertices.next() {
            context.move_to(first.x, first.y);
            for vertex in vertices {
                context.line_to(vertex.x, vertex.y);
            }
        }
    }
    apply_color(context, path.color);
    context.set_line_width(path.stroke_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke path", err))?;
    Ok(true)
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
        TextHAlign::Right => text.x - f64::from(text_width),
    };

    apply_color(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn surface_dimension(pixels: u32) -> ChartResult<i32> {
    i32::try_from(pixels)
        .map_err(|_| ChartError::InvalidData(format!("surface dimension {pixels} is too large")))
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
