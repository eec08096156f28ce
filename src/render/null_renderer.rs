use crate::core::ChartId;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_chart: Option<ChartId>,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_primitive_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_chart = Some(frame.chart);
        self.last_line_count = frame.line_count();
        self.last_text_count = frame.text_count();
        self.last_primitive_count = frame.primitives.len();
        Ok(())
    }
}
