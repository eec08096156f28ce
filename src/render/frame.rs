use crate::core::{ChartId, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{ElementClass, Primitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitives are listed in paint order and expressed in plot-area
/// coordinates; backends translate by `origin` first.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub chart: ChartId,
    pub viewport: Viewport,
    pub origin: (f64, f64),
    pub primitives: Vec<(ElementClass, Primitive)>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(chart: ChartId, viewport: Viewport, origin: (f64, f64)) -> Self {
        Self {
            chart,
            viewport,
            origin,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, class: ElementClass, primitive: Primitive) {
        self.primitives.push((class, primitive));
    }

    #[must_use]
    pub fn with_primitive(mut self, class: ElementClass, primitive: Primitive) -> Self {
        self.push(class, primitive);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.origin.0.is_finite() || !self.origin.1.is_finite() {
            return Err(ChartError::InvalidData(
                "frame origin must be finite".to_owned(),
            ));
        }

        for (_, primitive) in &self.primitives {
            primitive.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[must_use]
    pub fn count_class(&self, class: ElementClass) -> usize {
        self.primitives
            .iter()
            .filter(|(candidate, _)| *candidate == class)
            .count()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|(_, primitive)| matches!(primitive, Primitive::Line(_)))
            .count()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|(_, primitive)| matches!(primitive, Primitive::Text(_)))
            .count()
    }
}
