use crate::core::{ChartId, Viewport};
use crate::render::{ElementClass, Primitive, RenderFrame};

/// One retained element of a chart scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    pub class: ElementClass,
    pub primitive: Primitive,
    pub visible: bool,
}

/// Retained visual tree of one chart.
///
/// Coordinates are local to the plot area; `origin` is the offset of that
/// area inside the chart container (the margins).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    chart: ChartId,
    container: Viewport,
    origin: (f64, f64),
    elements: Vec<SceneElement>,
}

impl ChartScene {
    #[must_use]
    pub fn new(chart: ChartId, container: Viewport, origin: (f64, f64)) -> Self {
        Self {
            chart,
            container,
            origin,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn chart(&self) -> ChartId {
        self.chart
    }

    #[must_use]
    pub fn container(&self) -> Viewport {
        self.container
    }

    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    #[must_use]
    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn push(&mut self, class: ElementClass, primitive: Primitive) {
        self.push_with_visibility(class, primitive, true);
    }

    pub fn push_hidden(&mut self, class: ElementClass, primitive: Primitive) {
        self.push_with_visibility(class, primitive, false);
    }

    fn push_with_visibility(&mut self, class: ElementClass, primitive: Primitive, visible: bool) {
        self.elements.push(SceneElement {
            class,
            primitive,
            visible,
        });
    }

    /// Removes every element whose class is listed.
    pub fn remove_classes(&mut self, classes: &[ElementClass]) {
        self.elements
            .retain(|element| !classes.contains(&element.class));
    }

    #[must_use]
    pub fn count(&self, class: ElementClass) -> usize {
        self.elements
            .iter()
            .filter(|element| element.class == class)
            .count()
    }

    pub fn select(&self, class: ElementClass) -> impl Iterator<Item = &SceneElement> {
        self.elements
            .iter()
            .filter(move |element| element.class == class)
    }

    #[must_use]
    pub fn first(&self, class: ElementClass) -> Option<&SceneElement> {
        self.select(class).next()
    }

    pub fn first_mut(&mut self, class: ElementClass) -> Option<&mut SceneElement> {
        self.elements
            .iter_mut()
            .find(|element| element.class == class)
    }

    /// Replaces the primitive of the first element with `class`.
    ///
    /// Returns `false` when no such element exists.
    pub fn update(&mut self, class: ElementClass, primitive: Primitive) -> bool {
        match self.first_mut(class) {
            Some(element) => {
                element.primitive = primitive;
                true
            }
            None => false,
        }
    }

    pub fn set_visible(&mut self, classes: &[ElementClass], visible: bool) {
        for element in &mut self.elements {
            if classes.contains(&element.class) {
                element.visible = visible;
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self, class: ElementClass) -> bool {
        self.first(class).is_some_and(|element| element.visible)
    }

    /// Materializes visible elements in paint order.
    ///
    /// Elements are ordered by layer; insertion order is kept inside a layer.
    #[must_use]
    pub fn to_frame(&self) -> RenderFrame {
        let mut visible: Vec<&SceneElement> = self
            .elements
            .iter()
            .filter(|element| element.visible)
            .collect();
        visible.sort_by_key(|element| element.class.layer());

        let mut frame = RenderFrame::new(self.chart, self.container, self.origin);
        for element in visible {
            frame.push(element.class, element.primitive.clone());
        }
        frame
    }
}
