use serde::{Deserialize, Serialize};

/// Paint layers of one chart, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Axis,
    Series,
    Hover,
    Interaction,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [CanvasLayerKind; 6] = [
        CanvasLayerKind::Background,
        CanvasLayerKind::Grid,
        CanvasLayerKind::Axis,
        CanvasLayerKind::Series,
        CanvasLayerKind::Hover,
        CanvasLayerKind::Interaction,
    ];
}

/// Stable identity of a scene element, mirrored as a CSS class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementClass {
    PositiveRegion,
    NegativeRegion,
    GridLineX,
    GridLineY,
    AxisZeroX,
    AxisZeroY,
    XAxis,
    YAxis,
    FunctionLine,
    DerivativeLine,
    HoverMarker,
    TangentLine,
    HoverLabel,
    ZoomOverlay,
}

impl ElementClass {
    /// Classes owned by the grid renderer.
    pub const GRID: [ElementClass; 4] = [
        ElementClass::GridLineX,
        ElementClass::GridLineY,
        ElementClass::AxisZeroX,
        ElementClass::AxisZeroY,
    ];

    /// Classes toggled together by hover show/hide.
    pub const HOVER: [ElementClass; 3] = [
        ElementClass::HoverMarker,
        ElementClass::TangentLine,
        ElementClass::HoverLabel,
    ];

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::PositiveRegion => "positive-region",
            Self::NegativeRegion => "negative-region",
            Self::GridLineX => "grid-line-x",
            Self::GridLineY => "grid-line-y",
            Self::AxisZeroX => "axis-zero-x",
            Self::AxisZeroY => "axis-zero-y",
            Self::XAxis => "x-axis",
            Self::YAxis => "y-axis",
            Self::FunctionLine => "function-line",
            Self::DerivativeLine => "derivative-line",
            Self::HoverMarker => "hover-marker",
            Self::TangentLine => "tangent-line",
            Self::HoverLabel => "hover-label",
            Self::ZoomOverlay => "zoom-overlay",
        }
    }

    #[must_use]
    pub fn layer(self) -> CanvasLayerKind {
        match self {
            Self::PositiveRegion | Self::NegativeRegion => CanvasLayerKind::Background,
            Self::GridLineX | Self::GridLineY | Self::AxisZeroX | Self::AxisZeroY => {
                CanvasLayerKind::Grid
            }
            Self::XAxis | Self::YAxis => CanvasLayerKind::Axis,
            Self::FunctionLine | Self::DerivativeLine => CanvasLayerKind::Series,
            Self::HoverMarker | Self::TangentLine | Self::HoverLabel => CanvasLayerKind::Hover,
            Self::ZoomOverlay => CanvasLayerKind::Interaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CanvasLayerKind, ElementClass};

    #[test]
    fn canonical_order_is_sorted() {
        let mut sorted = CanvasLayerKind::CANONICAL_ORDER;
        sorted.sort();
        assert_eq!(sorted, CanvasLayerKind::CANONICAL_ORDER);
    }

    #[test]
    fn grid_classes_share_the_grid_layer() {
        for class in ElementClass::GRID {
            assert_eq!(class.layer(), CanvasLayerKind::Grid);
        }
        assert_eq!(ElementClass::ZoomOverlay.css_class(), "zoom-overlay");
    }
}
