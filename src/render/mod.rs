mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;
mod scene;

pub use frame::RenderFrame;
pub use layer_stack::{CanvasLayerKind, ElementClass};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, Primitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use scene::{ChartScene, SceneElement};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` per
/// chart so drawing code remains isolated from transform and hover logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
