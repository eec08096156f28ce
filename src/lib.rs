//! slope-chart-rs: headless engine for a linked function/derivative chart pair.
//!
//! Two charts share one horizontal zoom/pan while each keeps its own vertical
//! pan. Hover input is resolved against the sampled derivative with magnetic
//! snapping onto zero-slope points. Rendering goes through the backend-agnostic
//! `Renderer` trait; expression compilation and formula typesetting are host
//! collaborators behind traits.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DualChartConfig, DualChartEngine};
pub use error::{ChartError, ChartResult};
