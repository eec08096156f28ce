pub mod domain;
pub mod expression;
pub mod line_series;
pub mod sampling;
pub mod scale;
pub mod ticks;
pub mod transform;
pub mod types;

pub use domain::{DisplayDomains, Domain, compute_display_domains};
pub use expression::{CompiledFunction, Expression, ExpressionCompiler, FnExpression};
pub use line_series::{PathPoint, SeriesPoint, project_line_path};
pub use sampling::{SampleGrid, SampledSeries, sample_series};
pub use scale::LinearScale;
pub use ticks::{format_tick, tick_step, ticks};
pub use transform::{ScaleExtent, ViewTransform};
pub use types::{ChartId, DerivativeSample, FunctionSample, Viewport};
