//! Boundary to the expression compiler and symbolic differentiator.
//!
//! Parsing and differentiation live outside this crate. The engine only needs
//! to evaluate a compiled expression at `x` and to ask for its derivative.

use std::fmt;

use crate::error::{ChartError, ChartResult};

/// A compiled single-variable expression.
pub trait Expression {
    fn evaluate(&self, x: f64) -> ChartResult<f64>;

    /// Infix notation of the expression, used for formula typesetting.
    fn notation(&self) -> String;
}

/// Compiles user input and derives it with respect to `x`.
pub trait ExpressionCompiler {
    fn compile(&self, source: &str) -> ChartResult<Box<dyn Expression>>;

    fn derive(&self, source: &str) -> ChartResult<Box<dyn Expression>>;
}

/// Closure-backed [`Expression`] for hosts that already hold native functions.
pub struct FnExpression<F>
where
    F: Fn(f64) -> f64,
{
    notation: String,
    eval: F,
}

impl<F> FnExpression<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(notation: impl Into<String>, eval: F) -> Self {
        Self {
            notation: notation.into(),
            eval,
        }
    }
}

impl<F> fmt::Debug for FnExpression<F>
where
    F: Fn(f64) -> f64,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnExpression")
            .field("notation", &self.notation)
            .finish_non_exhaustive()
    }
}

impl<F> Expression for FnExpression<F>
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> ChartResult<f64> {
        Ok((self.eval)(x))
    }

    fn notation(&self) -> String {
        self.notation.clone()
    }
}

/// A compiled expression together with its derivative.
pub struct CompiledFunction {
    pub source: String,
    pub function: Box<dyn Expression>,
    pub derivative: Box<dyn Expression>,
}

impl CompiledFunction {
    /// Compiles `source` and its derivative; both must succeed.
    pub fn compile(compiler: &dyn ExpressionCompiler, source: &str) -> ChartResult<Self> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(ChartError::invalid_expression(source, "expression is empty"));
        }
        let function = compiler.compile(trimmed)?;
        let derivative = compiler.derive(trimmed)?;
        Ok(Self {
            source: trimmed.to_owned(),
            function,
            derivative,
        })
    }

    pub fn value_at(&self, x: f64) -> ChartResult<f64> {
        self.function.evaluate(x)
    }

    pub fn slope_at(&self, x: f64) -> ChartResult<f64> {
        self.derivative.evaluate(x)
    }
}

impl fmt::Debug for CompiledFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledFunction")
            .field("source", &self.source)
            .field("derivative", &self.derivative.notation())
            .finish()
    }
}
