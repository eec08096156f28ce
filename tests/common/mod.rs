#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use slope_chart::ChartError;
use slope_chart::ChartResult;
use slope_chart::api::{
    ChartPlugin, DualChartConfig, DualChartEngine, FormulaFragments, FormulaMeasure, FormulaSlot,
    FormulaTypesetter, PluginContext, PluginEvent,
};
use slope_chart::core::{Expression, ExpressionCompiler, FnExpression};
use slope_chart::render::NullRenderer;

/// Table-driven stand-in for a real expression parser.
pub struct TableCompiler;

type Pair = (&'static str, fn(f64) -> f64, &'static str, fn(f64) -> f64);

fn square(x: f64) -> f64 {
    x * x
}

fn double(x: f64) -> f64 {
    2.0 * x
}

fn cube(x: f64) -> f64 {
    x * x * x
}

fn triple_square(x: f64) -> f64 {
    3.0 * x * x
}

fn zero(_: f64) -> f64 {
    0.0
}

fn shifted_square(x: f64) -> f64 {
    (x - 5.0) * (x - 5.0)
}

fn shifted_double(x: f64) -> f64 {
    2.0 * (x - 5.0)
}

fn reciprocal(x: f64) -> f64 {
    1.0 / x
}

fn reciprocal_slope(x: f64) -> f64 {
    -1.0 / (x * x)
}

fn negate(x: f64) -> f64 {
    -x
}

fn minus_one(_: f64) -> f64 {
    -1.0
}

fn lookup(source: &str) -> Option<Pair> {
    let pair: Pair = match source {
        "x^2" => ("x ^ 2", square, "2 * x", double),
        "x^3" => ("x ^ 3", cube, "3 * x ^ 2", triple_square),
        "0" => ("0", zero, "0", zero),
        "(x-5)^2" => ("(x - 5) ^ 2", shifted_square, "2 * (x - 5)", shifted_double),
        "sin(x)" => ("sin(x)", f64::sin, "cos(x)", f64::cos),
        "1/x" => ("1 / x", reciprocal, "-1 / x ^ 2", reciprocal_slope),
        "-x" => ("-x", negate, "-1", minus_one),
        _ => return None,
    };
    Some(pair)
}

impl ExpressionCompiler for TableCompiler {
    fn compile(&self, source: &str) -> ChartResult<Box<dyn Expression>> {
        let (notation, eval, _, _) =
            lookup(source).ok_or_else(|| ChartError::invalid_expression(source, "unknown symbol"))?;
        Ok(Box::new(FnExpression::new(notation, eval)))
    }

    fn derive(&self, source: &str) -> ChartResult<Box<dyn Expression>> {
        let (_, _, notation, eval) =
            lookup(source).ok_or_else(|| ChartError::invalid_expression(source, "unknown symbol"))?;
        Ok(Box::new(FnExpression::new(notation, eval)))
    }
}

pub fn engine_with(config: DualChartConfig) -> DualChartEngine<NullRenderer> {
    DualChartEngine::new(NullRenderer::default(), Box::new(TableCompiler), config)
        .expect("engine init")
}

pub fn engine() -> DualChartEngine<NullRenderer> {
    engine_with(DualChartConfig::default())
}

pub fn plotted(source: &str) -> DualChartEngine<NullRenderer> {
    let mut engine = engine();
    engine.plot(source).expect("plot");
    engine
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[derive(Clone)]
pub struct RecordingPlugin {
    id: String,
    pub events: Rc<RefCell<Vec<PluginEvent>>>,
}

impl RecordingPlugin {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, _context: PluginContext) {
        self.events.borrow_mut().push(event);
    }
}

/// Typesetter whose output widths are set by the test.
#[derive(Clone, Default)]
pub struct ScriptedTypesetter {
    pub fail: Rc<RefCell<bool>>,
    pub typeset_calls: Rc<RefCell<Vec<FormulaFragments>>>,
    pub widths: Rc<RefCell<[Option<f64>; 2]>>,
    pub container_width: f64,
}

impl ScriptedTypesetter {
    pub fn new(container_width: f64) -> Self {
        Self {
            container_width,
            ..Self::default()
        }
    }
}

impl FormulaTypesetter for ScriptedTypesetter {
    fn typeset(&mut self, fragments: &FormulaFragments) -> ChartResult<()> {
        if *self.fail.borrow() {
            return Err(ChartError::Typeset("unbalanced backticks".to_owned()));
        }
        self.typeset_calls.borrow_mut().push(fragments.clone());
        Ok(())
    }

    fn measure(&self, slot: FormulaSlot) -> Option<FormulaMeasure> {
        self.widths.borrow()[slot.index()].map(|math_width| FormulaMeasure {
            math_width,
            container_width: self.container_width,
        })
    }
}
