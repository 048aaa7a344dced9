use std::sync::Arc;

use crate::defuzzification::{Defuzzification, Defuzzifier};
use crate::inference::InferenceEngine;
use crate::ops::{AndOp, OrOp, SNorm, TNorm};

/// Operators, engine and defuzzifier a [`FuzzyLogicSystem`](crate::FuzzyLogicSystem) starts with.
///
/// The default is the minimum t-norm, the maximum s-norm, Mamdani inference with
/// minimum implication and maximum aggregation, and centroid defuzzification over
/// 1000 samples. [`with_engine`](Self::with_engine) adopts the engine's own AND/OR
/// operators, as [`FuzzyLogicSystem::set_inference_engine`](crate::FuzzyLogicSystem::set_inference_engine)
/// does; a later `with_and_op`/`with_or_op` overrides them. The engine is rebuilt
/// with the final `and_op`/`or_op` when the system is constructed.
#[derive(Clone, Debug)]
pub struct SystemConfig {
    pub(crate) and_op: Arc<dyn TNorm>,
    pub(crate) or_op: Arc<dyn SNorm>,
    pub(crate) engine: InferenceEngine,
    pub(crate) defuzzifier: Arc<dyn Defuzzifier>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            and_op: Arc::new(AndOp::Min),
            or_op: Arc::new(OrOp::Max),
            engine: InferenceEngine::default(),
            defuzzifier: Arc::new(Defuzzification::centroid()),
        }
    }
}

impl SystemConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_and_op(mut self, and_op: impl TNorm + 'static) -> Self {
        self.and_op = Arc::new(and_op);
        self
    }

    pub fn with_or_op(mut self, or_op: impl SNorm + 'static) -> Self {
        self.or_op = Arc::new(or_op);
        self
    }

    pub fn with_engine(mut self, engine: impl Into<InferenceEngine>) -> Self {
        let engine = engine.into();
        let (and_op, or_op) = engine.operators();

        self.and_op = and_op.clone();
        self.or_op = or_op.clone();
        self.engine = engine;
        self
    }

    pub fn with_defuzzifier(mut self, defuzzifier: impl Defuzzifier + 'static) -> Self {
        self.defuzzifier = Arc::new(defuzzifier);
        self
    }

    pub fn and_op(&self) -> &dyn TNorm {
        &*self.and_op
    }

    pub fn or_op(&self) -> &dyn SNorm {
        &*self.or_op
    }

    pub fn engine(&self) -> &InferenceEngine {
        &self.engine
    }

    pub fn defuzzifier(&self) -> &dyn Defuzzifier {
        &*self.defuzzifier
    }
}

#[test]
fn test_default_config() {
    use crate::defuzzification::DefuzzificationOp;

    let config = SystemConfig::default();

    assert_eq!(config.and_op().compute(0.3, 0.6), 0.3);
    assert_eq!(config.or_op().compute(0.3, 0.6), 0.6);
    assert!(config.engine().is_mamdani());

    let config = config
        .with_and_op(AndOp::Prod)
        .with_defuzzifier(Defuzzification::new(DefuzzificationOp::Mom, 10).unwrap());

    assert_eq!(config.and_op().compute(0.5, 0.5), 0.25);
    assert_eq!(config.defuzzifier().defuzzify(&|_: f64| 0., 0., 4.), 2.);
}

#[test]
fn test_engine_brings_its_operators() {
    use crate::inference::Mamdani;
    use crate::ops::{ImplicationOp, ProductionLink};

    let engine = Mamdani::new(AndOp::Prod, OrOp::ProbOr, ImplicationOp::Min, ProductionLink::Max);
    let config = SystemConfig::default().with_engine(engine.clone());

    assert_eq!(config.and_op().compute(0.5, 0.5), 0.25);
    assert_eq!(config.or_op().compute(0.5, 0.5), 0.75);

    // Set afterwards, the explicit operator wins
    let config = SystemConfig::default().with_engine(engine).with_and_op(AndOp::Min);

    assert_eq!(config.and_op().compute(0.5, 0.5), 0.5);
    assert_eq!(config.or_op().compute(0.5, 0.5), 0.75);
}
