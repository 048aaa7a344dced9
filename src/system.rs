use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::config::SystemConfig;
use crate::defuzzification::Defuzzifier;
use crate::inference::{Fuzzified, InferenceEngine, Inferred, Sugeno, SUGENO_OUTPUT};
use crate::inputs::Inputs;
use crate::ops::{SNorm, TNorm};
use crate::outputs::Outputs;
use crate::rules::{Rule, Rules};
use crate::variable::LinguisticVariable;

/// Owns the variables, the rule base and the pipeline strategies of a single-output
/// fuzzy system, and runs `fuzzify → infer → defuzzify`.
///
/// Evaluation borrows the system immutably, so it cannot overlap with rule edits.
/// Callers sharing a system between threads must wrap it in a lock covering
/// both evaluation and rule mutation.
#[derive(Clone, Debug)]
pub struct FuzzyLogicSystem {
    inputs: IndexMap<String, LinguisticVariable>,
    output: LinguisticVariable,
    rules: Rules,
    and_op: Arc<dyn TNorm>,
    or_op: Arc<dyn SNorm>,
    engine: InferenceEngine,
    defuzzifier: Arc<dyn Defuzzifier>,
}

impl FuzzyLogicSystem {
    pub fn new(output: LinguisticVariable) -> Self {
        Self::with_config(output, SystemConfig::default())
    }

    pub fn with_config(output: LinguisticVariable, config: SystemConfig) -> Self {
        let SystemConfig {
            and_op,
            or_op,
            engine,
            defuzzifier,
        } = config;
        let engine = engine.with_operators(and_op.clone(), or_op.clone(), &output);

        Self {
            inputs: IndexMap::new(),
            output,
            rules: Rules::new(),
            and_op,
            or_op,
            engine,
            defuzzifier,
        }
    }

    /// Registers an input variable, replacing any earlier one with the same name
    pub fn add_input_variable(&mut self, variable: LinguisticVariable) {
        debug!(variable = variable.name(), terms = variable.len(), "adding input variable");

        self.inputs.insert(variable.name().to_owned(), variable);
    }

    pub fn input_variable(&self, name: &str) -> Option<&LinguisticVariable> {
        self.inputs.get(name)
    }

    pub fn input_variables(&self) -> impl Iterator<Item = &LinguisticVariable> {
        self.inputs.values()
    }

    pub fn output_variable(&self) -> &LinguisticVariable {
        &self.output
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.add(rule);
    }

    pub fn rule_base(&self) -> &Rules {
        &self.rules
    }

    pub fn rule_base_mut(&mut self) -> &mut Rules {
        &mut self.rules
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

    pub fn set_and_op(&mut self, and_op: impl TNorm + 'static) {
        self.and_op = Arc::new(and_op);
        self.rebuild_engine();
    }

    pub fn set_or_op(&mut self, or_op: impl SNorm + 'static) {
        self.or_op = Arc::new(or_op);
        self.rebuild_engine();
    }

    /// Installs `engine` as given. Its own AND/OR operators become the system's.
    pub fn set_inference_engine(&mut self, engine: impl Into<InferenceEngine>) {
        let engine = engine.into();
        let (and_op, or_op) = engine.operators();

        self.and_op = and_op.clone();
        self.or_op = or_op.clone();
        self.engine = engine;
    }

    pub fn set_defuzzifier(&mut self, defuzzifier: impl Defuzzifier + 'static) {
        self.defuzzifier = Arc::new(defuzzifier);
    }

    /// Switches to zero-order Sugeno with the current AND/OR operators
    pub fn setup_sugeno(&mut self, consequents: IndexMap<String, f64>) {
        self.install_sugeno(consequents, None);
    }

    /// Switches to first-order Sugeno with the current AND/OR operators
    pub fn setup_sugeno_first_order(
        &mut self,
        consequents: IndexMap<String, f64>,
        coefficients: IndexMap<String, IndexMap<String, f64>>,
    ) {
        self.install_sugeno(consequents, Some(coefficients));
    }

    /// Zero-order Sugeno where every output term's constant is its domain midpoint
    pub fn setup_sugeno_from_midpoints(&mut self) {
        self.install_sugeno(self.output.term_centers(), None);
    }

    fn install_sugeno(
        &mut self,
        consequents: IndexMap<String, f64>,
        coefficients: Option<IndexMap<String, IndexMap<String, f64>>>,
    ) {
        self.engine = Sugeno::from_shared(self.and_op.clone(), self.or_op.clone(), consequents, coefficients).into();

        debug!(first_order = self.engine_is_first_order(), "switched to sugeno inference");
    }

    fn engine_is_first_order(&self) -> bool {
        matches!(&self.engine, InferenceEngine::Sugeno(engine) if engine.is_first_order())
    }

    fn rebuild_engine(&mut self) {
        self.engine = self.engine.with_operators(self.and_op.clone(), self.or_op.clone(), &self.output);

        debug!(
            and_op = ?self.and_op,
            or_op = ?self.or_op,
            mamdani = self.engine.is_mamdani(),
            "rebuilt inference engine"
        );
    }

    /// Membership of every supplied input in every term of its variable. Inputs
    /// naming no registered variable are skipped; zero memberships are omitted.
    pub fn fuzzify(&self, inputs: &Inputs) -> Fuzzified {
        let mut fuzzified = Fuzzified::with_capacity(inputs.len());

        for (name, value) in inputs.iter() {
            let Some(variable) = self.inputs.get(name) else {
                trace!(variable = name, "no such input variable, skipping");
                continue;
            };

            fuzzified.insert(name.to_owned(), variable.fuzzify(value));
        }

        debug!(?fuzzified, "fuzzified inputs");

        fuzzified
    }

    /// Fuzzifies `inputs` and runs the engine over the enabled rules
    pub fn infer(&self, inputs: &Inputs) -> Inferred {
        let fuzzified = self.fuzzify(inputs);

        self.infer_fuzzified(&fuzzified)
    }

    fn infer_fuzzified(&self, fuzzified: &Fuzzified) -> Inferred {
        self.engine.infer(self.rules.enabled(), fuzzified, &self.output)
    }

    fn defuzzify(&self, inferred: &Inferred) -> f64 {
        let crisp = match &self.engine {
            InferenceEngine::Sugeno(_) => inferred.get(SUGENO_OUTPUT).copied().unwrap_or(0.),
            InferenceEngine::Mamdani(engine) => {
                let membership = |x: f64| engine.implied_membership(inferred, &self.output, x);

                self.defuzzifier.defuzzify(&membership, self.output.min_domain(), self.output.max_domain())
            },
        };

        debug!(crisp, "defuzzified");

        crisp
    }

    /// Runs the full pipeline. Never fails: with nothing firing, Mamdani yields the
    /// output domain's midpoint (for the built-in defuzzifiers) and Sugeno yields zero.
    pub fn evaluate(&self, inputs: &Inputs) -> f64 {
        self.evaluate_detailed(inputs).crisp()
    }

    pub fn evaluate_detailed(&self, inputs: &Inputs) -> Outputs {
        let fuzzified = self.fuzzify(inputs);
        let inferred = self.infer_fuzzified(&fuzzified);
        let crisp = self.defuzzify(&inferred);

        Outputs::new(fuzzified, inferred, crisp)
    }
}
