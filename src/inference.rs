use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::ops::{Aggregation, AndOp, Implication, ImplicationOp, OrOp, ProductionLink, SNorm, TNorm};
use crate::rules::{Antecedent, Connective, Rule};
use crate::variable::LinguisticVariable;

/// Variable name to term name to membership. Only non-zero memberships are present.
pub type Fuzzified = IndexMap<String, IndexMap<String, f64>>;

/// Output term name to aggregated degree (Mamdani), or [`SUGENO_OUTPUT`] to the crisp value (Sugeno)
pub type Inferred = IndexMap<String, f64>;

/// Key of the single entry a Sugeno inference produces
pub const SUGENO_OUTPUT: &str = "output";

fn membership_of(cond: &Antecedent, fuzzified: &Fuzzified) -> f64 {
    fuzzified
        .get(&cond.variable)
        .and_then(|terms| terms.get(&cond.set))
        .copied()
        .unwrap_or(0.)
}

/// Left-to-right fold of the premise, scaled by the rule weight. An empty premise is vacuously true.
pub fn firing_strength(rule: &Rule, fuzzified: &Fuzzified, and_op: &dyn TNorm, or_op: &dyn SNorm) -> f64 {
    let strength = match rule.premise() {
        [] => 1.,
        [first, rest @ ..] => rest.iter().fold(membership_of(first, fuzzified), |acc, cond| {
            let membership = membership_of(cond, fuzzified);

            match cond.connective {
                Connective::And => and_op.compute(acc, membership),
                Connective::Or => or_op.compute(acc, membership),
            }
        }),
    };

    strength * rule.weight()
}

/// Fuzzy consequents: rule strengths are aggregated per output term and the
/// implication is applied lazily while the output is sampled.
#[derive(Clone, Debug)]
pub struct Mamdani {
    and_op: Arc<dyn TNorm>,
    or_op: Arc<dyn SNorm>,
    implication: Arc<dyn Implication>,
    aggregation: Arc<dyn Aggregation>,
}

impl Default for Mamdani {
    fn default() -> Self {
        Self::new(AndOp::Min, OrOp::Max, ImplicationOp::Min, ProductionLink::Max)
    }
}

impl Mamdani {
    pub fn new(
        and_op: impl TNorm + 'static,
        or_op: impl SNorm + 'static,
        implication: impl Implication + 'static,
        aggregation: impl Aggregation + 'static,
    ) -> Self {
        Self {
            and_op: Arc::new(and_op),
            or_op: Arc::new(or_op),
            implication: Arc::new(implication),
            aggregation: Arc::new(aggregation),
        }
    }

    pub fn implication(&self) -> &dyn Implication {
        &*self.implication
    }

    pub fn aggregation(&self) -> &dyn Aggregation {
        &*self.aggregation
    }

    pub fn infer<'r>(
        &self,
        rules: impl IntoIterator<Item = &'r Rule>,
        fuzzified: &Fuzzified,
        output: &LinguisticVariable,
    ) -> Inferred {
        let mut collected: IndexMap<&str, Vec<f64>> = IndexMap::new();

        for rule in rules.into_iter().filter(|rule| rule.is_enabled()) {
            let strength = firing_strength(rule, fuzzified, &*self.and_op, &*self.or_op);

            trace!(rule = %rule, strength, "fired");

            if strength > 0. && output.fuzzy_set(rule.consequent_set()).is_some() {
                collected.entry(rule.consequent_set()).or_default().push(strength);
            }
        }

        let inferred: Inferred = collected
            .into_iter()
            .map(|(term, strengths)| (term.to_owned(), self.aggregation.aggregate(&strengths)))
            .collect();

        debug!(?inferred, "mamdani inference");

        inferred
    }

    /// The clipped-then-aggregated output surface at `x`: the max over every
    /// fired term of `implication(degree, μ(x))`
    pub fn implied_membership(&self, inferred: &Inferred, output: &LinguisticVariable, x: f64) -> f64 {
        inferred
            .iter()
            .filter_map(|(term, degree)| {
                let set = output.fuzzy_set(term)?;

                Some(self.implication.apply(*degree, set.membership(x)))
            })
            .fold(0., f64::max)
    }
}

/// Crisp consequents: each output term maps to a constant, optionally plus a
/// linear combination of input representatives (first order).
#[derive(Clone, Debug)]
pub struct Sugeno {
    and_op: Arc<dyn TNorm>,
    or_op: Arc<dyn SNorm>,
    consequents: IndexMap<String, f64>,
    coefficients: Option<IndexMap<String, IndexMap<String, f64>>>,
}

impl Sugeno {
    /// Zero-order: every output term is a constant
    pub fn new(and_op: impl TNorm + 'static, or_op: impl SNorm + 'static, consequents: IndexMap<String, f64>) -> Self {
        Self::from_shared(Arc::new(and_op), Arc::new(or_op), consequents, None)
    }

    /// First-order: `coefficients[term][variable]` scales that variable's crisp representative
    pub fn first_order(
        and_op: impl TNorm + 'static,
        or_op: impl SNorm + 'static,
        consequents: IndexMap<String, f64>,
        coefficients: IndexMap<String, IndexMap<String, f64>>,
    ) -> Self {
        Self::from_shared(Arc::new(and_op), Arc::new(or_op), consequents, Some(coefficients))
    }

    pub(crate) fn from_shared(
        and_op: Arc<dyn TNorm>,
        or_op: Arc<dyn SNorm>,
        consequents: IndexMap<String, f64>,
        coefficients: Option<IndexMap<String, IndexMap<String, f64>>>,
    ) -> Self {
        Self {
            and_op,
            or_op,
            consequents,
            coefficients,
        }
    }

    pub fn consequents(&self) -> &IndexMap<String, f64> {
        &self.consequents
    }

    pub fn coefficients(&self) -> Option<&IndexMap<String, IndexMap<String, f64>>> {
        self.coefficients.as_ref()
    }

    pub fn is_first_order(&self) -> bool {
        self.coefficients.is_some()
    }

    pub fn infer<'r>(&self, rules: impl IntoIterator<Item = &'r Rule>, fuzzified: &Fuzzified) -> Inferred {
        let mut weighted_sum = 0f64;
        let mut weight_sum = 0f64;

        for rule in rules.into_iter().filter(|rule| rule.is_enabled()) {
            let strength = firing_strength(rule, fuzzified, &*self.and_op, &*self.or_op);

            trace!(rule = %rule, strength, "fired");

            if strength > 0. {
                weighted_sum += strength * self.consequent_value(rule.consequent_set(), fuzzified);
                weight_sum += strength;
            }
        }

        let value = if weight_sum > 0. { weighted_sum / weight_sum } else { 0. };

        debug!(value, weight_sum, "sugeno inference");

        IndexMap::from([(SUGENO_OUTPUT.to_owned(), value)])
    }

    fn consequent_value(&self, term: &str, fuzzified: &Fuzzified) -> f64 {
        let constant = self.consequents.get(term).copied().unwrap_or(0.);
        let Some(coefficients) = self.coefficients.as_ref().and_then(|c| c.get(term)) else {
            return constant;
        };

        coefficients
            .iter()
            .filter_map(|(variable, coefficient)| {
                let terms = fuzzified.get(variable)?;

                Some(coefficient * self.crisp_representative(terms))
            })
            .fold(constant, |acc, v| acc + v)
    }

    /// Membership-weighted mean of the consequent table, looked up by the input's own term names
    fn crisp_representative(&self, terms: &IndexMap<String, f64>) -> f64 {
        let (weighted_sum, weight_sum) = terms.iter().fold((0f64, 0f64), |(num, den), (term, &membership)| {
            let center = self.consequents.get(term).copied().unwrap_or(0.);

            (num + membership * center, den + membership)
        });

        if weight_sum > 0. {
            weighted_sum / weight_sum
        } else {
            0.
        }
    }
}

/// The two inference families. Swapping operators rebuilds the engine within its family.
#[derive(Clone, Debug)]
pub enum InferenceEngine {
    Mamdani(Mamdani),
    Sugeno(Sugeno),
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::Mamdani(Mamdani::default())
    }
}

impl From<Mamdani> for InferenceEngine {
    fn from(engine: Mamdani) -> Self {
        Self::Mamdani(engine)
    }
}

impl From<Sugeno> for InferenceEngine {
    fn from(engine: Sugeno) -> Self {
        Self::Sugeno(engine)
    }
}

impl InferenceEngine {
    pub fn infer<'r>(
        &self,
        rules: impl IntoIterator<Item = &'r Rule>,
        fuzzified: &Fuzzified,
        output: &LinguisticVariable,
    ) -> Inferred {
        match self {
            Self::Mamdani(engine) => engine.infer(rules, fuzzified, output),
            Self::Sugeno(engine) => engine.infer(rules, fuzzified),
        }
    }

    pub fn is_mamdani(&self) -> bool {
        matches!(self, Self::Mamdani(_))
    }

    pub fn is_sugeno(&self) -> bool {
        matches!(self, Self::Sugeno(_))
    }

    /// A fresh engine of the same family carrying the given AND/OR operators.
    ///
    /// Mamdani keeps its implication and aggregation. Sugeno keeps its consequent
    /// table and coefficients; an empty table is recomputed from the output
    /// variable's term centers.
    pub(crate) fn with_operators(
        &self,
        and_op: Arc<dyn TNorm>,
        or_op: Arc<dyn SNorm>,
        output: &LinguisticVariable,
    ) -> Self {
        match self {
            Self::Mamdani(engine) => Self::Mamdani(Mamdani {
                and_op,
                or_op,
                implication: engine.implication.clone(),
                aggregation: engine.aggregation.clone(),
            }),
            Self::Sugeno(engine) => {
                let consequents = if engine.consequents.is_empty() {
                    output.term_centers()
                } else {
                    engine.consequents.clone()
                };

                Self::Sugeno(Sugeno {
                    and_op,
                    or_op,
                    consequents,
                    coefficients: engine.coefficients.clone(),
                })
            },
        }
    }

    pub(crate) fn operators(&self) -> (&Arc<dyn TNorm>, &Arc<dyn SNorm>) {
        match self {
            Self::Mamdani(engine) => (&engine.and_op, &engine.or_op),
            Self::Sugeno(engine) => (&engine.and_op, &engine.or_op),
        }
    }
}
