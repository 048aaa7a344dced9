use std::fmt::Debug;

use num::Float;

/// Fuzzy AND: binary, commutative and associative on `[0, 1]`
pub trait TNorm: Debug + Send + Sync {
    fn compute(&self, a: f64, b: f64) -> f64;
}

/// Fuzzy OR: binary, commutative and associative on `[0, 1]`
pub trait SNorm: Debug + Send + Sync {
    fn compute(&self, a: f64, b: f64) -> f64;
}

/// Reshapes a consequent's membership by the strength of the rule that fired it
pub trait Implication: Debug + Send + Sync {
    fn apply(&self, strength: f64, membership: f64) -> f64;
}

/// Folds every contribution targeting the same output set into one degree
pub trait Aggregation: Debug + Send + Sync {
    fn aggregate(&self, values: &[f64]) -> f64;
}

/// And operator method for combining the compositions of propositions
/// in a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AndOp {
    #[default]
    Min,
    Prod,
    BoundedProd,
    DrasticProd,
}

impl AndOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Min => ProductionLink::Min.call(u, v),
            Self::Prod => ProductionLink::Prod.call(u, v),
            Self::BoundedProd => ProductionLink::BoundedProd.call(u, v),
            Self::DrasticProd => ProductionLink::DrasticProd.call(u, v),
        }
    }
}

impl TNorm for AndOp {
    fn compute(&self, a: f64, b: f64) -> f64 {
        self.call(a, b)
    }
}

/// Or operator method for combining the compositions of propositions
/// in a fuzzy rule premise.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OrOp {
    #[default]
    Max,
    BoundedSum,
    ProbOr,
    DrasticSum,
}

impl OrOp {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => ProductionLink::Max.call(u, v),
            Self::BoundedSum => ProductionLink::BoundedSum.call(u, v),
            Self::ProbOr => ProductionLink::ProbOr.call(u, v),
            Self::DrasticSum => ProductionLink::DrasticSum.call(u, v),
        }
    }
}

impl SNorm for OrOp {
    fn compute(&self, a: f64, b: f64) -> f64 {
        self.call(a, b)
    }
}

/// Implication operator method for clipping or scaling a consequent
/// by its rule's firing strength.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ImplicationOp {
    /// Mamdani clipping
    #[default]
    Min,
    /// Larsen scaling
    Prod,
}

impl ImplicationOp {
    pub fn call<F: Float>(self, strength: F, membership: F) -> F {
        match self {
            Self::Min => F::min(strength, membership),
            Self::Prod => strength * membership,
        }
    }
}

impl Implication for ImplicationOp {
    fn apply(&self, strength: f64, membership: f64) -> f64 {
        self.call(strength, membership)
    }
}

/// Method for aggregating the consequences of the fuzzy rules
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ProductionLink {
    Min,
    Prod,
    BoundedProd,
    DrasticProd,
    #[default]
    Max,
    ProbOr,
    BoundedSum,
    DrasticSum,
}

impl ProductionLink {
    pub fn call<F: Float>(self, u: F, v: F) -> F {
        match self {
            Self::Max => F::max(u, v),
            Self::ProbOr => u + v - u * v,
            Self::BoundedSum => F::min(F::one(), u + v),
            Self::DrasticSum => {
                if v == F::zero() {
                    u
                } else if u == F::zero() {
                    v
                } else {
                    F::one()
                }
            },
            Self::Min => F::min(u, v),
            Self::Prod => u * v,
            Self::BoundedProd => F::max(F::zero(), u + v - F::one()),
            Self::DrasticProd => {
                if v == F::one() {
                    u
                } else if u == F::one() {
                    v
                } else {
                    F::zero()
                }
            },
        }
    }

    /// Left fold over `values`; an empty slice aggregates to zero
    pub fn fold<F: Float>(self, values: &[F]) -> F {
        match values {
            [] => F::zero(),
            [first, rest @ ..] => rest.iter().fold(*first, |acc, v| self.call(acc, *v)),
        }
    }
}

impl Aggregation for ProductionLink {
    fn aggregate(&self, values: &[f64]) -> f64 {
        self.fold(values)
    }
}
