use crate::inference::{Fuzzified, Inferred};

/// Every stage of one evaluation, for inspection
#[derive(Clone, Debug, PartialEq)]
pub struct Outputs {
    fuzzified: Fuzzified,
    inferred: Inferred,
    crisp: f64,
}

impl Outputs {
    pub(crate) fn new(fuzzified: Fuzzified, inferred: Inferred, crisp: f64) -> Self {
        Self {
            fuzzified,
            inferred,
            crisp,
        }
    }

    pub fn fuzzified(&self) -> &Fuzzified {
        &self.fuzzified
    }

    pub fn inferred(&self) -> &Inferred {
        &self.inferred
    }

    pub fn get_inferred_membership(&self, term: &str) -> Option<f64> {
        self.inferred.get(term).copied()
    }

    pub fn crisp(&self) -> f64 {
        self.crisp
    }
}
