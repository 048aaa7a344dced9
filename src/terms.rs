use std::fmt;
use std::sync::Arc;

use crate::error::{non_empty, Result};
use crate::membership::MembershipFunction;

/// A named fuzzy set: one term of a linguistic variable
#[derive(Clone, Debug)]
pub struct FuzzySet {
    name: String,
    membership: Arc<dyn MembershipFunction>,
}

impl FuzzySet {
    pub fn new(name: impl Into<String>, membership: impl MembershipFunction + 'static) -> Result<Self> {
        Ok(Self {
            name: non_empty(name, "fuzzy set")?,
            membership: Arc::new(membership),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn membership(&self, x: f64) -> f64 {
        self.membership.calculate(x)
    }

    pub fn membership_function(&self) -> &dyn MembershipFunction {
        &*self.membership
    }

    /// Midpoint of the membership function's domain
    pub fn center(&self) -> f64 {
        self.membership.center()
    }
}

impl fmt::Display for FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[test]
fn test_fuzzy_set() {
    use crate::error::FuzzyError;
    use crate::membership::{Gaussian, Triangular};

    let set = FuzzySet::new("Warm", Triangular::new(10., 20., 30.).unwrap()).unwrap();

    assert_eq!(set.name(), "Warm");
    assert_eq!(set.membership(15.), 0.5);
    assert_eq!(set.center(), 20.);
    assert_eq!(set.to_string(), "Warm");

    let gauss = Gaussian::new(0., 1.).unwrap();

    assert_eq!(FuzzySet::new("  ", gauss).unwrap_err(), FuzzyError::EmptyName { kind: "fuzzy set" });
}
