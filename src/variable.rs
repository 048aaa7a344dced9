use indexmap::IndexMap;

use crate::error::{non_empty, FuzzyError, Result};
use crate::membership::MembershipFunction;
use crate::terms::FuzzySet;

/// A named universe `[min, max]` and the fuzzy sets (terms) defined over it.
///
/// Terms keep their insertion order. Adding a term whose name already exists
/// replaces the earlier one in place.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name: String,
    min_u: f64,
    max_u: f64,
    terms: IndexMap<String, FuzzySet>,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>, min_u: f64, max_u: f64) -> Result<Self> {
        let name = non_empty(name, "variable")?;

        // The width must be finite too, or the sampling step overflows
        if !(min_u < max_u) || !(max_u - min_u).is_finite() {
            return Err(FuzzyError::InvalidDomain { min: min_u, max: max_u });
        }

        Ok(Self {
            name,
            min_u,
            max_u,
            terms: IndexMap::new(),
        })
    }

    pub fn add_fuzzy_set(&mut self, set: FuzzySet) {
        self.terms.insert(set.name().to_owned(), set);
    }

    /// Builds and adds a fuzzy set in one go, returning the variable for chaining
    pub fn with_set(mut self, name: impl Into<String>, membership: impl MembershipFunction + 'static) -> Result<Self> {
        self.add_fuzzy_set(FuzzySet::new(name, membership)?);

        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_domain(&self) -> f64 {
        self.min_u
    }

    pub fn max_domain(&self) -> f64 {
        self.max_u
    }

    pub fn midpoint(&self) -> f64 {
        self.min_u / 2. + self.max_u / 2.
    }

    pub fn fuzzy_set(&self, name: &str) -> Option<&FuzzySet> {
        self.terms.get(name)
    }

    pub fn fuzzy_sets(&self) -> impl Iterator<Item = &FuzzySet> {
        self.terms.values()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Clamps `value` into the domain; NaN and infinities map to the midpoint
    pub fn validate_input(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.midpoint();
        }

        value.clamp(self.min_u, self.max_u)
    }

    /// Membership of the validated `value` in every term, keeping only non-zero degrees
    pub fn fuzzify(&self, value: f64) -> IndexMap<String, f64> {
        let value = self.validate_input(value);

        self.terms
            .iter()
            .filter_map(|(name, set)| {
                let membership = set.membership(value);

                (membership > 0.).then(|| (name.clone(), membership))
            })
            .collect()
    }

    /// Each term's domain midpoint, keyed by term name
    pub fn term_centers(&self) -> IndexMap<String, f64> {
        self.terms.iter().map(|(name, set)| (name.clone(), set.center())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership::{Trapezoidal, Triangular};

    fn temperature() -> LinguisticVariable {
        LinguisticVariable::new("Temperature", 35., 42.)
            .and_then(|v| v.with_set("Low", Triangular::new(35., 36., 36.5)?))
            .and_then(|v| v.with_set("Normal", Trapezoidal::new(36., 36.5, 37.5, 38.)?))
            .and_then(|v| v.with_set("Fever", Triangular::new(37.5, 38.5, 39.5)?))
            .unwrap()
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            LinguisticVariable::new("", 0., 1.).unwrap_err(),
            FuzzyError::EmptyName { kind: "variable" }
        );
        assert_eq!(
            LinguisticVariable::new("x", 1., 1.).unwrap_err(),
            FuzzyError::InvalidDomain { min: 1., max: 1. }
        );
        assert!(LinguisticVariable::new("x", 2., 1.).is_err());
        assert!(LinguisticVariable::new("x", f64::NAN, 1.).is_err());
        assert!(LinguisticVariable::new("x", 0., f64::INFINITY).is_err());

        // Both bounds finite, but the width overflows
        assert_eq!(
            LinguisticVariable::new("x", -1e308, 1e308).unwrap_err(),
            FuzzyError::InvalidDomain { min: -1e308, max: 1e308 }
        );
    }

    #[test]
    fn test_midpoint_of_huge_domain() {
        let var = LinguisticVariable::new("v", 1e308, 1.7e308).unwrap();
        let mid = var.validate_input(f64::NAN);

        assert!(mid.is_finite());
        assert!(var.min_domain() <= mid && mid <= var.max_domain());
        assert_eq!(var.validate_input(f64::INFINITY), mid);
    }

    #[test]
    fn test_validate_input() {
        let var = temperature();

        assert_eq!(var.validate_input(30.), 35.);
        assert_eq!(var.validate_input(50.), 42.);
        assert_eq!(var.validate_input(37.), 37.);
        assert_eq!(var.validate_input(f64::NAN), 38.5);
        assert_eq!(var.validate_input(f64::INFINITY), 38.5);
        assert_eq!(var.validate_input(f64::NEG_INFINITY), 38.5);
    }

    #[test]
    fn test_fuzzify_omits_zero_memberships() {
        let var = temperature();
        let fuzzified = var.fuzzify(37.75);

        assert_eq!(fuzzified.len(), 2);
        assert_eq!(fuzzified["Normal"], 0.5);
        assert_eq!(fuzzified["Fever"], 0.25);
        assert!(!fuzzified.contains_key("Low"));

        // Clamped to 35, where every term is zero
        assert!(var.fuzzify(-10.).is_empty());
    }

    #[test]
    fn test_last_write_wins_keeps_order() {
        let mut var = temperature();

        var.add_fuzzy_set(FuzzySet::new("Low", Triangular::new(35., 35.5, 36.).unwrap()).unwrap());

        let names: Vec<_> = var.fuzzy_sets().map(FuzzySet::name).collect();

        assert_eq!(names, ["Low", "Normal", "Fever"]);
        assert_eq!(var.len(), 3);
        assert_eq!(var.fuzzy_set("Low").unwrap().center(), 35.5);
        assert_eq!(var.term_centers()["Normal"], 37.);
    }
}
