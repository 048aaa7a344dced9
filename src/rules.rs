use std::fmt;

use tracing::debug;

use crate::error::{FuzzyError, Result};

/// How a condition joins the running strength of the conditions before it
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Connective {
    And,
    Or,
}

/// One `variable IS set` proposition of a rule premise
#[derive(Clone, Debug, PartialEq)]
pub struct Antecedent {
    pub(crate) variable: String,
    pub(crate) set: String,
    // Ignored on the first condition of a premise
    pub(crate) connective: Connective,
}

impl Antecedent {
    pub fn new(variable: impl Into<String>, set: impl Into<String>, connective: Connective) -> Self {
        Self {
            variable: variable.into(),
            set: set.into(),
            connective,
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn set(&self) -> &str {
        &self.set
    }

    pub fn connective(&self) -> Connective {
        self.connective
    }
}

/// An IF-THEN rule: an ordered premise evaluated left to right and a single consequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    pub(crate) premise: Vec<Antecedent>,
    pub(crate) consequence: (String, String),
    enabled: bool,
    weight: f64,
}

impl Rule {
    /// A rule with an empty premise, which always fires at full strength
    pub fn always(variable: impl Into<String>, set: impl Into<String>) -> Self {
        Self::new(Vec::new(), variable, set)
    }

    pub fn new(premise: Vec<Antecedent>, variable: impl Into<String>, set: impl Into<String>) -> Self {
        Rule {
            premise,
            consequence: (variable.into(), set.into()),
            enabled: true,
            weight: 1.,
        }
    }

    pub fn premise(&self) -> &[Antecedent] {
        &self.premise
    }

    pub fn consequent_variable(&self) -> &str {
        &self.consequence.0
    }

    pub fn consequent_set(&self) -> &str {
        &self.consequence.1
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Rejects weights outside `[0, 1]`, leaving the current weight untouched
    pub fn set_weight(&mut self, weight: f64) -> Result<()> {
        if !(0. ..=1.).contains(&weight) {
            return Err(FuzzyError::InvalidWeight(weight));
        }

        self.weight = weight;

        Ok(())
    }

    pub fn with_weight(mut self, weight: f64) -> Result<Self> {
        self.set_weight(weight)?;

        Ok(self)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IF ")?;

        if self.premise.is_empty() {
            f.write_str("TRUE")?;
        }

        for (i, cond) in self.premise.iter().enumerate() {
            if i > 0 {
                f.write_str(match cond.connective {
                    Connective::And => " AND ",
                    Connective::Or => " OR ",
                })?;
            }

            write!(f, "{} IS {}", cond.variable, cond.set)?;
        }

        write!(f, " THEN {} IS {}", self.consequence.0, self.consequence.1)?;

        if self.weight != 1. {
            write!(f, " (weight: {})", self.weight)?;
        }

        Ok(())
    }
}

/// Ordered rule collection. Insertion order is evaluation order.
///
/// Enable, disable and weight changes are meant to happen between evaluations;
/// callers sharing a system across threads must serialize access themselves.
#[derive(Clone, Debug, Default)]
pub struct Rules(pub(crate) Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, rule: Rule) {
        debug!(rule = %rule, index = self.0.len(), "adding rule");

        self.0.push(rule);
    }

    pub fn remove(&mut self, index: usize) -> Result<Rule> {
        self.check(index)?;

        let rule = self.0.remove(index);

        debug!(rule = %rule, index, "removed rule");

        Ok(rule)
    }

    pub fn get(&self, index: usize) -> Result<&Rule> {
        self.0.get(index).ok_or(FuzzyError::IndexOutOfRange { index, len: self.0.len() })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Rule> {
        let len = self.0.len();

        self.0.get_mut(index).ok_or(FuzzyError::IndexOutOfRange { index, len })
    }

    pub fn enable(&mut self, index: usize) -> Result<()> {
        self.get_mut(index)?.set_enabled(true);
        debug!(index, "enabled rule");

        Ok(())
    }

    pub fn disable(&mut self, index: usize) -> Result<()> {
        self.get_mut(index)?.set_enabled(false);
        debug!(index, "disabled rule");

        Ok(())
    }

    pub fn set_weight(&mut self, index: usize, weight: f64) -> Result<()> {
        self.get_mut(index)?.set_weight(weight)?;
        debug!(index, weight, "changed rule weight");

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn all(&self) -> &[Rule] {
        &self.0
    }

    /// Enabled rules, in their original relative order
    pub fn enabled(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter().filter(|rule| rule.enabled)
    }

    fn check(&self, index: usize) -> Result<()> {
        if index >= self.0.len() {
            return Err(FuzzyError::IndexOutOfRange { index, len: self.0.len() });
        }

        Ok(())
    }
}

impl Extend<Rule> for Rules {
    fn extend<T: IntoIterator<Item = Rule>>(&mut self, iter: T) {
        for rule in iter {
            self.add(rule);
        }
    }
}

impl FromIterator<Rule> for Rules {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        let mut rules = Rules::new();
        rules.extend(iter);
        rules
    }
}
