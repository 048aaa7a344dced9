use crate::rules::{Antecedent, Connective, Rule};
use crate::variable::LinguisticVariable;

/// A rule premise under construction: `is("x", "a").and("y", "b").then("z", "c")`
#[derive(Clone, Debug, PartialEq)]
pub struct Premise(Vec<Antecedent>);

/// Starts a premise with its first proposition
pub fn is(variable: impl Into<String>, set: impl Into<String>) -> Premise {
    Premise(vec![Antecedent::new(variable, set, Connective::And)])
}

impl Premise {
    pub fn and(self, variable: impl Into<String>, set: impl Into<String>) -> Self {
        self.push(variable, set, Connective::And)
    }

    pub fn or(self, variable: impl Into<String>, set: impl Into<String>) -> Self {
        self.push(variable, set, Connective::Or)
    }

    pub fn then(self, variable: impl Into<String>, set: impl Into<String>) -> Rule {
        Rule::new(self.0, variable, set)
    }

    pub fn propositions(&self) -> &[Antecedent] {
        &self.0
    }

    fn push(mut self, variable: impl Into<String>, set: impl Into<String>, connective: Connective) -> Self {
        self.0.push(Antecedent::new(variable, set, connective));
        self
    }
}

impl LinguisticVariable {
    pub fn is(&self, set: impl Into<String>) -> Premise {
        is(self.name(), set)
    }
}

#[test]
fn test_premise_builder() {
    let pain = LinguisticVariable::new("Pain", 0., 10.).unwrap();
    let rule = pain
        .is("Severe")
        .or("Temperature", "HighFever")
        .and("BloodPressure", "Low")
        .then("Urgency", "Critical");
    let premise = rule.premise();

    assert_eq!(premise.len(), 3);
    assert_eq!((premise[0].variable(), premise[0].set()), ("Pain", "Severe"));
    assert_eq!(premise[1].connective(), Connective::Or);
    assert_eq!(premise[2].connective(), Connective::And);
    assert_eq!(rule.consequent_variable(), "Urgency");
    assert_eq!(rule.consequent_set(), "Critical");
    assert!(rule.is_enabled());
    assert_eq!(rule.weight(), 1.);
}
