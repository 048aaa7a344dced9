use approx::assert_abs_diff_eq;
use fuzzy_engine::{
    is, Defuzzification, DefuzzificationOp, FuzzyLogicSystem, Inputs, LinguisticVariable, Result, Rule, Trapezoidal,
    Triangular,
};

fn pain() -> Result<LinguisticVariable> {
    LinguisticVariable::new("PainLevel", 0., 10.)?
        .with_set("Minimal", Triangular::new(-0.5, 0., 2.5)?)?
        .with_set("Mild", Triangular::new(0., 2.5, 5.)?)?
        .with_set("Moderate", Triangular::new(2.5, 5., 7.5)?)?
        .with_set("Severe", Triangular::new(5., 7.5, 10.)?)?
        .with_set("Extreme", Triangular::new(7.5, 10., 10.5)?)
}

fn temperature() -> Result<LinguisticVariable> {
    LinguisticVariable::new("Temperature", 35., 42.)?
        .with_set("Hypothermic", Triangular::new(34.5, 35., 36.)?)?
        .with_set("Low", Triangular::new(35., 36., 36.5)?)?
        .with_set("Normal", Trapezoidal::new(36., 36.5, 37.5, 38.)?)?
        .with_set("Fever", Triangular::new(37.5, 38.5, 39.5)?)?
        .with_set("HighFever", Triangular::new(38.5, 40., 42.5)?)
}

fn blood_pressure() -> Result<LinguisticVariable> {
    LinguisticVariable::new("BloodPressure", 60., 200.)?
        .with_set("Critical_Low", Triangular::new(59., 60., 80.)?)?
        .with_set("Low", Triangular::new(70., 85., 100.)?)?
        .with_set("Normal", Trapezoidal::new(90., 100., 120., 140.)?)?
        .with_set("High", Triangular::new(130., 150., 170.)?)?
        .with_set("Critical_High", Triangular::new(160., 180., 201.)?)
}

fn urgency() -> Result<LinguisticVariable> {
    LinguisticVariable::new("UrgencyScore", 0., 100.)?
        .with_set("Can_Wait", Trapezoidal::new(-1., 0., 12.5, 25.)?)?
        .with_set("See_Soon", Triangular::new(12.5, 25., 37.5)?)?
        .with_set("Urgent", Triangular::new(25., 50., 75.)?)?
        .with_set("Emergency", Triangular::new(50., 75., 90.)?)?
        .with_set("Critical", Trapezoidal::new(75., 90., 100., 101.)?)
}

fn triage_rule(pain: &str, temperature: &str, blood_pressure: &str, urgency: &str) -> Rule {
    is("PainLevel", pain)
        .and("Temperature", temperature)
        .and("BloodPressure", blood_pressure)
        .then("UrgencyScore", urgency)
}

fn triage() -> Result<FuzzyLogicSystem> {
    let mut system = FuzzyLogicSystem::new(urgency()?);

    system.add_input_variable(pain()?);
    system.add_input_variable(temperature()?);
    system.add_input_variable(blood_pressure()?);

    for (pain, temperature, blood_pressure, urgency) in [
        ("Extreme", "HighFever", "Critical_High", "Critical"),
        ("Extreme", "HighFever", "Critical_Low", "Critical"),
        ("Extreme", "Hypothermic", "Critical_Low", "Critical"),
        ("Severe", "HighFever", "Normal", "Emergency"),
        ("Severe", "Normal", "Critical_High", "Emergency"),
        ("Severe", "Normal", "Critical_Low", "Emergency"),
        ("Moderate", "Fever", "High", "Urgent"),
        ("Moderate", "Fever", "Low", "Urgent"),
        ("Moderate", "Normal", "High", "Urgent"),
        ("Moderate", "Normal", "Low", "Urgent"),
        ("Mild", "Normal", "Normal", "See_Soon"),
        ("Mild", "Low", "Normal", "See_Soon"),
        ("Minimal", "Normal", "Normal", "Can_Wait"),
        ("Minimal", "Low", "Normal", "Can_Wait"),
        ("Extreme", "Normal", "Normal", "Emergency"),
        ("Severe", "Fever", "Normal", "Urgent"),
        ("Moderate", "Normal", "Normal", "See_Soon"),
        ("Mild", "Fever", "Normal", "See_Soon"),
    ] {
        system.add_rule(triage_rule(pain, temperature, blood_pressure, urgency));
    }

    Ok(system)
}

fn patient(pain: f64, temperature: f64, blood_pressure: f64) -> Inputs {
    Inputs::from([
        ("PainLevel", pain),
        ("Temperature", temperature),
        ("BloodPressure", blood_pressure),
    ])
}

#[test]
fn test_critical_patient() {
    let system = triage().unwrap();
    let outputs = system.evaluate_detailed(&patient(8.5, 39.5, 180.));

    assert_abs_diff_eq!(outputs.fuzzified()["PainLevel"]["Extreme"], 0.4, epsilon = 1e-12);
    assert_abs_diff_eq!(outputs.fuzzified()["PainLevel"]["Severe"], 0.6, epsilon = 1e-12);
    assert_eq!(outputs.inferred().len(), 1);
    assert_abs_diff_eq!(outputs.inferred()["Critical"], 0.4, epsilon = 1e-12);
    assert_abs_diff_eq!(outputs.crisp(), 88.957, epsilon = 1e-3);
}

#[test]
fn test_mild_patient() {
    let system = triage().unwrap();
    let outputs = system.evaluate_detailed(&patient(3., 36.5, 110.));

    // Two rules target See_Soon: 0.8 and 0.2, aggregated by max
    assert_eq!(outputs.inferred().len(), 1);
    assert_abs_diff_eq!(outputs.inferred()["See_Soon"], 0.8, epsilon = 1e-12);
    assert_abs_diff_eq!(outputs.crisp(), 25., epsilon = 1e-9);
}

#[test]
fn test_minimal_patient() {
    let system = triage().unwrap();
    let outputs = system.evaluate_detailed(&patient(1., 36., 105.));

    assert_eq!(outputs.inferred().keys().collect::<Vec<_>>(), ["See_Soon", "Can_Wait"]);
    assert_abs_diff_eq!(outputs.crisp(), 15.783, epsilon = 1e-3);
}

#[test]
fn test_out_of_range_vitals_are_clamped() {
    let system = triage().unwrap();

    assert_eq!(
        system.evaluate(&patient(15., 50., 300.)),
        system.evaluate(&patient(10., 42., 200.))
    );
}

#[test]
fn test_what_if_rule_editing() {
    let mut system = triage().unwrap();
    let inputs = patient(8.5, 39.5, 180.);
    let before = system.evaluate(&inputs);

    system.rule_base_mut().disable(0).unwrap();

    // Nothing else fires for this patient
    assert_eq!(system.evaluate(&inputs), 50.);

    system.rule_base_mut().enable(0).unwrap();
    system.rule_base_mut().set_weight(0, 0.5).unwrap();

    let outputs = system.evaluate_detailed(&inputs);

    assert_abs_diff_eq!(outputs.inferred()["Critical"], 0.2, epsilon = 1e-12);
    assert!(outputs.crisp() > 75.);

    system.rule_base_mut().set_weight(0, 1.).unwrap();

    assert_eq!(system.evaluate(&inputs), before);
}

#[test]
fn test_defuzzifiers_agree_on_category() {
    let mut system = triage().unwrap();
    let inputs = patient(3., 36.5, 110.);

    for op in [
        DefuzzificationOp::Cog,
        DefuzzificationOp::Boa,
        DefuzzificationOp::Mom,
        DefuzzificationOp::Som,
        DefuzzificationOp::Lom,
    ] {
        system.set_defuzzifier(Defuzzification::new(op, 1000).unwrap());

        let score = system.evaluate(&inputs);

        assert!((12.5..=37.5).contains(&score), "{op:?}: {score}");
    }
}

#[test]
fn test_sugeno_triage() {
    let mut system = triage().unwrap();

    system.setup_sugeno_from_midpoints();

    // Only See_Soon fires, so the weighted average is its midpoint
    assert_abs_diff_eq!(system.evaluate(&patient(3., 36.5, 110.)), 25., epsilon = 1e-12);
}
