//! A single-output fuzzy inference engine.
//!
//! Crisp inputs are fuzzified against [`LinguisticVariable`]s, a weighted [`Rules`]
//! base is fired through a Mamdani or Sugeno [`InferenceEngine`], and the result is
//! collapsed into one crisp value by a [`Defuzzifier`].
//!
//! ```
//! use fuzzy_engine::{is, FuzzyLogicSystem, Inputs, LinguisticVariable, Triangular};
//!
//! # fn main() -> fuzzy_engine::Result<()> {
//! let service = LinguisticVariable::new("service", 0., 10.)?
//!     .with_set("poor", Triangular::new(-5., 0., 5.)?)?
//!     .with_set("good", Triangular::new(5., 10., 15.)?)?;
//! let tip = LinguisticVariable::new("tip", 0., 30.)?
//!     .with_set("low", Triangular::new(0., 5., 10.)?)?
//!     .with_set("high", Triangular::new(20., 25., 30.)?)?;
//!
//! let mut system = FuzzyLogicSystem::new(tip);
//! system.add_input_variable(service);
//! system.add_rule(is("service", "poor").then("tip", "low"));
//! system.add_rule(is("service", "good").then("tip", "high"));
//!
//! let tip = system.evaluate(&Inputs::from([("service", 9.)]));
//! assert!(tip > 20.);
//! # Ok(())
//! # }
//! ```

mod config;
mod defuzzification;
mod dsl;
mod error;
mod inference;
mod inputs;
mod linspace;
mod math;
mod membership;
mod ops;
mod outputs;
mod rules;
mod system;
mod terms;
mod variable;

pub use config::SystemConfig;
pub use defuzzification::{Defuzzification, DefuzzificationOp, Defuzzifier, DEFAULT_SAMPLES};
pub use dsl::{is, Premise};
pub use error::{FuzzyError, Result};
pub use inference::{firing_strength, Fuzzified, InferenceEngine, Inferred, Mamdani, Sugeno, SUGENO_OUTPUT};
pub use inputs::Inputs;
pub use linspace::Linspace;
pub use membership::{Gaussian, MembershipFunction, PiecewiseLinear, Trapezoidal, Triangular};
pub use ops::{Aggregation, AndOp, Implication, ImplicationOp, OrOp, ProductionLink, SNorm, TNorm};
pub use outputs::Outputs;
pub use rules::{Antecedent, Connective, Rule, Rules};
pub use system::FuzzyLogicSystem;
pub use terms::FuzzySet;
pub use variable::LinguisticVariable;
