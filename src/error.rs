use thiserror::Error;

/// Construction-time validation failures. Evaluation itself never fails.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FuzzyError {
    /// A membership function was given control points or a spread it cannot represent
    #[error("invalid membership function parameter: {0}")]
    InvalidParameter(String),
    #[error("{kind} name cannot be empty")]
    EmptyName { kind: &'static str },
    #[error("invalid domain [{min}, {max}]: min must be less than max")]
    InvalidDomain { min: f64, max: f64 },
    #[error("rule weight must be in [0, 1], got {0}")]
    InvalidWeight(f64),
    #[error("rule index {index} out of range for rule base of {len} rules")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("number of samples must be positive, got {0}")]
    InvalidSampleCount(usize),
}

pub type Result<T> = std::result::Result<T, FuzzyError>;

pub(crate) fn non_empty(name: impl Into<String>, kind: &'static str) -> Result<String> {
    let name = name.into();

    if name.trim().is_empty() {
        return Err(FuzzyError::EmptyName { kind });
    }

    Ok(name)
}
