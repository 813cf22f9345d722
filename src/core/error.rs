use std::fmt;

use thiserror::Error;

/// A rule the input profile violates. Every variant is an input validation failure;
/// the engine has no other error kind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("retirement age must be greater than current age (working years: {working_years})")]
    WorkingHorizon { working_years: i64 },

    #[error(
        "life expectancy must be greater than retirement age (retirement years: {retirement_years})"
    )]
    RetirementHorizon { retirement_years: i64 },

    #[error("{field} must be at most {max} (got {age})")]
    AgeLimit {
        field: &'static str,
        age: u32,
        max: u32,
    },

    #[error("tax rate must be between 0 and 100 (got {tax_rate_pct})")]
    TaxRate { tax_rate_pct: f64 },

    #[error("z-score for the adverse scenario must be a finite number")]
    ZScore,

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be greater than -100% (got {rate_pct})")]
    RateFloor { field: &'static str, rate_pct: f64 },

    #[error("{field} cannot be represented as a finite number for this profile")]
    Unrepresentable { field: &'static str },
}

impl ValidationError {
    /// Stable identifier a presentation layer can translate.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::WorkingHorizon { .. } => "working-horizon",
            ValidationError::RetirementHorizon { .. } => "retirement-horizon",
            ValidationError::AgeLimit { .. } => "age-limit",
            ValidationError::TaxRate { .. } => "tax-rate",
            ValidationError::ZScore => "z-score",
            ValidationError::NonFinite { .. } => "non-finite",
            ValidationError::RateFloor { .. } => "rate-floor",
            ValidationError::Unrepresentable { .. } => "unrepresentable",
        }
    }
}

/// All violated rules of one profile, in check order. Never empty.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.0.iter().any(|e| e.code() == code)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, err) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}
