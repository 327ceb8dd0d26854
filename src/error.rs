//! Error types for input validation and species data loading

use thiserror::Error;

/// Validation failures for demographic inputs.
///
/// The scoring and projection functions themselves are total and never
/// return errors; callers that accept untrusted input run
/// [`crate::scoring::MathInputs::validate`] first and surface one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Total population must be at least 1
    #[error("population must be at least 1 (got {0})")]
    PopulationTooSmall(f64),

    /// Female population must be at least 1
    #[error("female population must be at least 1 (got {0})")]
    FemalePopulationTooSmall(f64),

    /// Female population cannot exceed total population
    #[error("female population {female} exceeds total population {total}")]
    FemalePopulationExceedsTotal { female: f64, total: f64 },

    /// Births per cycle must be positive
    #[error("births per cycle must be positive (got {0})")]
    BirthsPerCycleNotPositive(f64),

    /// Birth cycle length must be positive
    #[error("birth cycle length must be positive (got {0} years)")]
    BirthCycleNotPositive(f64),

    /// Lifespan must be at least 1 year
    #[error("lifespan must be at least 1 year (got {0})")]
    LifespanTooShort(f64),

    /// Age at first birth must be non-negative
    #[error("age at first birth must be 0 or more (got {0})")]
    AgeAtFirstBirthNegative(f64),

    /// Age at first birth must come before end of life
    #[error("age at first birth {age} must be less than lifespan {lifespan}")]
    AgeAtFirstBirthExceedsLifespan { age: f64, lifespan: f64 },

    /// Decline rate is a signed annual fraction, at most 100% in magnitude
    #[error("decline rate magnitude must be at most 1.0 (got {0})")]
    DeclineRateOutOfRange(f64),

    /// Any input being NaN poisons the whole calculation
    #[error("input field `{0}` is not a finite number")]
    NotFinite(&'static str),
}

/// Failures while loading species profiles from CSV.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O failure opening the data file
    #[error("failed to open species file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV structure
    #[error("failed to parse species CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A field failed to parse into its expected type
    #[error("invalid value in species CSV row {row}, column `{column}`: {value}")]
    InvalidField {
        row: usize,
        column: &'static str,
        value: String,
    },
}
