//! Demographic input structure matching the data-entry wizard's fields

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Demographic inputs for one EAI calculation.
///
/// Constructed fresh per calculation; the scoring function never mutates it.
/// Field semantics follow the data-entry wizard: counts are whole animals,
/// durations are years, and `decline_rate` is a signed annual fraction
/// (conventionally negative, e.g. `-0.06` for a 6% annual loss).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathInputs {
    /// Total individuals in the wild
    pub population: f64,

    /// Breeding-age-eligible females
    pub female_population: f64,

    /// Offspring produced per reproductive cycle
    pub births_per_cycle: f64,

    /// Years between reproductive cycles
    pub birth_cycle_years: f64,

    /// Expected years of life
    pub lifespan: f64,

    /// Age of sexual maturity in years
    pub age_at_first_birth: f64,

    /// Signed annual population change from non-reproductive causes.
    /// Only the magnitude enters the score; the sign is informational.
    pub decline_rate: f64,
}

impl MathInputs {
    /// Check the same bounds the upstream form enforces.
    ///
    /// [`crate::scoring::calculate_eai`] is total and performs no checks of
    /// its own, so callers accepting untrusted input should validate first;
    /// degenerate values (zero lifespan, zero cycle length) otherwise
    /// propagate as `NaN`/infinity through the arithmetic.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("population", self.population),
            ("female_population", self.female_population),
            ("births_per_cycle", self.births_per_cycle),
            ("birth_cycle_years", self.birth_cycle_years),
            ("lifespan", self.lifespan),
            ("age_at_first_birth", self.age_at_first_birth),
            ("decline_rate", self.decline_rate),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite(name));
            }
        }

        if self.population < 1.0 {
            return Err(ValidationError::PopulationTooSmall(self.population));
        }
        if self.female_population < 1.0 {
            return Err(ValidationError::FemalePopulationTooSmall(
                self.female_population,
            ));
        }
        if self.female_population > self.population {
            return Err(ValidationError::FemalePopulationExceedsTotal {
                female: self.female_population,
                total: self.population,
            });
        }
        if self.births_per_cycle <= 0.0 {
            return Err(ValidationError::BirthsPerCycleNotPositive(
                self.births_per_cycle,
            ));
        }
        if self.birth_cycle_years <= 0.0 {
            return Err(ValidationError::BirthCycleNotPositive(
                self.birth_cycle_years,
            ));
        }
        if self.lifespan < 1.0 {
            return Err(ValidationError::LifespanTooShort(self.lifespan));
        }
        if self.age_at_first_birth < 0.0 {
            return Err(ValidationError::AgeAtFirstBirthNegative(
                self.age_at_first_birth,
            ));
        }
        if self.age_at_first_birth >= self.lifespan {
            return Err(ValidationError::AgeAtFirstBirthExceedsLifespan {
                age: self.age_at_first_birth,
                lifespan: self.lifespan,
            });
        }
        if self.decline_rate.abs() > 1.0 {
            return Err(ValidationError::DeclineRateOutOfRange(self.decline_rate));
        }

        Ok(())
    }

    /// Years a female spends reproductively active, floored at 1.
    pub fn reproductive_years(&self) -> f64 {
        (self.lifespan - self.age_at_first_birth).max(1.0)
    }
}
