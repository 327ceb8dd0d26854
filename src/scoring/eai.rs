//! Endangered Animal Index calculation
//!
//! Converts demographic inputs into a 0-1000 risk score by asking one
//! question: can reproduction outpace the current decline rate? The full
//! pipeline is: reproductive window -> fecundity -> breeding-female fraction
//! -> survival-discounted annual birth rate -> net change rate -> banded
//! danger score -> quartile labels.

use serde::{Deserialize, Serialize};

use super::bands::{DangerBandTable, RiskCategory};
use super::inputs::MathInputs;
use super::survival::SurvivalSchedule;

/// Computed EAI output. A pure function of [`MathInputs`]: identical inputs
/// always produce field-for-field identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EaiResult {
    /// Integer risk score in [0, 1000]; higher = more endangered
    pub score: u32,

    /// Quartile the score falls in
    pub category: RiskCategory,

    /// One-sentence interpretation of the score
    pub verdict: String,

    /// Offspring one female produces over her reproductive years, 1 decimal
    pub lifetime_babies_per_female: f64,

    /// Short label tied to the score quartile
    pub tipping_point_label: String,

    /// Percentage of total population added per year via reproduction,
    /// 0-100 scale, 2 decimals
    pub annual_birth_rate: f64,

    /// Magnitude of the annual decline rate, 0-100 scale, 2 decimals
    pub annual_decline_rate: f64,

    /// Whether births outpace losses, judged on the unrounded rates
    pub can_recover: bool,
}

/// EAI calculator holding the survival schedule and danger-band table.
///
/// The default tables are the calibrated production values; tests swap in
/// custom tables to exercise the arithmetic independently of the constants.
#[derive(Debug, Clone, Default)]
pub struct EaiCalculator {
    survival: SurvivalSchedule,
    bands: DangerBandTable,
}

impl EaiCalculator {
    pub fn new(survival: SurvivalSchedule, bands: DangerBandTable) -> Self {
        Self { survival, bands }
    }

    /// Compute the EAI for one set of inputs.
    ///
    /// Total: performs no validation and never fails. Degenerate inputs
    /// (zero lifespan, zero cycle length, zero population) propagate as
    /// `NaN`/infinity; run [`MathInputs::validate`] first to exclude them.
    pub fn calculate(&self, inputs: &MathInputs) -> EaiResult {
        // Reproductive capacity
        let reproductive_years = inputs.reproductive_years();
        let lifetime_babies_per_female =
            inputs.births_per_cycle * reproductive_years / inputs.birth_cycle_years;
        let annual_babies_per_female = inputs.births_per_cycle / inputs.birth_cycle_years;

        // Fraction of the whole population that is a breeding-capable female
        // at any instant, assuming breeding years are spread uniformly over
        // the lifespan.
        let reproductive_fraction = reproductive_years / inputs.lifespan;
        let breeding_female_fraction =
            (inputs.female_population / inputs.population) * reproductive_fraction;

        // Most offspring never reach adulthood; discount by litter size.
        let survival_rate = self.survival.get_rate(inputs.births_per_cycle);
        let annual_birth_rate =
            breeding_female_fraction * annual_babies_per_female * survival_rate;

        let annual_decline_rate = inputs.decline_rate.abs();
        let net_change_rate = annual_birth_rate - annual_decline_rate;
        let can_recover = net_change_rate > 0.0;

        let score = self.bands.score(net_change_rate).round() as u32;
        let category = RiskCategory::from_score(score);

        EaiResult {
            score,
            category,
            verdict: category.verdict().to_string(),
            lifetime_babies_per_female: round_to(lifetime_babies_per_female, 1),
            tipping_point_label: category.tipping_point_label().to_string(),
            annual_birth_rate: round_to(annual_birth_rate * 100.0, 2),
            annual_decline_rate: round_to(annual_decline_rate * 100.0, 2),
            can_recover,
        }
    }
}

/// Compute the EAI with the default survival schedule and band table.
pub fn calculate_eai(inputs: &MathInputs) -> EaiResult {
    EaiCalculator::default().calculate(inputs)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn koala() -> MathInputs {
        MathInputs {
            population: 92_000.0,
            female_population: 47_840.0,
            births_per_cycle: 1.0,
            birth_cycle_years: 1.0,
            lifespan: 15.0,
            age_at_first_birth: 3.0,
            decline_rate: -0.06,
        }
    }

    #[test]
    fn test_koala_scenario() {
        let result = calculate_eai(&koala());

        // reproductive_years = 12, one baby per year, 60% survival,
        // breeding females = 0.52 * (12/15) = 0.416
        // annual birth rate = 0.416 * 0.6 = 0.2496 -> 24.96%
        // net = 0.2496 - 0.06 = 0.1896 -> strong-recovery band, clamped to 0
        assert_eq!(result.score, 0);
        assert_eq!(result.category, RiskCategory::Recovering);
        assert!(result.can_recover);
        assert_relative_eq!(result.lifetime_babies_per_female, 12.0);
        assert_relative_eq!(result.annual_birth_rate, 24.96);
        assert_relative_eq!(result.annual_decline_rate, 6.0);
    }

    #[test]
    fn test_turtle_litter_discount_dominates() {
        // Hawksbill-like: 160 eggs per clutch drops survival to 0.1%,
        // so the huge litter size cannot rescue the birth rate.
        let inputs = MathInputs {
            population: 25_000.0,
            female_population: 13_750.0,
            births_per_cycle: 160.0,
            birth_cycle_years: 3.0,
            lifespan: 40.0,
            age_at_first_birth: 20.0,
            decline_rate: -0.08,
        };
        let result = calculate_eai(&inputs);

        // birth rate = 0.55 * (20/40) * (160/3) * 0.001 = 1.4667% -> under
        // the 8% decline, deep in the moderate-decline band
        assert!(!result.can_recover);
        assert_relative_eq!(result.annual_birth_rate, 1.47);
        assert!(result.score >= 500);
        assert_eq!(result.category, RiskCategory::HighRisk);
    }

    #[test]
    fn test_deterministic() {
        let a = calculate_eai(&koala());
        let b = calculate_eai(&koala());
        assert_eq!(a, b);
    }

    #[test]
    fn test_stationary_population_scores_250() {
        // Births exactly cancel losses: net = 0, second band gives 250,
        // which is already the Unstable quartile.
        let inputs = MathInputs {
            population: 1000.0,
            female_population: 500.0,
            births_per_cycle: 1.0,
            birth_cycle_years: 1.0,
            lifespan: 10.0,
            age_at_first_birth: 2.0,
            decline_rate: -0.24,
        };
        let result = calculate_eai(&inputs);

        assert_eq!(result.score, 250);
        assert_eq!(result.category, RiskCategory::Unstable);
        assert!(!result.can_recover);
    }

    #[test]
    fn test_can_recover_uses_unrounded_rates() {
        // Birth rate 24% vs decline 23.9999%: both round to 24.00 in the
        // output, but the unrounded comparison still says recoverable.
        let inputs = MathInputs {
            population: 1000.0,
            female_population: 500.0,
            births_per_cycle: 1.0,
            birth_cycle_years: 1.0,
            lifespan: 10.0,
            age_at_first_birth: 2.0,
            decline_rate: -0.239999,
        };
        let result = calculate_eai(&inputs);

        assert!(result.can_recover);
        assert_relative_eq!(result.annual_birth_rate, 24.0);
        assert_relative_eq!(result.annual_decline_rate, 24.0);
    }

    #[test]
    fn test_score_monotone_in_decline_magnitude() {
        let mut prev = 0;
        for step in 0..=60 {
            let mut inputs = koala();
            inputs.decline_rate = -(step as f64) * 0.01;
            let score = calculate_eai(&inputs).score;
            assert!(
                score >= prev,
                "score fell from {prev} to {score} at decline {}",
                inputs.decline_rate
            );
            prev = score;
        }
    }

    #[test]
    fn test_score_bounds_over_input_sweep() {
        for population in [10.0, 1_000.0, 100_000.0] {
            for births in [1.0, 3.0, 8.0, 40.0, 200.0] {
                for decline in [0.0, -0.02, -0.07, -0.3, -0.9] {
                    let inputs = MathInputs {
                        population,
                        female_population: population / 2.0,
                        births_per_cycle: births,
                        birth_cycle_years: 2.0,
                        lifespan: 20.0,
                        age_at_first_birth: 4.0,
                        decline_rate: decline,
                    };
                    let result = calculate_eai(&inputs);
                    assert!(result.score <= 1000);
                }
            }
        }
    }

    #[test]
    fn test_birth_rate_monotone_in_litter_size_within_tier() {
        // Within one survival tier (here [5, 20)), more births per cycle
        // never lowers the birth rate.
        let mut prev = 0.0;
        for births in [5.0, 8.0, 12.0, 19.0] {
            let mut inputs = koala();
            inputs.births_per_cycle = births;
            let rate = calculate_eai(&inputs).annual_birth_rate;
            assert!(rate >= prev);
            prev = rate;
        }
    }
}
