//! Offspring survival discount by litter size
//!
//! Species with huge clutches (sea turtles laying 100+ eggs) lose almost
//! all offspring before adulthood; species with single births (great apes)
//! raise most of theirs. The discount is a step function of litter size,
//! stored as an ordered tier table so the boundaries are testable as data.

/// One tier of the survival schedule: litter sizes at or above
/// `min_births_per_cycle` survive at `survival_rate`.
#[derive(Debug, Clone, Copy)]
pub struct SurvivalTier {
    /// Inclusive lower bound on births per cycle
    pub min_births_per_cycle: f64,

    /// Fraction of offspring expected to reach adulthood
    pub survival_rate: f64,
}

/// Ordered survival schedule, evaluated largest tier first.
#[derive(Debug, Clone)]
pub struct SurvivalSchedule {
    /// Tiers sorted by descending `min_births_per_cycle`
    tiers: Vec<SurvivalTier>,

    /// Rate applied when no tier matches (single-birth species)
    base_rate: f64,
}

impl SurvivalSchedule {
    /// Create the schedule with custom tiers. Tiers must be sorted by
    /// descending lower bound; the first matching tier wins.
    pub fn new(tiers: Vec<SurvivalTier>, base_rate: f64) -> Self {
        Self { tiers, base_rate }
    }

    /// Survival rate for a given litter size.
    pub fn get_rate(&self, births_per_cycle: f64) -> f64 {
        for tier in &self.tiers {
            if births_per_cycle >= tier.min_births_per_cycle {
                return tier.survival_rate;
            }
        }
        self.base_rate
    }
}

impl Default for SurvivalSchedule {
    fn default() -> Self {
        Self {
            tiers: vec![
                // Sea turtles, fish
                SurvivalTier { min_births_per_cycle: 100.0, survival_rate: 0.001 },
                // Frogs, some reptiles
                SurvivalTier { min_births_per_cycle: 20.0, survival_rate: 0.01 },
                // Small mammals, birds
                SurvivalTier { min_births_per_cycle: 5.0, survival_rate: 0.1 },
                // Medium mammals
                SurvivalTier { min_births_per_cycle: 2.0, survival_rate: 0.3 },
            ],
            // Large mammals, apes: few babies but most survive
            base_rate: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_values() {
        let schedule = SurvivalSchedule::default();

        assert_eq!(schedule.get_rate(160.0), 0.001);
        assert_eq!(schedule.get_rate(40.0), 0.01);
        assert_eq!(schedule.get_rate(6.0), 0.1);
        assert_eq!(schedule.get_rate(3.0), 0.3);
        assert_eq!(schedule.get_rate(1.0), 0.6);
    }

    #[test]
    fn test_tier_boundaries_inclusive() {
        let schedule = SurvivalSchedule::default();

        // Each boundary belongs to the larger-litter tier
        assert_eq!(schedule.get_rate(100.0), 0.001);
        assert_eq!(schedule.get_rate(20.0), 0.01);
        assert_eq!(schedule.get_rate(5.0), 0.1);
        assert_eq!(schedule.get_rate(2.0), 0.3);

        // Just below each boundary falls through
        assert_eq!(schedule.get_rate(99.9), 0.01);
        assert_eq!(schedule.get_rate(19.9), 0.1);
        assert_eq!(schedule.get_rate(4.9), 0.3);
        assert_eq!(schedule.get_rate(1.9), 0.6);
    }
}
