//! Population projector: geometric growth/decay iterated year by year
//!
//! Feeds the dashboard's tipping-point chart. The loop emits a clamped,
//! rounded population for display each year but keeps iterating on the raw
//! running value; the extinction and termination checks look at the raw
//! value too, so clamping never shifts the detected extinction year.

use chrono::{Datelike, Utc};

use super::series::{ProjectionResult, YearPoint};

/// Populations at or below this count are treated as functionally extinct.
/// A domain convention, not user-configurable.
pub const FUNCTIONAL_EXTINCTION_THRESHOLD: f64 = 100.0;

/// Default projection horizon in years.
pub const DEFAULT_MAX_YEARS: u32 = 100;

/// Configuration for a projection run
#[derive(Debug, Clone, Copy)]
pub struct ProjectionConfig {
    /// First calendar year of the series
    pub start_year: i32,

    /// Number of years to project beyond the start year
    pub max_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            start_year: Utc::now().year(),
            max_years: DEFAULT_MAX_YEARS,
        }
    }
}

/// Year-by-year population projector
#[derive(Debug, Clone, Default)]
pub struct PopulationProjector {
    config: ProjectionConfig,
}

impl PopulationProjector {
    /// Create a projector with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project a starting population forward under a constant net change
    /// rate (percentage form, i.e. `annual_birth_rate - annual_decline_rate`
    /// as returned by the scorer).
    ///
    /// Always terminates: the series holds at most `max_years + 1` points,
    /// fewer if the population is wiped out early.
    pub fn project(&self, start_population: f64, net_change_rate_percent: f64) -> ProjectionResult {
        let net_change_rate = net_change_rate_percent / 100.0;
        let mut result = ProjectionResult::new();
        let mut population = start_population;

        for offset in 0..=self.config.max_years {
            let year = self.config.start_year + offset as i32;
            result.add_point(YearPoint {
                year,
                population: population.max(0.0).round(),
            });

            if result.extinction_year.is_none()
                && population <= FUNCTIONAL_EXTINCTION_THRESHOLD
            {
                result.extinction_year = Some(year);
            }

            // Raw value, not the displayed clamp
            if population <= 0.0 {
                break;
            }

            population *= 1.0 + net_change_rate;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector(max_years: u32) -> PopulationProjector {
        PopulationProjector::new(ProjectionConfig {
            start_year: 2026,
            max_years,
        })
    }

    #[test]
    fn test_series_length_bounded() {
        let result = projector(100).project(50_000.0, -2.0);
        assert_eq!(result.series.len(), 101);
        assert_eq!(result.series[0].year, 2026);
        assert_eq!(result.series[100].year, 2126);
    }

    #[test]
    fn test_declining_population_flags_extinction() {
        let result = projector(100).project(10_000.0, -8.0);

        let year = result.extinction_year.expect("decline must hit threshold");
        let at_threshold = result
            .series
            .iter()
            .find(|p| p.year == year)
            .expect("extinction year must be in the series");
        assert!(at_threshold.population <= FUNCTIONAL_EXTINCTION_THRESHOLD);

        // The year before was still above the threshold
        let before = result.series.iter().find(|p| p.year == year - 1).unwrap();
        assert!(before.population > FUNCTIONAL_EXTINCTION_THRESHOLD);
    }

    #[test]
    fn test_tiny_population_flagged_immediately() {
        let result = projector(100).project(50.0, -5.0);
        assert_eq!(result.extinction_year, Some(2026));
    }

    #[test]
    fn test_population_exactly_at_threshold_flagged() {
        let result = projector(100).project(100.0, 3.0);
        // Threshold check runs before growth is applied
        assert_eq!(result.extinction_year, Some(2026));
    }

    #[test]
    fn test_growing_population_never_extinct() {
        let result = projector(100).project(5_000.0, 4.0);
        assert_eq!(result.extinction_year, None);
        assert!(result.series.last().unwrap().population > 5_000.0);
    }

    #[test]
    fn test_growth_compounds_geometrically() {
        let result = projector(3).project(1_000.0, 10.0);
        let populations: Vec<f64> = result.series.iter().map(|p| p.population).collect();
        assert_eq!(populations, vec![1_000.0, 1_100.0, 1_210.0, 1_331.0]);
    }

    #[test]
    fn test_clamps_display_but_breaks_on_raw_value() {
        // A -150% rate sends the raw population negative in one step: the
        // point is displayed as 0, flagged extinct, and the loop stops.
        let result = projector(100).project(1_000.0, -150.0);

        assert_eq!(result.series.len(), 2);
        assert_eq!(result.series[1].population, 0.0);
        assert_eq!(result.extinction_year, Some(2027));
    }

    #[test]
    fn test_zero_rate_holds_steady() {
        let result = projector(10).project(400.0, 0.0);
        assert!(result.series.iter().all(|p| p.population == 400.0));
        assert_eq!(result.extinction_year, None);
    }
}
