//! Projection output structures

use serde::{Deserialize, Serialize};

/// One point of the year-by-year population series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    /// Calendar year
    pub year: i32,

    /// Projected population, clamped to zero and rounded for display
    pub population: f64,
}

/// Complete projection result: the display series plus the first year the
/// population crossed the functional-extinction threshold, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Year-by-year series, starting at the configured start year
    pub series: Vec<YearPoint>,

    /// First year the (unclamped) population was at or below the
    /// functional-extinction threshold
    pub extinction_year: Option<i32>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            extinction_year: None,
        }
    }

    /// Append a series point.
    pub fn add_point(&mut self, point: YearPoint) {
        self.series.push(point);
    }

    /// Summary statistics for reports.
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            years_projected: self.series.len().saturating_sub(1) as u32,
            start_population: self.series.first().map(|p| p.population).unwrap_or(0.0),
            final_population: self.series.last().map(|p| p.population).unwrap_or(0.0),
            extinction_year: self.extinction_year,
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years_projected: u32,
    pub start_population: f64,
    pub final_population: f64,
    pub extinction_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_short_series() {
        let mut result = ProjectionResult::new();
        result.add_point(YearPoint { year: 2026, population: 500.0 });
        result.add_point(YearPoint { year: 2027, population: 450.0 });
        result.add_point(YearPoint { year: 2028, population: 405.0 });

        let summary = result.summary();
        assert_eq!(summary.years_projected, 2);
        assert_eq!(summary.start_population, 500.0);
        assert_eq!(summary.final_population, 405.0);
        assert_eq!(summary.extinction_year, None);
    }

    #[test]
    fn test_summary_of_empty_series() {
        let summary = ProjectionResult::new().summary();
        assert_eq!(summary.years_projected, 0);
        assert_eq!(summary.start_population, 0.0);
    }
}
