//! Danger-score bands and risk categories
//!
//! The 0-1000 score is a five-band piecewise-linear map of the net annual
//! change rate (birth rate minus decline rate, as a fraction). Each band is
//! linear in the signed rate and clamped to its own sub-range, so the map is
//! continuous but kinked at band boundaries. The bands live in an ordered
//! table evaluated top-down; the first band whose lower bound is met wins.

use serde::{Deserialize, Serialize};

/// One band of the danger-score map.
///
/// The raw value is `intercept + slope * net_change_rate`, clamped to
/// `[clamp_min, clamp_max]`.
#[derive(Debug, Clone, Copy)]
pub struct DangerBand {
    /// Inclusive lower bound on the net change rate
    pub min_net_change: f64,

    pub intercept: f64,
    pub slope: f64,

    pub clamp_min: f64,
    pub clamp_max: f64,
}

impl DangerBand {
    fn evaluate(&self, net_change_rate: f64) -> f64 {
        let raw = self.intercept + self.slope * net_change_rate;
        raw.max(self.clamp_min).min(self.clamp_max)
    }
}

/// Ordered band table mapping net change rate to an unrounded danger score.
#[derive(Debug, Clone)]
pub struct DangerBandTable {
    /// Bands sorted by descending lower bound; last has bound -inf
    bands: Vec<DangerBand>,
}

impl DangerBandTable {
    /// Unrounded danger score in [0, 1000] for a net change rate.
    pub fn score(&self, net_change_rate: f64) -> f64 {
        for band in &self.bands {
            if net_change_rate >= band.min_net_change {
                return band.evaluate(net_change_rate);
            }
        }
        // Unreachable with the default table (last bound is -inf); treat a
        // malformed custom table as maximal danger.
        1000.0
    }

}

impl Default for DangerBandTable {
    fn default() -> Self {
        Self {
            bands: vec![
                // Strong recovery (net >= 5%): 0-100
                DangerBand {
                    min_net_change: 0.05,
                    intercept: 100.0,
                    slope: -1000.0,
                    clamp_min: 0.0,
                    clamp_max: 100.0,
                },
                // Slight recovery: 100-250
                DangerBand {
                    min_net_change: 0.0,
                    intercept: 250.0,
                    slope: -3000.0,
                    clamp_min: 100.0,
                    clamp_max: 250.0,
                },
                // Slight decline (down to -3%): 250-500
                DangerBand {
                    min_net_change: -0.03,
                    intercept: 250.0,
                    slope: -8000.0,
                    clamp_min: 250.0,
                    clamp_max: 500.0,
                },
                // Moderate decline (down to -8%): 500-750
                DangerBand {
                    min_net_change: -0.08,
                    intercept: 350.0,
                    slope: -5000.0,
                    clamp_min: 500.0,
                    clamp_max: 750.0,
                },
                // Severe decline: 750-1000
                DangerBand {
                    min_net_change: f64::NEG_INFINITY,
                    intercept: 550.0,
                    slope: -2500.0,
                    clamp_min: 750.0,
                    clamp_max: 1000.0,
                },
            ],
        }
    }
}

/// Risk category derived from which quartile of the 0-1000 scale a rounded
/// score lands in. Boundaries are lower-inclusive: 250 is already Unstable,
/// 750 already Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    /// [0, 250)
    Recovering,
    /// [250, 500)
    Unstable,
    /// [500, 750)
    HighRisk,
    /// [750, 1000]
    Critical,
}

impl RiskCategory {
    /// Categorize a rounded score.
    pub fn from_score(score: u32) -> Self {
        if score >= 750 {
            RiskCategory::Critical
        } else if score >= 500 {
            RiskCategory::HighRisk
        } else if score >= 250 {
            RiskCategory::Unstable
        } else {
            RiskCategory::Recovering
        }
    }

    /// Short tipping-point label shown on the dashboard.
    pub fn tipping_point_label(&self) -> &'static str {
        match self {
            RiskCategory::Critical => "Critical: racing toward extinction",
            RiskCategory::HighRisk => "High risk: needs rapid action",
            RiskCategory::Unstable => "Unstable: track closely",
            RiskCategory::Recovering => "Recovering: momentum turning positive",
        }
    }

    /// One-sentence verdict shown in the printable report.
    pub fn verdict(&self) -> &'static str {
        match self {
            RiskCategory::Critical => {
                "Mathematically heading to extinction without intervention."
            }
            RiskCategory::HighRisk => "Severe pressure — urgent protection needed.",
            RiskCategory::Unstable => {
                "Worrying trend but recoverable with coordinated action."
            }
            RiskCategory::Recovering => {
                "Showing signs of recovery — keep supporting their habitat."
            }
        }
    }
}
