//! Year-by-year population projection

mod engine;
mod series;

pub use engine::{
    PopulationProjector, ProjectionConfig, DEFAULT_MAX_YEARS, FUNCTIONAL_EXTINCTION_THRESHOLD,
};
pub use series::{ProjectionResult, ProjectionSummary, YearPoint};
