//! EAI scoring: demographic inputs, survival discount, score bands

mod bands;
mod eai;
mod inputs;
mod survival;

pub use bands::{DangerBand, DangerBandTable, RiskCategory};
pub use eai::{calculate_eai, EaiCalculator, EaiResult};
pub use inputs::MathInputs;
pub use survival::{SurvivalSchedule, SurvivalTier};
