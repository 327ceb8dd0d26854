//! EAI Engine - Population viability scoring for the Endangered Animal Tracker
//!
//! This library provides:
//! - The Endangered Animal Index (EAI): a deterministic 0-1000 risk score
//!   computed from demographic inputs
//! - A year-by-year population projector that finds the tipping-point year
//! - Curated species profiles with default inputs, plus a CSV loader
//! - A scenario runner coupling scoring and projection for batch runs

pub mod error;
pub mod projection;
pub mod scenario;
pub mod scoring;
pub mod species;

// Re-export commonly used types
pub use error::{LoadError, ValidationError};
pub use projection::{PopulationProjector, ProjectionConfig, ProjectionResult};
pub use scenario::{Assessment, ScenarioRunner};
pub use scoring::{calculate_eai, EaiResult, MathInputs};
pub use species::SpeciesProfile;
