//! Scenario runner coupling the scorer to the projector
//!
//! The dashboard always wants both halves: the EAI score and the
//! year-by-year series driven by the score's net change rate. The runner
//! builds the calculator and projection config once, then serves any number
//! of runs.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::projection::{PopulationProjector, ProjectionConfig, ProjectionResult};
use crate::scoring::{EaiCalculator, EaiResult, MathInputs};
use crate::species::SpeciesProfile;

/// One complete assessment: score plus projected population series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub eai: EaiResult,
    pub projection: ProjectionResult,
}

impl Assessment {
    /// Net change rate handed to the projector, in percentage form.
    pub fn net_change_rate_percent(&self) -> f64 {
        self.eai.annual_birth_rate - self.eai.annual_decline_rate
    }
}

/// Pre-built runner for single or batch assessments.
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionConfig::default());
/// let assessment = runner.run(&species.math_inputs());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    calculator: EaiCalculator,
    projection_config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create a runner with the default calculator tables.
    pub fn new(projection_config: ProjectionConfig) -> Self {
        Self {
            calculator: EaiCalculator::default(),
            projection_config,
        }
    }

    /// Create a runner with a custom calculator (e.g. test tables).
    pub fn with_calculator(calculator: EaiCalculator, projection_config: ProjectionConfig) -> Self {
        Self {
            calculator,
            projection_config,
        }
    }

    /// Score one set of inputs and project the population forward.
    pub fn run(&self, inputs: &MathInputs) -> Assessment {
        let eai = self.calculator.calculate(inputs);
        let net_percent = eai.annual_birth_rate - eai.annual_decline_rate;

        debug!(
            "score={} net_change={:.2}% population={}",
            eai.score, net_percent, inputs.population
        );

        let projector = PopulationProjector::new(self.projection_config);
        let projection = projector.project(inputs.population, net_percent);

        Assessment { eai, projection }
    }

    /// Assess a species profile using its default inputs.
    pub fn run_species(&self, species: &SpeciesProfile) -> Assessment {
        self.run(&species.math_inputs())
    }

    /// Assess a batch of species; results align with the input order.
    pub fn run_batch(&self, species: &[SpeciesProfile]) -> Vec<Assessment> {
        species.iter().map(|s| self.run_species(s)).collect()
    }

    /// Run the same inputs under several projection configs (e.g. different
    /// horizons or start years).
    pub fn run_scenarios(
        &self,
        inputs: &MathInputs,
        configs: &[ProjectionConfig],
    ) -> Vec<ProjectionResult> {
        let eai = self.calculator.calculate(inputs);
        let net_percent = eai.annual_birth_rate - eai.annual_decline_rate;

        configs
            .iter()
            .map(|config| {
                PopulationProjector::new(*config).project(inputs.population, net_percent)
            })
            .collect()
    }

    pub fn projection_config(&self) -> &ProjectionConfig {
        &self.projection_config
    }

    pub fn projection_config_mut(&mut self) -> &mut ProjectionConfig {
        &mut self.projection_config
    }
}
