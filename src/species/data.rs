//! Species profiles with default demographic inputs
//!
//! The built-in profiles mirror the curated showcase species; classrooms can
//! add their own via the CSV loader or by entering raw inputs directly.

use serde::{Deserialize, Serialize};

use crate::scoring::MathInputs;

/// IUCN-style conservation status shown on species cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConservationStatus {
    Vulnerable,
    Endangered,
    CriticallyEndangered,
}

impl ConservationStatus {
    /// Display string matching the species cards
    pub fn as_str(&self) -> &'static str {
        match self {
            ConservationStatus::Vulnerable => "Vulnerable",
            ConservationStatus::Endangered => "Endangered",
            ConservationStatus::CriticallyEndangered => "Critically Endangered",
        }
    }

    /// Parse the display string (used by the CSV loader)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Vulnerable" => Some(ConservationStatus::Vulnerable),
            "Endangered" => Some(ConservationStatus::Endangered),
            "Critically Endangered" => Some(ConservationStatus::CriticallyEndangered),
            _ => None,
        }
    }
}

/// One species with its default demographic inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProfile {
    /// URL-safe identifier, e.g. "snow-leopard"
    pub slug: String,

    /// Common name
    pub name: String,

    /// Latin binomial
    pub scientific_name: String,

    /// Where the species lives
    pub region: String,

    /// Conservation status
    pub status: ConservationStatus,

    /// Estimated wild population
    pub population: f64,

    /// Fraction of the population that is female, in (0, 1]
    pub female_percentage: f64,

    /// Offspring per reproductive cycle
    pub births_per_cycle: f64,

    /// Years between reproductive cycles
    pub birth_cycle_years: f64,

    /// Expected lifespan in years
    pub lifespan: f64,

    /// Age of sexual maturity in years
    pub age_at_first_birth: f64,

    /// Signed annual decline rate, e.g. -0.06
    pub decline_rate: f64,
}

impl SpeciesProfile {
    /// Default calculation inputs for this species. The female count is the
    /// rounded share of the total population, as the wizard pre-fills it.
    pub fn math_inputs(&self) -> MathInputs {
        MathInputs {
            population: self.population,
            female_population: (self.population * self.female_percentage).round(),
            births_per_cycle: self.births_per_cycle,
            birth_cycle_years: self.birth_cycle_years,
            lifespan: self.lifespan,
            age_at_first_birth: self.age_at_first_birth,
            decline_rate: self.decline_rate,
        }
    }
}

/// The five curated showcase species.
pub fn builtin_species() -> Vec<SpeciesProfile> {
    vec![
        SpeciesProfile {
            slug: "snow-leopard".to_string(),
            name: "Snow Leopard".to_string(),
            scientific_name: "Panthera uncia".to_string(),
            region: "Himalaya & Central Asia".to_string(),
            status: ConservationStatus::Vulnerable,
            population: 4_000.0,
            female_percentage: 0.48,
            births_per_cycle: 2.0,
            birth_cycle_years: 2.0,
            lifespan: 18.0,
            age_at_first_birth: 4.0,
            decline_rate: -0.03,
        },
        SpeciesProfile {
            slug: "hawksbill-sea-turtle".to_string(),
            name: "Hawksbill Sea Turtle".to_string(),
            scientific_name: "Eretmochelys imbricata".to_string(),
            region: "Tropical reefs worldwide".to_string(),
            status: ConservationStatus::Endangered,
            population: 25_000.0,
            female_percentage: 0.55,
            births_per_cycle: 160.0,
            birth_cycle_years: 3.0,
            lifespan: 40.0,
            age_at_first_birth: 20.0,
            decline_rate: -0.08,
        },
        SpeciesProfile {
            slug: "mountain-gorilla".to_string(),
            name: "Mountain Gorilla".to_string(),
            scientific_name: "Gorilla beringei beringei".to_string(),
            region: "Central Africa".to_string(),
            status: ConservationStatus::Endangered,
            population: 1_063.0,
            female_percentage: 0.48,
            births_per_cycle: 1.0,
            birth_cycle_years: 4.0,
            lifespan: 40.0,
            age_at_first_birth: 10.0,
            decline_rate: -0.02,
        },
        SpeciesProfile {
            slug: "bengal-tiger".to_string(),
            name: "Bengal Tiger".to_string(),
            scientific_name: "Panthera tigris tigris".to_string(),
            region: "India & Southeast Asia".to_string(),
            status: ConservationStatus::Endangered,
            population: 2_500.0,
            female_percentage: 0.49,
            births_per_cycle: 3.0,
            birth_cycle_years: 2.5,
            lifespan: 15.0,
            age_at_first_birth: 4.0,
            decline_rate: -0.04,
        },
        SpeciesProfile {
            slug: "koala".to_string(),
            name: "Koala".to_string(),
            scientific_name: "Phascolarctos cinereus".to_string(),
            region: "Eastern Australia".to_string(),
            status: ConservationStatus::Vulnerable,
            population: 92_000.0,
            female_percentage: 0.52,
            births_per_cycle: 1.0,
            birth_cycle_years: 1.0,
            lifespan: 15.0,
            age_at_first_birth: 3.0,
            decline_rate: -0.06,
        },
    ]
}

/// Look up a built-in species by slug.
pub fn get_species_by_slug(slug: &str) -> Option<SpeciesProfile> {
    builtin_species().into_iter().find(|s| s.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles_are_valid_inputs() {
        for species in builtin_species() {
            let inputs = species.math_inputs();
            assert!(
                inputs.validate().is_ok(),
                "built-in profile `{}` fails validation",
                species.slug
            );
        }
    }

    #[test]
    fn test_koala_female_count_is_rounded_share() {
        let koala = get_species_by_slug("koala").unwrap();
        let inputs = koala.math_inputs();
        assert_eq!(inputs.female_population, 47_840.0);
    }

    #[test]
    fn test_slug_lookup() {
        assert!(get_species_by_slug("bengal-tiger").is_some());
        assert!(get_species_by_slug("dodo").is_none());
    }

    #[test]
    fn test_status_parse_round_trip() {
        for status in [
            ConservationStatus::Vulnerable,
            ConservationStatus::Endangered,
            ConservationStatus::CriticallyEndangered,
        ] {
            assert_eq!(ConservationStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ConservationStatus::parse("Extinct"), None);
    }
}
