//! Load species profiles from data/species.csv

use std::fs::File;
use std::path::Path;

use csv::Reader;
use log::info;

use super::data::{ConservationStatus, SpeciesProfile};
use crate::error::LoadError;

/// Default path to the bundled species file
pub const DEFAULT_SPECIES_PATH: &str = "data/species.csv";

/// Raw CSV row matching species.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    slug: String,
    name: String,
    scientific_name: String,
    region: String,
    status: String,
    population: f64,
    female_percentage: f64,
    births_per_cycle: f64,
    birth_cycle_years: f64,
    lifespan: f64,
    age_at_first_birth: f64,
    decline_rate: f64,
}

impl CsvRow {
    fn to_profile(self, row: usize) -> Result<SpeciesProfile, LoadError> {
        let status =
            ConservationStatus::parse(&self.status).ok_or_else(|| LoadError::InvalidField {
                row,
                column: "status",
                value: self.status.clone(),
            })?;

        Ok(SpeciesProfile {
            slug: self.slug,
            name: self.name,
            scientific_name: self.scientific_name,
            region: self.region,
            status,
            population: self.population,
            female_percentage: self.female_percentage,
            births_per_cycle: self.births_per_cycle,
            birth_cycle_years: self.birth_cycle_years,
            lifespan: self.lifespan,
            age_at_first_birth: self.age_at_first_birth,
            decline_rate: self.decline_rate,
        })
    }
}

/// Load all species profiles from a CSV file
pub fn load_species<P: AsRef<Path>>(path: P) -> Result<Vec<SpeciesProfile>, LoadError> {
    let file = File::open(path.as_ref())?;
    let mut reader = Reader::from_reader(file);
    let mut species = Vec::new();

    for (row, result) in reader.deserialize().enumerate() {
        let record: CsvRow = result?;
        species.push(record.to_profile(row + 1)?);
    }

    info!(
        "loaded {} species profiles from {}",
        species.len(),
        path.as_ref().display()
    );
    Ok(species)
}

/// Load species from any reader (e.g., string buffer)
pub fn load_species_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<SpeciesProfile>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut species = Vec::new();

    for (row, result) in csv_reader.deserialize().enumerate() {
        let record: CsvRow = result?;
        species.push(record.to_profile(row + 1)?);
    }

    Ok(species)
}

/// Load species from the bundled data/species.csv
pub fn load_default_species() -> Result<Vec<SpeciesProfile>, LoadError> {
    load_species(DEFAULT_SPECIES_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::builtin_species;

    const SAMPLE: &str = "\
slug,name,scientific_name,region,status,population,female_percentage,births_per_cycle,birth_cycle_years,lifespan,age_at_first_birth,decline_rate
koala,Koala,Phascolarctos cinereus,Eastern Australia,Vulnerable,92000,0.52,1,1,15,3,-0.06
";

    #[test]
    fn test_load_from_reader() {
        let species = load_species_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(species.len(), 1);
        assert_eq!(species[0], builtin_species().into_iter().last().unwrap());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let bad = SAMPLE.replace("Vulnerable", "Extinct");
        let err = load_species_from_reader(bad.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidField { column: "status", .. }
        ));
    }

    #[test]
    fn test_bundled_file_matches_builtins() {
        let species = load_default_species().expect("failed to load data/species.csv");
        assert_eq!(species, builtin_species());
    }
}
