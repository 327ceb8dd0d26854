//! Score every species profile and rank them by risk
//!
//! Outputs a CSV summary (one row per species) for side-by-side comparison

use anyhow::{Context, Result};
use eai_engine::projection::ProjectionConfig;
use eai_engine::species::{load_default_species, SpeciesProfile};
use eai_engine::{Assessment, ScenarioRunner};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();
    println!("Loading species profiles...");

    let species = load_default_species().context("failed to load species profiles")?;
    println!("Loaded {} species in {:?}", species.len(), start.elapsed());

    let runner = ScenarioRunner::new(ProjectionConfig::default());

    // Assess in parallel, then rank by score (most endangered first)
    let mut assessed: Vec<(SpeciesProfile, Assessment)> = species
        .par_iter()
        .map(|s| (s.clone(), runner.run_species(s)))
        .collect();
    assessed.sort_by(|a, b| b.1.eai.score.cmp(&a.1.eai.score));

    let output_path = "species_comparison.csv";
    let mut file = File::create(output_path).context("failed to create output file")?;

    writeln!(
        file,
        "Rank,Slug,Name,Status,Population,Score,Category,BirthRatePct,DeclineRatePct,NetChangePct,CanRecover,ExtinctionYear"
    )?;

    for (rank, (species, assessment)) in assessed.iter().enumerate() {
        let eai = &assessment.eai;
        writeln!(
            file,
            "{},{},{},{},{:.0},{},{:?},{:.2},{:.2},{:.2},{},{}",
            rank + 1,
            species.slug,
            species.name,
            species.status.as_str(),
            species.population,
            eai.score,
            eai.category,
            eai.annual_birth_rate,
            eai.annual_decline_rate,
            assessment.net_change_rate_percent(),
            eai.can_recover,
            assessment
                .projection
                .extinction_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
        )?;
    }

    println!("Output written to {output_path}");

    println!("\nRanking (most endangered first):");
    println!(
        "{:>4} {:>24} {:>6} {:>10} {:>12}",
        "Rank", "Species", "Score", "Recover?", "Extinction"
    );
    println!("{}", "-".repeat(62));
    for (rank, (species, assessment)) in assessed.iter().enumerate() {
        println!(
            "{:>4} {:>24} {:>6} {:>10} {:>12}",
            rank + 1,
            species.name,
            assessment.eai.score,
            if assessment.eai.can_recover { "yes" } else { "no" },
            assessment
                .projection
                .extinction_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
