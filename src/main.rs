//! EAI Engine CLI
//!
//! Scores a species (preset or raw inputs) and prints the dashboard
//! numbers plus the projected population series

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::Write;

use eai_engine::projection::ProjectionConfig;
use eai_engine::scoring::MathInputs;
use eai_engine::species::get_species_by_slug;
use eai_engine::{Assessment, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(name = "eai_engine", about = "Endangered Animal Index calculator")]
struct Args {
    /// Built-in species slug (e.g. koala, bengal-tiger, snow-leopard)
    #[arg(long, conflicts_with = "population")]
    species: Option<String>,

    /// Total wild population
    #[arg(long, requires = "female_population")]
    population: Option<f64>,

    /// Breeding-age-eligible females
    #[arg(long)]
    female_population: Option<f64>,

    /// Offspring per reproductive cycle
    #[arg(long, default_value_t = 1.0)]
    births_per_cycle: f64,

    /// Years between reproductive cycles
    #[arg(long, default_value_t = 1.0)]
    birth_cycle_years: f64,

    /// Expected lifespan in years
    #[arg(long, default_value_t = 15.0)]
    lifespan: f64,

    /// Age of sexual maturity in years
    #[arg(long, default_value_t = 3.0)]
    age_at_first_birth: f64,

    /// Signed annual decline rate, e.g. -0.06 for a 6% annual loss
    #[arg(long, default_value_t = -0.06, allow_hyphen_values = true)]
    decline_rate: f64,

    /// First calendar year of the projection (defaults to the current year)
    #[arg(long)]
    start_year: Option<i32>,

    /// Projection horizon in years
    #[arg(long, default_value_t = 100)]
    years: u32,

    /// Print the full assessment as JSON instead of the table view
    #[arg(long)]
    json: bool,

    /// Write the year-by-year series to a CSV file
    #[arg(long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (label, inputs) = resolve_inputs(&args)?;
    inputs
        .validate()
        .with_context(|| format!("invalid inputs for {label}"))?;

    let mut config = ProjectionConfig::default();
    if let Some(start_year) = args.start_year {
        config.start_year = start_year;
    }
    config.max_years = args.years;

    let runner = ScenarioRunner::new(config);
    let assessment = runner.run(&inputs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print_dashboard(&label, &inputs, &assessment);
    }

    if let Some(path) = &args.output {
        write_series_csv(path, &assessment)?;
        println!("\nProjection series written to: {path}");
    }

    Ok(())
}

fn resolve_inputs(args: &Args) -> Result<(String, MathInputs)> {
    if let Some(slug) = &args.species {
        let species = get_species_by_slug(slug)
            .ok_or_else(|| anyhow!("unknown species slug: {slug}"))?;
        return Ok((species.name.clone(), species.math_inputs()));
    }

    let population = args
        .population
        .ok_or_else(|| anyhow!("supply either --species or --population"))?;
    let female_population = args
        .female_population
        .ok_or_else(|| anyhow!("--female-population is required with --population"))?;

    Ok((
        "custom animal".to_string(),
        MathInputs {
            population,
            female_population,
            births_per_cycle: args.births_per_cycle,
            birth_cycle_years: args.birth_cycle_years,
            lifespan: args.lifespan,
            age_at_first_birth: args.age_at_first_birth,
            decline_rate: args.decline_rate,
        },
    ))
}

fn print_dashboard(label: &str, inputs: &MathInputs, assessment: &Assessment) {
    let eai = &assessment.eai;

    println!("EAI Engine v0.1.0");
    println!("=================\n");

    println!("Species: {label}");
    println!("  Population: {:.0}", inputs.population);
    println!("  Females: {:.0}", inputs.female_population);
    println!(
        "  Births: {:.1} every {:.1} year(s)",
        inputs.births_per_cycle, inputs.birth_cycle_years
    );
    println!(
        "  Lifespan: {:.0}y, first birth at {:.0}y",
        inputs.lifespan, inputs.age_at_first_birth
    );
    println!();

    println!("EAI Score: {} / 1000", eai.score);
    println!("  {}", eai.tipping_point_label);
    println!("  {}", eai.verdict);
    println!();
    println!("  Lifetime babies per female: {:.1}", eai.lifetime_babies_per_female);
    println!("  Annual birth rate:   {:>6.2}%", eai.annual_birth_rate);
    println!("  Annual decline rate: {:>6.2}%", eai.annual_decline_rate);
    println!(
        "  Net change: {:>+6.2}%  (can recover: {})",
        assessment.net_change_rate_percent(),
        if eai.can_recover { "yes" } else { "no" }
    );
    println!();

    let series = &assessment.projection.series;
    println!("Projection ({} years):", series.len().saturating_sub(1));
    println!("{:>6} {:>14}", "Year", "Population");
    println!("{}", "-".repeat(21));
    for point in series.iter().take(20) {
        println!("{:>6} {:>14.0}", point.year, point.population);
    }
    if series.len() > 20 {
        println!("... ({} more years)", series.len() - 20);
    }

    match assessment.projection.extinction_year {
        Some(year) => println!(
            "\nFunctional extinction (under 100 individuals) projected by {year}"
        ),
        None => println!("\nNo functional extinction within the projection horizon"),
    }
}

fn write_series_csv(path: &str, assessment: &Assessment) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("unable to create {path}"))?;

    writeln!(file, "Year,Population")?;
    for point in &assessment.projection.series {
        writeln!(file, "{},{:.0}", point.year, point.population)?;
    }

    Ok(())
}
