//! Species profiles and the CSV loader

mod data;
pub mod loader;

pub use data::{builtin_species, get_species_by_slug, ConservationStatus, SpeciesProfile};
pub use loader::{load_default_species, load_species, load_species_from_reader};
