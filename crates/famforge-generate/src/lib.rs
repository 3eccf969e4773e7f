//! Randomized household-registration record generator for Famforge.
//!
//! This crate samples synthetic household records from fixed vocabulary
//! tables and flattens them into ordered, titled sections ready for the
//! rendering collaborator.

pub mod errors;
pub mod generator;
pub mod model;
pub mod sections;
pub mod vocab;

pub use errors::GenerationError;
pub use generator::generate_record;
pub use model::HouseholdRecord;
pub use sections::{record_sections, Section, SECTION_TITLES};
