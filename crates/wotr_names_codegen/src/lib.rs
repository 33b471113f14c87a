//! Code generation helpers for wotr_names.
//!
//! This crate reads the blueprint dump exported from Pathfinder: Wrath of the
//! Righteous (`cheatdata.json`) and generates guid to name lookups for crusade
//! army squads and companions.

mod emitter;
mod error;
mod extractor;
mod helpers;
mod models;
mod output;
mod paths;

use std::path::Path;

pub use emitter::{render_artifact, render_lookup, HEADER};
pub use error::{CodegenError, MalformedInput, Result};
pub use extractor::{
    classify, extract, Category, CategorySummary, Extraction, NamedEntry, ANIMAL_PREFIX,
    ARMY_PREFIX, AZATA_DRAGON_NAME, AZATA_DRAGON_UNIT, COMPANION_SUFFIX, UNIT_BLUEPRINT_TYPE,
};
pub use models::{load_records, parse_records, Record};
pub use output::write_atomic;
pub use paths::{input_path, DEFAULT_INPUT, INPUT_ENV};

/// File name of the generated artifact inside the output directory.
pub const GENERATED_FILE: &str = "names.rs";

/// Load the dump at `input` and render the complete lookup file.
pub fn generate_names(input: &Path) -> Result<String> {
    let records = load_records(input)?;
    let extraction = extract(&records);
    Ok(render_artifact(&extraction))
}

/// Generate `names.rs` from the dump at `input` into `out_dir`.
///
/// This is the main entry point called from wotr_names' build.rs.
pub fn generate_all(out_dir: &Path, input: &Path) -> Result<()> {
    // Rerun if the dump changes
    println!("cargo:rerun-if-changed={}", input.display());

    let code = generate_names(input)?;
    write_atomic(&out_dir.join(GENERATED_FILE), &code)
}
