//! Build script for wotr_names.
//!
//! Calls out to wotr_names_codegen to generate the lookup functions from the
//! blueprint dump.

use std::env;
use std::path::Path;

use wotr_names_codegen::{input_path, INPUT_ENV};

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir).join("../..");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={}", INPUT_ENV);

    // Point WOTR_CHEATDATA at the dump from your local WotR installation,
    // otherwise the sample in data/ is used.
    let input = input_path(&workspace_root, env::var_os(INPUT_ENV).as_deref());

    if let Err(e) = wotr_names_codegen::generate_all(Path::new(&out_dir), &input) {
        panic!("Failed to generate names from {}: {}", input.display(), e);
    }
}
