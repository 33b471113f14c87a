use anyhow::Context;
use clap::Args;
use log::{info, warn};
use std::path::PathBuf;
use wotr_names_codegen::{extract, load_records, render_artifact, write_atomic};

use crate::utils::input_or_default;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Blueprint dump exported from the game [default: $WOTR_CHEATDATA or
    /// data/cheatdata.json, relative to the workspace root]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the generated lookups
    #[arg(short, long)]
    pub output: PathBuf,
}

pub fn execute(args: GenerateArgs) -> anyhow::Result<()> {
    let input = input_or_default(args.input);
    let output = args.output;

    let records = load_records(&input)
        .with_context(|| format!("Could not load blueprints from {}", input.display()))?;
    let extraction = extract(&records);

    for summary in extraction.summary() {
        info!(
            "{}: {} entries ({} rendered)",
            summary.category,
            summary.total,
            summary.rendered()
        );
        if !summary.duplicate_identifiers.is_empty() {
            warn!(
                "{}: {} guids appear more than once, the first name is kept",
                summary.category,
                summary.duplicate_identifiers.len()
            );
        }
    }

    write_atomic(&output, &render_artifact(&extraction))
        .with_context(|| format!("Could not write {}", output.display()))?;

    info!("Wrote {}", output.display());
    Ok(())
}
