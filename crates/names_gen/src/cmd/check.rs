use anyhow::Context;
use clap::Args;
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use wotr_names_codegen::generate_names;

use crate::utils::input_or_default;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Blueprint dump exported from the game [default: $WOTR_CHEATDATA or
    /// data/cheatdata.json, relative to the workspace root]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Previously generated lookups to compare against
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Returns whether the file on disk matches a fresh render.
pub fn execute(args: CheckArgs) -> anyhow::Result<bool> {
    let input = input_or_default(args.input);
    let output = args.output;

    let expected = generate_names(&input)
        .with_context(|| format!("Could not generate names from {}", input.display()))?;

    let existing = match fs::read_to_string(&output) {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            return Err(e).with_context(|| format!("Could not read {}", output.display()));
        }
    };

    let up_to_date = is_up_to_date(existing.as_deref(), &expected);
    match (&existing, up_to_date) {
        (None, _) => error!("{} does not exist, run `names_gen generate`", output.display()),
        (Some(_), false) => error!("{} is out of date, run `names_gen generate`", output.display()),
        (Some(_), true) => info!("{} is up to date", output.display()),
    }

    Ok(up_to_date)
}

fn is_up_to_date(existing: Option<&str>, expected: &str) -> bool {
    existing == Some(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_stale() {
        assert!(!is_up_to_date(None, "use log::info;\n"));
    }

    #[test]
    fn test_exact_match_only() {
        assert!(is_up_to_date(Some("a\n"), "a\n"));
        assert!(!is_up_to_date(Some("a"), "a\n"));
    }
}
