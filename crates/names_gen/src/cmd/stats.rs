use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use wotr_names_codegen::{extract, load_records, Record};

use crate::models::{CategoryStats, StatsReport};
use crate::utils::input_or_default;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Blueprint dump exported from the game [default: $WOTR_CHEATDATA or
    /// data/cheatdata.json, relative to the workspace root]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: StatsArgs) -> anyhow::Result<()> {
    let input = input_or_default(args.input);
    let records = load_records(&input)
        .with_context(|| format!("Could not load blueprints from {}", input.display()))?;

    let report = build_report(input.display().to_string(), &records);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn build_report(input: String, records: &[Record]) -> StatsReport {
    let extraction = extract(records);

    StatsReport {
        input,
        records: records.len(),
        categories: extraction.summary().iter().map(CategoryStats::from).collect(),
    }
}

fn print_report(report: &StatsReport) {
    println!("\n=== Blueprint Classification ===");
    println!("Input:   {}", report.input);
    println!("Records: {}", report.records);
    println!("================================");

    for stats in &report.categories {
        println!(
            "\n{} ({}): {} extracted, {} rendered",
            stats.category, stats.function, stats.extracted, stats.rendered
        );
        for guid in &stats.empty_names {
            println!("  - empty name, skipped: {}", guid);
        }
        for guid in &stats.duplicate_guids {
            println!("  - duplicate guid, first name kept: {}", guid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wotr_names_codegen::UNIT_BLUEPRINT_TYPE;

    #[test]
    fn test_report_counts() {
        let records = vec![
            Record::new("GoblinWarrior_Companion", "X", "G1"),
            Record::new("ArmyGoblinSquad", UNIT_BLUEPRINT_TYPE, "G2"),
            Record::new("_Companion", "X", "G3"),
            Record::new("Longsword", "X", "G4"),
        ];
        let report = build_report("cheatdata.json".to_string(), &records);

        assert_eq!(report.records, 4);
        assert_eq!(report.categories.len(), 2);

        let squads = &report.categories[0];
        assert_eq!(squads.function, "squad_as_string");
        assert_eq!((squads.extracted, squads.rendered), (1, 1));

        let companions = &report.categories[1];
        assert_eq!(companions.function, "companion_as_string");
        assert_eq!((companions.extracted, companions.rendered), (2, 1));
        assert_eq!(companions.empty_names, vec!["G3".to_string()]);
    }

    #[test]
    fn test_json_omits_empty_lists() {
        let records = vec![Record::new("ArmyOrcs", UNIT_BLUEPRINT_TYPE, "G1")];
        let report = build_report("cheatdata.json".to_string(), &records);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["categories"][0]["extracted"], 1);
        assert!(json["categories"][0].get("empty_names").is_none());
        assert!(json["categories"][0].get("duplicate_guids").is_none());
    }
}
