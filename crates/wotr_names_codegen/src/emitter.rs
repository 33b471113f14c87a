//! Lookup function rendering.
//!
//! The output is plain text laid out the way rustfmt would, so the generated
//! file can be committed and diffed without a formatting pass.

use std::fmt::Write;

use crate::extractor::{Category, Extraction, NamedEntry};
use crate::helpers::str_literal;

/// Import required by the catch-all arm of every lookup function.
pub const HEADER: &str = "use log::info;\n";

/// Render `<category>_as_string`, a total `&str -> Option<&'static str>` lookup.
///
/// Arms follow `entries` order, so on duplicate guids the first one wins.
/// Entries with an empty name are skipped and fall through to the catch-all.
pub fn render_lookup(category: Category, entries: &[NamedEntry]) -> String {
    let mut code = String::new();

    writeln!(
        code,
        "/// Convert a {} guid into its (english) display name",
        category
    )
    .unwrap();
    writeln!(
        code,
        "pub fn {}(s: &str) -> Option<&'static str> {{",
        category.function_name()
    )
    .unwrap();
    code.push_str("    match s {\n");

    for entry in entries.iter().filter(|e| !e.name.is_empty()) {
        writeln!(
            code,
            "        {} => Some({}),",
            str_literal(&entry.identifier),
            str_literal(&entry.name)
        )
        .unwrap();
    }

    code.push_str("        _ => {\n");
    code.push_str("            info!(\"Unknown party member found: {}\", s);\n");
    code.push_str("            None\n");
    code.push_str("        }\n");
    code.push_str("    }\n");
    code.push('}');

    code
}

/// Render the whole generated file: the log import, then one lookup per
/// category in [`Category::ALL`] order separated by a blank line.
pub fn render_artifact(extraction: &Extraction) -> String {
    let functions: Vec<String> = Category::ALL
        .iter()
        .map(|&category| render_lookup(category, extraction.entries(category)))
        .collect();

    format!("{}\n{}\n", HEADER, functions.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lookup_layout() {
        let entries = vec![
            NamedEntry::new("G1", "GoblinWarrior"),
            NamedEntry::new("G2", ""),
            NamedEntry::new("G3", "Aivu"),
        ];

        let expected = r#"/// Convert a companion guid into its (english) display name
pub fn companion_as_string(s: &str) -> Option<&'static str> {
    match s {
        "G1" => Some("GoblinWarrior"),
        "G3" => Some("Aivu"),
        _ => {
            info!("Unknown party member found: {}", s);
            None
        }
    }
}"#;

        assert_eq!(render_lookup(Category::Companion, &entries), expected);
    }

    #[test]
    fn test_empty_table_still_has_catch_all() {
        let code = render_lookup(Category::Squad, &[]);
        assert!(code.contains("pub fn squad_as_string(s: &str)"));
        assert!(code.contains("    match s {\n        _ => {\n"));
    }

    #[test]
    fn test_duplicates_keep_input_order() {
        let entries = vec![NamedEntry::new("G1", "A"), NamedEntry::new("G1", "B")];
        let code = render_lookup(Category::Companion, &entries);

        let first = code.find("Some(\"A\")").unwrap();
        let second = code.find("Some(\"B\")").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_artifact_order() {
        let extraction = Extraction {
            squads: vec![NamedEntry::new("G2", "GoblinSquad")],
            companions: vec![NamedEntry::new("G1", "GoblinWarrior")],
        };
        let code = render_artifact(&extraction);

        assert!(code.starts_with("use log::info;\n\n/// Convert a squad guid"));
        assert!(code.ends_with("}\n"));
        assert!(code.contains("}\n\n/// Convert a companion guid"));

        let squad_fn = code.find("fn squad_as_string").unwrap();
        let companion_fn = code.find("fn companion_as_string").unwrap();
        assert!(squad_fn < companion_fn);

        // Each guid only lands in its own table.
        let (squad_part, companion_part) = code.split_at(companion_fn);
        assert!(squad_part.contains("\"G2\"") && !squad_part.contains("\"G1\""));
        assert!(companion_part.contains("\"G1\"") && !companion_part.contains("\"G2\""));
    }

    #[test]
    fn test_names_are_escaped() {
        let entries = vec![NamedEntry::new("G1", "Say \"hi\"")];
        let code = render_lookup(Category::Companion, &entries);
        assert!(code.contains(r#""G1" => Some("Say \"hi\""),"#));
    }
}
