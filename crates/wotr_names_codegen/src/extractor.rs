//! Record classification into squads and companions.

use std::collections::HashSet;
use std::fmt;

use crate::models::Record;

/// Trailing marker on companion unit names, e.g. `Ember_Companion`.
pub const COMPANION_SUFFIX: &str = "_Companion";
/// Leading marker on animal companion units, e.g. `AnimalCompanionUnitWolf`.
pub const ANIMAL_PREFIX: &str = "AnimalCompanionUnit";
/// Aivu's unit blueprint has no naming convention to strip.
pub const AZATA_DRAGON_UNIT: &str = "AzataDragonUnit";
pub const AZATA_DRAGON_NAME: &str = "Aivu";
/// Leading marker on crusade army squads, e.g. `ArmyGoblinSquad`.
pub const ARMY_PREFIX: &str = "Army";
/// Only units of this type are considered squads.
pub const UNIT_BLUEPRINT_TYPE: &str = "Kingmaker.Blueprints.BlueprintUnit";

// Marker lengths are fixed by the dump format.
const _: () = {
    assert!(COMPANION_SUFFIX.len() == 10);
    assert!(ANIMAL_PREFIX.len() == 19);
    assert!(ARMY_PREFIX.len() == 4);
};

/// The two lookup tables that get generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Squad,
    Companion,
}

impl Category {
    /// Rendering order of the generated artifact.
    pub const ALL: [Category; 2] = [Category::Squad, Category::Companion];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Squad => "squad",
            Category::Companion => "companion",
        }
    }

    /// Name of the generated lookup function, e.g. `squad_as_string`.
    pub fn function_name(self) -> String {
        format!("{}_as_string", self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A guid and the name it resolves to.
///
/// `name` may be empty here; empty names are dropped by the emitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedEntry {
    pub identifier: String,
    pub name: String,
}

impl NamedEntry {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        NamedEntry {
            identifier: identifier.into(),
            name: name.into(),
        }
    }
}

/// Output of [`extract`]: one ordered sequence per category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub squads: Vec<NamedEntry>,
    pub companions: Vec<NamedEntry>,
}

impl Extraction {
    pub fn entries(&self, category: Category) -> &[NamedEntry] {
        match category {
            Category::Squad => &self.squads,
            Category::Companion => &self.companions,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<NamedEntry> {
        match category {
            Category::Squad => &mut self.squads,
            Category::Companion => &mut self.companions,
        }
    }

    /// Per-category diagnostics. Nothing here changes what gets generated.
    pub fn summary(&self) -> Vec<CategorySummary> {
        Category::ALL
            .iter()
            .map(|&category| {
                let entries = self.entries(category);
                let mut seen = HashSet::new();
                let mut duplicates = Vec::new();
                for entry in entries {
                    if !seen.insert(entry.identifier.as_str())
                        && !duplicates.contains(&entry.identifier)
                    {
                        duplicates.push(entry.identifier.clone());
                    }
                }

                CategorySummary {
                    category,
                    total: entries.len(),
                    empty_names: entries
                        .iter()
                        .filter(|e| e.name.is_empty())
                        .map(|e| e.identifier.clone())
                        .collect(),
                    duplicate_identifiers: duplicates,
                }
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: Category,
    /// Entries extracted, including the ones with empty names.
    pub total: usize,
    /// Identifiers whose resolved name is empty (never rendered).
    pub empty_names: Vec<String>,
    /// Identifiers seen more than once, in first-seen order.
    pub duplicate_identifiers: Vec<String>,
}

impl CategorySummary {
    /// Number of match arms the emitter will produce.
    pub fn rendered(&self) -> usize {
        self.total - self.empty_names.len()
    }
}

// TODO: There are ~4k other BlueprintUnit entries (summons, enemies) that
// could get a third table once there is a consumer for them.

/// Decide which table a record belongs to and what its name is.
///
/// Rules are checked in order and the first one that applies wins.
pub fn classify(record: &Record) -> Option<(Category, NamedEntry)> {
    let name = record.display_name.as_str();

    let (category, resolved) = if let Some(stem) = name.strip_suffix(COMPANION_SUFFIX) {
        (Category::Companion, stem)
    } else if let Some(stem) = name.strip_prefix(ANIMAL_PREFIX) {
        (Category::Companion, stem)
    } else if name == AZATA_DRAGON_UNIT {
        (Category::Companion, AZATA_DRAGON_NAME)
    } else if let Some(stem) = name
        .strip_prefix(ARMY_PREFIX)
        .filter(|_| record.kind_tag == UNIT_BLUEPRINT_TYPE)
    {
        (Category::Squad, stem)
    } else {
        return None;
    };

    Some((category, NamedEntry::new(record.identifier.as_str(), resolved)))
}

/// Run [`classify`] over every record, keeping input order.
///
/// No deduplication and no empty-name filtering happen here.
pub fn extract(records: &[Record]) -> Extraction {
    let mut extraction = Extraction::default();

    for record in records {
        if let Some((category, entry)) = classify(record) {
            extraction.entries_mut(category).push(entry);
        }
    }

    log::debug!(
        "classified {} squads and {} companions out of {} records",
        extraction.squads.len(),
        extraction.companions.len(),
        records.len()
    );

    extraction
}
