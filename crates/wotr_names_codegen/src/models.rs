//! JSON deserialization structures for the cheat data dump.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{CodegenError, MalformedInput, Result};

/// Top level of the dump: `{ "Entries": [...] }`.
///
/// Entries stay untyped here so a bad record can be reported by index.
#[derive(Deserialize)]
pub struct CheatData {
    #[serde(rename = "Entries")]
    pub entries: Vec<serde_json::Value>,
}

/// One blueprint definition. All three fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub display_name: String,
    #[serde(rename = "TypeFullName")]
    pub kind_tag: String,
    #[serde(rename = "Guid")]
    pub identifier: String,
}

impl Record {
    pub fn new(
        display_name: impl Into<String>,
        kind_tag: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Record {
            display_name: display_name.into(),
            kind_tag: kind_tag.into(),
            identifier: identifier.into(),
        }
    }
}

/// Parse and validate a dump held in memory.
///
/// Validation happens once here: serde rejects missing or mistyped fields,
/// and an empty `Guid` is rejected explicitly since every generated match arm
/// needs a non-empty identifier.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let data: CheatData = serde_json::from_str(json)?;

    data.entries
        .into_iter()
        .enumerate()
        .map(|(index, value)| -> Result<Record> {
            let record: Record = serde_json::from_value(value)
                .map_err(|source| MalformedInput::Record { index, source })?;
            if record.identifier.is_empty() {
                return Err(MalformedInput::EmptyField {
                    index,
                    field: "Guid",
                }
                .into());
            }
            Ok(record)
        })
        .collect()
}

/// Read and validate the dump at `path`.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let json = fs::read_to_string(path).map_err(|source| CodegenError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&json)
}
