use serde::Serialize;
use wotr_names_codegen::CategorySummary;

#[derive(Serialize, Default, Clone)]
pub struct StatsReport {
    pub input: String,
    pub records: usize,
    pub categories: Vec<CategoryStats>,
}

#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct CategoryStats {
    pub category: String,
    pub function: String,
    pub extracted: usize,
    pub rendered: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub empty_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub duplicate_guids: Vec<String>,
}

impl From<&CategorySummary> for CategoryStats {
    fn from(summary: &CategorySummary) -> Self {
        CategoryStats {
            category: summary.category.label().to_string(),
            function: summary.category.function_name(),
            extracted: summary.total,
            rendered: summary.rendered(),
            empty_names: summary.empty_names.clone(),
            duplicate_guids: summary.duplicate_identifiers.clone(),
        }
    }
}
