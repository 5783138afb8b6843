use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use wordstat_core::{TextComparison, TextReport};

use crate::loader::SourceInfo;
use crate::CliError;

/// A report together with the file it was computed from, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<SourceInfo>,
    #[serde(flatten)]
    pub report: TextReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_a: Option<SourceInfo>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_b: Option<SourceInfo>,
    #[serde(flatten)]
    pub comparison: TextComparison,
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write `value` to `path` as pretty-printed JSON.
pub fn save_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<(), CliError> {
    let path = path.as_ref();
    fs::write(path, to_json(value)?)?;
    info!(path = %path.display(), "saved analysis");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordstat_core::TextAnalyzer;

    #[test]
    fn document_report_flattens_report_fields() {
        let report = DocumentReport {
            source: None,
            report: TextAnalyzer::default().analyze("The cat sat."),
        };
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(value["statistics"]["word_count"], 3);
        assert_eq!(value["most_common"][0]["word"], "cat");
        assert!(value.get("source").is_none());
    }
}
