//! Report label packs.
//!
//! Labels are a plain value built once per run and handed to the
//! [`Reporter`](super::text::Reporter). Built-in packs exist for English
//! and Ukrainian; a TOML file can override any subset of keys, the rest
//! falls back to English.
//!
//! ```toml
//! error_type = "Error type"
//! count = "Count"
//! nothing_found = "Nothing to report."
//! ```

use crate::utils::error::LabelsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    pub heading: String,
    pub total_errors: String,
    pub unique_errors: String,
    pub by_category: String,
    pub error_type: String,
    pub count: String,
    pub message: String,
    pub first_timestamp: String,
    pub last_timestamp: String,
    pub nothing_found: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::english()
    }
}

impl ReportLabels {
    pub fn english() -> Self {
        Self {
            heading: "Log file analysis complete. Results:".to_string(),
            total_errors: "Total errors found".to_string(),
            unique_errors: "Unique error types".to_string(),
            by_category: "By category".to_string(),
            error_type: "Error type".to_string(),
            count: "Count".to_string(),
            message: "Message".to_string(),
            first_timestamp: "First occurrence".to_string(),
            last_timestamp: "Last occurrence".to_string(),
            nothing_found: "No errors found to analyze.".to_string(),
        }
    }

    pub fn ukrainian() -> Self {
        Self {
            heading: "Аналіз лог-файлу завершено. Результати:".to_string(),
            total_errors: "Всього знайдено помилок".to_string(),
            unique_errors: "Кількість унікальних типів помилок".to_string(),
            by_category: "За категоріями".to_string(),
            error_type: "Тип помилки".to_string(),
            count: "Кількість".to_string(),
            message: "Повідомлення".to_string(),
            first_timestamp: "Перша поява".to_string(),
            last_timestamp: "Остання поява".to_string(),
            nothing_found: "Не знайдено жодних помилок для аналізу.".to_string(),
        }
    }

    /// Look up a built-in pack by ISO 639-1 code
    pub fn builtin(language: &str) -> Result<Self, LabelsError> {
        match language.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::english()),
            "uk" => Ok(Self::ukrainian()),
            other => Err(LabelsError::UnknownLanguage(other.to_string())),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, LabelsError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a label pack from a TOML file
    ///
    /// # Errors
    /// * `LabelsError::Io` - If the file cannot be read
    /// * `LabelsError::Parse` - If the TOML is invalid
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LabelsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
