//! User-visible default strings of the table widgets.
//!
//! Provide a [`DataTableLabels`] with `provide_context` to localize every
//! `DataTable` below it. Explicit component props still win.
//! The application ships its labels in `labels.json` next to the crate
//! manifest.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Labels bundled with the application
const BUNDLED_LABELS: &str = include_str!("../../labels.json");

#[derive(Debug, Error)]
pub enum LabelsError {
    #[error("invalid labels configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataTableLabels {
    pub add_label: String,
    pub empty_message: String,
    pub loading_message: String,
    pub actions_button: String,
    pub batch_modal_title: String,
    pub close_title: String,
    /// Appended to the selected count in the selection banner
    pub selected_suffix: String,
}

impl Default for DataTableLabels {
    fn default() -> Self {
        Self {
            add_label: "+ Add".to_string(),
            empty_message: "No records found.".to_string(),
            loading_message: "Loading…".to_string(),
            actions_button: "Actions".to_string(),
            batch_modal_title: "Batch action".to_string(),
            close_title: "Close".to_string(),
            selected_suffix: "item(s) selected".to_string(),
        }
    }
}

impl DataTableLabels {
    /// Parses labels from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LabelsError> {
        let labels = serde_json::from_str(json)?;
        Ok(labels)
    }

    /// Labels from the bundled `labels.json`, defaults if it does not parse
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_LABELS).unwrap_or_else(|e| {
            log::error!("{}, falling back to default labels", e);
            Self::default()
        })
    }

    pub fn selection_summary(&self, count: usize) -> String {
        format!("{} {}", count, self.selected_suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let labels = DataTableLabels::default();
        assert_eq!(labels.add_label, "+ Add");
        assert_eq!(labels.empty_message, "No records found.");
        assert_eq!(labels.selection_summary(3), "3 item(s) selected");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let labels = DataTableLabels::from_json(
            r#"{"add_label": "+ Добавить", "selected_suffix": "выбрано"}"#,
        )
        .unwrap();
        assert_eq!(labels.add_label, "+ Добавить");
        assert_eq!(labels.selection_summary(2), "2 выбрано");
        assert_eq!(labels.batch_modal_title, "Batch action");
    }

    #[test]
    fn test_bundled_labels_parse() {
        let labels = DataTableLabels::from_json(BUNDLED_LABELS).unwrap();
        assert_eq!(labels, DataTableLabels::bundled());
        assert_eq!(labels.empty_message, "No records found.");
    }

    #[test]
    fn test_invalid_json() {
        let err = DataTableLabels::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid labels configuration"));
    }
}
