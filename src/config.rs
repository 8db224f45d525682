//! Page selectors, labels and style classes.
//!
//! Defaults reproduce the catalogue's resource pages. A JSON file may override
//! any subset of the fields; missing fields keep their defaults.
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Class marking elements whose text is a raw scientific name.
    pub scientific_name_class: String,
    /// Id of the control that shows and hides sensitive rows.
    pub toggle_control_id: String,
    /// Class marking sensitive-information rows.
    pub sensitive_class: String,
    pub show_label: String,
    pub hide_label: String,
    /// Applied to the control while sensitive rows are visible.
    pub danger_class: String,
    /// Applied to the control while sensitive rows are hidden.
    pub outline_class: String,
    /// Display value for visible sensitive rows.
    pub row_display: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scientific_name_class: "scientific_name".to_string(),
            toggle_control_id: "toggle-sensitive-info".to_string(),
            sensitive_class: "sensitive-info".to_string(),
            show_label: "显示敏感信息".to_string(),
            hide_label: "隐藏敏感信息".to_string(),
            danger_class: "btn-danger".to_string(),
            outline_class: "btn-outline-secondary".to_string(),
            row_display: "table-row".to_string(),
        }
    }
}

/// Loads a page configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<PageConfig> {
    let content = fs::read_to_string(path)?;
    let config: PageConfig = serde_json::from_str(&content)?;
    debug!("Loaded page config from {:?}: {:?}", path, config);
    Ok(config)
}
