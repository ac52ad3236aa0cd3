use super::{WorkItemField, WORK_ITEM_TYPE_PATH};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TEMPLATE_FILE_NAME: &str = "work-item-template.json";

/// A starting point listing the commonly filled fields.
pub fn create_template() -> Vec<WorkItemField> {
    vec![
        WorkItemField::add("/fields/System.Title", "Example Title: Update this value"),
        WorkItemField::add(WORK_ITEM_TYPE_PATH, "Task | Bug | User Story | Feature"),
        WorkItemField::add(
            "/fields/System.Description",
            "Example Description: Provide a detailed description here.",
        ),
        WorkItemField::add("/fields/System.AreaPath", "YourProject\\YourArea"),
        WorkItemField::add("/fields/System.IterationPath", "YourProject\\Iteration 1"),
    ]
}

pub fn write_template(fields: &[WorkItemField], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(fields).context("Failed to serialize template")?;
    fs::write(path, json).with_context(|| format!("Failed to write template to {}", path.display()))
}

/// Writes the template and returns where it landed.
pub fn generate_template_file(path: &Path) -> Result<PathBuf> {
    write_template(&create_template(), path)?;
    Ok(std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()))
}
