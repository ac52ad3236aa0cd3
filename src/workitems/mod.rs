//! Work-item field files for `mm-azure-devops`: reading, grouping by work
//! item type and turning fields into JSON-patch documents.

pub mod template;

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const WORK_ITEM_TYPE_PATH: &str = "/fields/System.WorkItemType";
pub const DEFAULT_WORK_ITEM_TYPE: &str = "Task";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemField {
    pub op: String,
    pub path: String,
    pub value: String,
}

impl WorkItemField {
    pub fn add(path: &str, value: &str) -> Self {
        Self {
            op: "add".to_string(),
            path: path.to_string(),
            value: value.to_string(),
        }
    }
}

/// One operation of a JSON-patch document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
}

pub fn read_fields(path: &Path) -> Result<Vec<WorkItemField>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))
}

/// The work item type named by the fields, `Task` when absent or empty.
pub fn work_item_type(fields: &[WorkItemField]) -> &str {
    fields
        .iter()
        .find(|f| f.path == WORK_ITEM_TYPE_PATH)
        .map(|f| f.value.as_str())
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_WORK_ITEM_TYPE)
}

/// All fields of a file describe one work item, filed under its type.
pub fn group_by_type(fields: Vec<WorkItemField>) -> BTreeMap<String, Vec<WorkItemField>> {
    let kind = work_item_type(&fields).to_string();
    let mut grouped = BTreeMap::new();
    grouped.insert(kind, fields);
    grouped
}

/// Only `add` is supported; other operations are reported and sent as `add`.
pub fn to_patches(fields: &[WorkItemField]) -> Vec<PatchOperation> {
    fields
        .iter()
        .map(|field| {
            if field.op != "add" {
                warn!("Unsupported operation type '{}' for {}, using add", field.op, field.path);
            }
            PatchOperation {
                op: PatchOp::Add,
                path: field.path.clone(),
                value: field.value.clone(),
            }
        })
        .collect()
}
