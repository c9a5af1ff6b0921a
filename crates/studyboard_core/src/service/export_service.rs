//! Snapshot export for the task board.
//!
//! # Responsibility
//! - Serialize the task list plus metadata into a portable document.
//! - Suggest a download filename embedding the export date.
//!
//! # Invariants
//! - Export never mutates the store; delivering the document to the user
//!   (download, file write) is a view-layer concern.
//! - An empty board exports a valid document with `totalTasks: 0`.

use crate::model::task::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Portable point-in-time export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub exported_at: DateTime<Utc>,
    pub total_tasks: usize,
    pub tasks: Vec<Task>,
}

impl BoardSnapshot {
    /// Renders the snapshot as pretty-printed JSON, the shape the download
    /// file carries.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds a snapshot of the given tasks stamped with `now`.
pub fn export_snapshot(tasks: &[Task], now: DateTime<Utc>) -> BoardSnapshot {
    BoardSnapshot {
        exported_at: now,
        total_tasks: tasks.len(),
        tasks: tasks.to_vec(),
    }
}

/// Suggested download filename for an export taken at `now`.
///
/// The embedded date is the UTC date of the export timestamp.
pub fn suggested_filename(now: DateTime<Utc>) -> String {
    format!("study_planner_export_{}.json", now.format("%Y-%m-%d"))
}
