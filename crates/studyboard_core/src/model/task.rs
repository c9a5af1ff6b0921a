//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted by the board store.
//! - Validate user-supplied drafts before they become board tasks.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` and `subject` are non-empty after trimming.
//! - `stage` is always one of the four board stages; the enum makes any
//!   other value unrepresentable in memory and unparseable on load.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Fixed board stage a task belongs to.
///
/// The derived ordering is the left-to-right board order, which keeps
/// stage-keyed maps iterating in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Captured but not yet scheduled.
    Backlog,
    /// Scheduled for work.
    Todo,
    /// Work has started.
    InProgress,
    /// Completed; excluded from dueness checks.
    Done,
}

impl Stage {
    /// All stages in board order.
    pub const ALL: [Stage; 4] = [Stage::Backlog, Stage::Todo, Stage::InProgress, Stage::Done];

    /// Wire/storage name of the stage.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Backlog => "backlog",
            Stage::Todo => "todo",
            Stage::InProgress => "inprogress",
            Stage::Done => "done",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Validation failure for user-supplied task fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// `title` is empty after trimming whitespace.
    EmptyTitle,
    /// `subject` is empty after trimming whitespace.
    EmptySubject,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::EmptySubject => write!(f, "task subject must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// User-supplied fields for a task that is not on the board yet.
///
/// Drafts carry raw form input; trimming and validation happen when the
/// draft is turned into a [`Task`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub subject: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub description: String,
}

/// Canonical task record.
///
/// Serialized field names match the persisted JSON layout
/// (`dueDate`, `createdAt`, lowercase stages, capitalized priorities).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable id assigned at creation, immutable thereafter.
    pub id: TaskId,
    pub title: String,
    pub subject: String,
    pub priority: Priority,
    /// Calendar due date without a time component. Past dates are valid
    /// input; retroactively created tasks may already be overdue.
    #[serde(with = "due_date_wire")]
    pub due_date: Option<NaiveDate>,
    /// Free-form text; may be empty.
    pub description: String,
    /// The only field mutated after creation (via stage moves).
    pub stage: Stage,
    /// Creation instant, immutable.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a task from a draft with a freshly generated stable id.
    ///
    /// New tasks always enter the board in [`Stage::Backlog`].
    pub fn new(draft: TaskDraft, created_at: DateTime<Utc>) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), draft, created_at)
    }

    /// Builds a task with a caller-provided stable id.
    ///
    /// Used by import paths and deterministic tests where identity already
    /// exists externally.
    pub fn with_id(
        id: TaskId,
        draft: TaskDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TaskValidationError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        let subject = draft.subject.trim();
        if subject.is_empty() {
            return Err(TaskValidationError::EmptySubject);
        }

        Ok(Self {
            id,
            title: title.to_owned(),
            subject: subject.to_owned(),
            priority: draft.priority,
            due_date: draft.due_date,
            description: draft.description.trim().to_owned(),
            stage: Stage::Backlog,
            created_at,
        })
    }

    /// Whether this task sits in the done stage.
    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }
}

/// Legacy wire format for due dates: `"YYYY-MM-DD"`, with the empty string
/// standing in for "no due date".
mod due_date_wire {
    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map(Some)
            .map_err(D::Error::custom)
    }
}
