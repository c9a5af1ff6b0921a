//! Board use-case service.
//!
//! # Responsibility
//! - Own the in-memory task sequence and every mutation path into it.
//! - Persist synchronously after each successful mutation.
//!
//! # Invariants
//! - The in-memory sequence and the persisted blob agree after every call:
//!   a mutation either completes including persistence, or the in-memory
//!   change is rolled back before the error is returned.
//! - Unknown task ids are silent no-ops, never errors; they only arise from
//!   stale view-layer references.
//! - Task ordering is insertion order; moves never reorder.

use crate::model::task::{Stage, Task, TaskDraft, TaskId, TaskValidationError};
use crate::repo::board_repo::{BoardRepository, RepoError};
use crate::service::export_service::{export_snapshot, BoardSnapshot};
use crate::views::board::count_overdue;
use chrono::{DateTime, Local, NaiveDate, Utc};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Time source injected into the service.
///
/// Kept as a trait so tests can pin the calendar date and creation
/// timestamps deterministically.
pub trait Clock {
    /// Wall-clock instant used for creation and export timestamps.
    fn now(&self) -> DateTime<Utc>;

    /// Local calendar date used for dueness comparisons.
    fn today(&self) -> NaiveDate;
}

/// Default clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Service error for board use-cases.
#[derive(Debug)]
pub enum BoardServiceError {
    /// Draft rejected before any mutation took place.
    Validation(TaskValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for BoardServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for BoardServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case facade owning the canonical task list.
///
/// Single-threaded and fully synchronous: every operation runs to
/// completion, persistence included, before the next one starts.
pub struct BoardService<R: BoardRepository> {
    repo: R,
    tasks: Vec<Task>,
    clock: Box<dyn Clock>,
}

impl<R: BoardRepository> BoardService<R> {
    /// Loads the board from persisted state using the system clock.
    pub fn load(repo: R) -> Result<Self, BoardServiceError> {
        Self::with_clock(repo, Box::new(SystemClock))
    }

    /// Loads the board with a caller-provided clock.
    ///
    /// The startup overdue count is computed exactly once here; nothing
    /// re-checks dueness in the background afterwards.
    pub fn with_clock(repo: R, clock: Box<dyn Clock>) -> Result<Self, BoardServiceError> {
        let tasks = repo.load()?;
        info!(
            "event=board_load module=service status=ok count={} overdue={}",
            tasks.len(),
            count_overdue(&tasks, clock.today())
        );
        Ok(Self { repo, tasks, clock })
    }

    /// The ordered in-memory task sequence.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Validates a draft, appends the new backlog task and persists.
    ///
    /// A rejected draft mutates nothing and persists nothing.
    pub fn create_task(&mut self, draft: TaskDraft) -> Result<Task, BoardServiceError> {
        let task = Task::new(draft, self.clock.now())?;

        self.tasks.push(task.clone());
        if let Err(err) = self.repo.persist(&self.tasks) {
            self.tasks.pop();
            return Err(err.into());
        }

        debug!(
            "event=task_create module=service status=ok task_id={} stage={}",
            task.id, task.stage
        );
        Ok(task)
    }

    /// Moves a task to `target` and persists.
    ///
    /// Returns `Ok(false)` for unknown ids without touching storage. A move
    /// to the task's current stage is allowed and still persists.
    pub fn move_task(&mut self, id: TaskId, target: Stage) -> Result<bool, BoardServiceError> {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("event=task_move module=service status=skipped reason=unknown_id task_id={id}");
            return Ok(false);
        };

        let previous = self.tasks[index].stage;
        self.tasks[index].stage = target;
        if let Err(err) = self.repo.persist(&self.tasks) {
            self.tasks[index].stage = previous;
            return Err(err.into());
        }

        debug!(
            "event=task_move module=service status=ok task_id={id} from={previous} to={target}"
        );
        Ok(true)
    }

    /// Permanently removes a task and persists.
    ///
    /// Returns `Ok(false)` for unknown ids without touching storage.
    /// Confirming intent is the caller's concern.
    pub fn delete_task(&mut self, id: TaskId) -> Result<bool, BoardServiceError> {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!(
                "event=task_delete module=service status=skipped reason=unknown_id task_id={id}"
            );
            return Ok(false);
        };

        let removed = self.tasks.remove(index);
        if let Err(err) = self.repo.persist(&self.tasks) {
            self.tasks.insert(index, removed);
            return Err(err.into());
        }

        debug!("event=task_delete module=service status=ok task_id={id}");
        Ok(true)
    }

    /// Permanently removes every task and persists.
    ///
    /// Returns the number of removed tasks; an already-empty board is a
    /// safe no-op.
    pub fn clear_all(&mut self) -> Result<usize, BoardServiceError> {
        if self.tasks.is_empty() {
            return Ok(0);
        }

        let previous = std::mem::take(&mut self.tasks);
        if let Err(err) = self.repo.persist(&self.tasks) {
            self.tasks = previous;
            return Err(err.into());
        }

        info!(
            "event=board_clear module=service status=ok count={}",
            previous.len()
        );
        Ok(previous.len())
    }

    /// Number of currently overdue open tasks, per the service clock.
    pub fn overdue_count(&self) -> usize {
        count_overdue(&self.tasks, self.clock.today())
    }

    /// Local calendar date the service derives views against.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Builds a portable snapshot stamped with the service clock.
    pub fn export_snapshot(&self) -> BoardSnapshot {
        export_snapshot(&self.tasks, self.clock.now())
    }
}
