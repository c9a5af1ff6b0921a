//! Board groupings, counts and dueness classification.
//!
//! # Responsibility
//! - Derive the per-stage views and aggregate statistics the view layer
//!   renders after every mutation.
//! - Classify task dueness against a caller-supplied calendar date.
//!
//! # Invariants
//! - All comparisons are calendar-date only; time of day never matters.
//! - Done tasks are never overdue, due today, or due soon.
//! - A task without a due date has no dueness at all.

use crate::model::task::{Priority, Stage, Task};
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

/// Inclusive number of days ahead of `today` counted as "due soon".
pub const DUE_SOON_WINDOW_DAYS: u64 = 3;

/// Dueness classification of one task relative to a calendar date.
///
/// `DueToday` and `Overdue` are mutually exclusive: calendar equality with
/// today wins, so a task due today is never reported as overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dueness {
    /// No due date, or the task is already done.
    None,
    /// Due date lies strictly before today.
    Overdue,
    /// Due date equals today.
    DueToday,
    /// Due date lies strictly after today.
    Upcoming,
}

/// Aggregate board statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    pub total: usize,
    pub completed: usize,
    pub high_priority: usize,
    /// Open tasks due within `[today, today + DUE_SOON_WINDOW_DAYS]`.
    pub due_soon: usize,
}

/// Groups tasks by stage, preserving insertion order within each group.
///
/// Every stage is present in the result, empty groups included, and the map
/// iterates in board order.
pub fn group_by_stage(tasks: &[Task]) -> BTreeMap<Stage, Vec<&Task>> {
    let mut groups: BTreeMap<Stage, Vec<&Task>> =
        Stage::ALL.iter().map(|stage| (*stage, Vec::new())).collect();
    for task in tasks {
        groups.entry(task.stage).or_default().push(task);
    }
    groups
}

/// Returns the number of tasks in each stage.
pub fn count_by_stage(tasks: &[Task]) -> BTreeMap<Stage, usize> {
    let mut counts: BTreeMap<Stage, usize> =
        Stage::ALL.iter().map(|stage| (*stage, 0)).collect();
    for task in tasks {
        *counts.entry(task.stage).or_default() += 1;
    }
    counts
}

/// Computes aggregate statistics in one pass over the task list.
pub fn compute_stats(tasks: &[Task], today: NaiveDate) -> BoardStats {
    let window_end = today.checked_add_days(Days::new(DUE_SOON_WINDOW_DAYS));

    let mut stats = BoardStats {
        total: tasks.len(),
        ..BoardStats::default()
    };
    for task in tasks {
        if task.is_done() {
            stats.completed += 1;
        }
        if task.priority == Priority::High {
            stats.high_priority += 1;
        }
        if is_due_soon(task, today, window_end) {
            stats.due_soon += 1;
        }
    }
    stats
}

/// Classifies one task's dueness relative to `today`.
pub fn classify_dueness(task: &Task, today: NaiveDate) -> Dueness {
    if task.is_done() {
        return Dueness::None;
    }
    let Some(due) = task.due_date else {
        return Dueness::None;
    };

    if due == today {
        Dueness::DueToday
    } else if due < today {
        Dueness::Overdue
    } else {
        Dueness::Upcoming
    }
}

/// Counts tasks classified [`Dueness::Overdue`].
///
/// Computed once at load time for the startup notice; there is no timer
/// re-checking dueness while the board is open.
pub fn count_overdue(tasks: &[Task], today: NaiveDate) -> usize {
    tasks
        .iter()
        .filter(|task| classify_dueness(task, today) == Dueness::Overdue)
        .count()
}

fn is_due_soon(task: &Task, today: NaiveDate, window_end: Option<NaiveDate>) -> bool {
    if task.is_done() {
        return false;
    }
    match (task.due_date, window_end) {
        (Some(due), Some(end)) => today <= due && due <= end,
        _ => false,
    }
}
