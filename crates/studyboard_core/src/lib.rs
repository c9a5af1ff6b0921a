//! Core domain logic for StudyBoard.
//! This crate is the single source of truth for board invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod views;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Stage, Task, TaskDraft, TaskId, TaskValidationError};
pub use repo::board_repo::{
    BoardRepository, RepoError, RepoResult, SqliteBoardRepository, STORAGE_KEY,
};
pub use service::board_service::{BoardService, BoardServiceError, Clock, SystemClock};
pub use service::export_service::{export_snapshot, suggested_filename, BoardSnapshot};
pub use views::board::{
    classify_dueness, compute_stats, count_by_stage, count_overdue, group_by_stage, BoardStats,
    Dueness, DUE_SOON_WINDOW_DAYS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
