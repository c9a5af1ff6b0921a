//! CLI board summary probe.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `studyboard_core` wiring.
//! - Print a deterministic board summary for quick local sanity checks.

use std::process::ExitCode;

use studyboard_core::db::open_db;
use studyboard_core::{compute_stats, count_by_stage, BoardService, SqliteBoardRepository};

const DEFAULT_DB_FILE: &str = "studyboard.sqlite3";

fn main() -> ExitCode {
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_FILE.to_owned());

    match run(&db_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("studyboard: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(db_path: &str) -> Result<(), String> {
    let conn = open_db(db_path).map_err(|err| err.to_string())?;
    let repo = SqliteBoardRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let board = BoardService::load(repo).map_err(|err| err.to_string())?;

    println!("studyboard version={}", studyboard_core::core_version());
    for (stage, count) in count_by_stage(board.tasks()) {
        println!("{stage}: {count}");
    }

    let stats = compute_stats(board.tasks(), board.today());
    println!(
        "total={} completed={} high_priority={} due_soon={}",
        stats.total, stats.completed, stats.high_priority, stats.due_soon
    );

    // One-time overdue notice, mirrored from the board's load-time check.
    let overdue = board.overdue_count();
    if overdue > 0 {
        println!("you have {overdue} overdue task(s)");
    }

    Ok(())
}
