//! Store layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the board storage contract consumed by the service layer.
//! - Isolate SQLite and JSON-blob details from business orchestration.
//!
//! # Invariants
//! - Corrupt or missing persisted state degrades to an empty board on read;
//!   it is never surfaced as an error to callers.

pub mod board_repo;
