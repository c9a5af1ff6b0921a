//! Read-model derivations over the task list.
//!
//! # Responsibility
//! - Recompute per-stage groupings, counts and dueness stats on demand.
//!
//! # Invariants
//! - Derivations are stateless pure functions over a task slice; nothing is
//!   cached or updated incrementally.

pub mod board;
