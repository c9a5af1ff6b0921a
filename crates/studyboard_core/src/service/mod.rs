//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep view layers decoupled from storage details.

pub mod board_service;
pub mod export_service;
