//! Subcommand implementations.

pub mod auth;
pub mod course;
pub mod quiz;
pub mod watch;

use anyhow::{Context, Result};
use quizroom::Session;

use crate::session::storage;

/// Load the stored session, failing with a hint when none exists.
fn require_session() -> Result<Session> {
    storage::load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'quizroom auth login' first.")
}
