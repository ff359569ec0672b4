//! Refresh command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::require_session;
use crate::output;

#[derive(Args, Debug)]
pub struct RefreshArgs {}

pub async fn run(_args: RefreshArgs) -> Result<()> {
    let session = require_session()?;

    session
        .refresh()
        .await
        .context("Failed to refresh access token")?;

    // The file-backed store persisted the new token already
    output::success("Access token refreshed");

    Ok(())
}
