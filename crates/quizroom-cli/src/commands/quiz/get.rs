//! Get quiz command implementation.

use anyhow::{Context, Result};
use clap::Args;

use quizroom::ResourceId;

use crate::commands::require_session;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Quiz id
    #[arg(long)]
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: GetArgs) -> Result<()> {
    let session = require_session()?;

    let id = ResourceId::new(&args.id).context("Invalid quiz id")?;

    let quiz = session
        .quizzes()
        .get(&id)
        .await
        .context("Failed to fetch quiz")?;

    if args.pretty {
        output::json_pretty(&quiz)?;
    } else {
        output::json(&quiz)?;
    }

    Ok(())
}
