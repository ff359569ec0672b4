//! Get course command implementation.

use anyhow::{Context, Result};
use clap::Args;

use quizroom::ResourceId;

use crate::commands::require_session;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Course id
    #[arg(long)]
    pub id: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(args: GetArgs) -> Result<()> {
    let session = require_session()?;

    let id = ResourceId::new(&args.id).context("Invalid course id")?;

    let course = session
        .courses()
        .get(&id)
        .await
        .context("Failed to fetch course")?;

    if args.pretty {
        output::json_pretty(&course)?;
    } else {
        output::json(&course)?;
    }

    Ok(())
}
