//! Delete course command implementation.

use anyhow::{Context, Result};
use clap::Args;

use quizroom::ResourceId;

use crate::commands::require_session;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Course id
    #[arg(long)]
    pub id: String,
}

pub async fn run(args: DeleteArgs) -> Result<()> {
    let session = require_session()?;

    let id = ResourceId::new(&args.id).context("Invalid course id")?;

    session
        .courses()
        .delete(&id)
        .await
        .context("Failed to delete course")?;

    output::success("Course deleted");

    Ok(())
}
