//! Course subcommand implementations.

mod create;
mod delete;
mod get;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct CourseCommand {
    #[command(subcommand)]
    pub command: CourseSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CourseSubcommand {
    /// List courses
    List(list::ListArgs),

    /// Fetch a single course
    Get(get::GetArgs),

    /// Create a new course
    Create(create::CreateArgs),

    /// Delete a course
    Delete(delete::DeleteArgs),
}

pub async fn handle(cmd: CourseCommand) -> Result<()> {
    match cmd.command {
        CourseSubcommand::List(args) => list::run(args).await,
        CourseSubcommand::Get(args) => get::run(args).await,
        CourseSubcommand::Create(args) => create::run(args).await,
        CourseSubcommand::Delete(args) => delete::run(args).await,
    }
}
