//! Quiz subcommand implementations.

mod get;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct QuizCommand {
    #[command(subcommand)]
    pub command: QuizSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum QuizSubcommand {
    /// List quizzes
    List(list::ListArgs),

    /// Fetch a single quiz
    Get(get::GetArgs),
}

pub async fn handle(cmd: QuizCommand) -> Result<()> {
    match cmd.command {
        QuizSubcommand::List(args) => list::run(args).await,
        QuizSubcommand::Get(args) => get::run(args).await,
    }
}
