//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::course::CourseCommand;
use crate::commands::quiz::QuizCommand;
use crate::commands::watch::WatchArgs;

/// Admin CLI for the quizroom learning platform.
#[derive(Parser, Debug)]
#[command(name = "quizroom")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Session management (login, logout, refresh)
    Auth(AuthCommand),

    /// Course administration
    Course(CourseCommand),

    /// Quiz administration
    Quiz(QuizCommand),

    /// Watch an online quiz waiting room
    Watch(WatchArgs),
}
