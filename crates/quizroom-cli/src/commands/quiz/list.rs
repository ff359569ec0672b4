//! List quizzes command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use quizroom::ResourceId;

use crate::commands::require_session;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show quizzes belonging to this course
    #[arg(long)]
    pub course: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let session = require_session()?;

    let quizzes = match &args.course {
        Some(course) => {
            let course = ResourceId::new(course).context("Invalid course id")?;
            session.quizzes().list_by_course(&course).await
        }
        None => session.quizzes().list().await,
    }
    .context("Failed to list quizzes")?;

    if quizzes.is_empty() {
        eprintln!("{}", "No quizzes found.".dimmed());
        return Ok(());
    }

    if args.json {
        output::json(&quizzes)?;
        return Ok(());
    }

    for quiz in &quizzes {
        let duration = match quiz.duration_minutes {
            Some(minutes) => format!("{} min", minutes),
            None => "untimed".to_string(),
        };
        println!(
            "{}  {} ({})",
            quiz.id.to_string().dimmed(),
            quiz.title,
            duration.dimmed(),
        );
    }

    Ok(())
}
