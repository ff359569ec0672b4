//! List courses command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use quizroom::table::TableState;

use crate::commands::require_session;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page to display (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long, default_value_t = 20)]
    pub page_size: usize,

    /// Only show courses whose name contains this keyword
    #[arg(long)]
    pub filter: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let session = require_session()?;

    let courses = session
        .courses()
        .list()
        .await
        .context("Failed to list courses")?;

    if courses.is_empty() {
        eprintln!("{}", "No courses found.".dimmed());
        return Ok(());
    }

    let mut table = TableState::new(courses, args.page_size);
    table.set_keyword(args.filter.clone());
    table.set_page(args.page.saturating_sub(1));

    let matches =
        |course: &quizroom::api::Course, keyword: &str| {
            course.name.to_lowercase().contains(&keyword.to_lowercase())
        };

    let page = table.page_rows(matches);

    if args.json {
        output::json(&page)?;
        return Ok(());
    }

    for course in &page {
        println!(
            "{}  {}",
            course.id.to_string().dimmed(),
            course.name,
        );
    }

    let pages = table.page_count(matches);
    if pages > 1 {
        eprintln!();
        eprintln!(
            "{}",
            format!("Page {} of {}", args.page.min(pages), pages).dimmed()
        );
    }

    Ok(())
}
