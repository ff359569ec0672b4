//! Create course command implementation.

use anyhow::{Context, Result};
use clap::Args;

use quizroom::ResourceId;
use quizroom::api::NewCourse;

use crate::commands::require_session;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Course name
    #[arg(long)]
    pub name: String,

    /// Course description
    #[arg(long)]
    pub description: Option<String>,

    /// Category id to file the course under
    #[arg(long)]
    pub category: Option<String>,

    /// Teacher id responsible for the course
    #[arg(long)]
    pub teacher: Option<String>,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    let session = require_session()?;

    let category_id = args
        .category
        .as_deref()
        .map(ResourceId::new)
        .transpose()
        .context("Invalid category id")?;
    let teacher_id = args
        .teacher
        .as_deref()
        .map(ResourceId::new)
        .transpose()
        .context("Invalid teacher id")?;

    let new_course = NewCourse {
        name: args.name,
        description: args.description,
        category_id,
        teacher_id,
    };

    let course = session
        .courses()
        .create(&new_course)
        .await
        .context("Failed to create course")?;

    output::success("Course created");
    println!();
    output::field("Id", course.id.as_str());
    output::field("Name", &course.name);

    Ok(())
}
