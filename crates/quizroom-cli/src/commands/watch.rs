//! Watch command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use futures_util::StreamExt;

use quizroom::ResourceId;
use quizroom::live::WaitingRoomEvent;

use crate::commands::require_session;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Online quiz id whose waiting room to watch
    #[arg(long)]
    pub quiz: String,

    /// Output events as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: WatchArgs) -> Result<()> {
    let session = require_session()?;

    let quiz = ResourceId::new(&args.quiz).context("Invalid online quiz id")?;

    eprintln!("{}", "Connecting to waiting room...".dimmed());
    eprintln!("{}", "Press Ctrl+C to stop.".dimmed());
    eprintln!();

    let mut stream = session
        .join_waiting_room(&quiz)
        .await
        .context("Failed to join waiting room")?;

    while let Some(result) = stream.next().await {
        match result {
            Ok(event) => {
                handle_event(&event, args.json);
            }
            Err(e) => {
                eprintln!("{} {}", "ERROR".red(), e);
            }
        }
    }

    eprintln!();
    eprintln!("{}", "Waiting room closed.".dimmed());

    Ok(())
}

fn handle_event(event: &WaitingRoomEvent, json_output: bool) {
    if json_output {
        if let Ok(json) = serde_json::to_string(event) {
            println!("{}", json);
        }
        return;
    }

    match event {
        WaitingRoomEvent::Joined {
            student_id, name, ..
        } => {
            println!("{} {} ({})", "JOINED".green(), name, student_id.dimmed());
        }
        WaitingRoomEvent::Left { student_id, .. } => {
            println!("{} {}", "LEFT".yellow(), student_id.dimmed());
        }
        WaitingRoomEvent::Started { quiz_id, .. } => {
            println!("{} quiz {}", "STARTED".cyan(), quiz_id);
        }
        WaitingRoomEvent::Info { message } => {
            eprintln!(
                "{} {}",
                "INFO".dimmed(),
                message.as_deref().unwrap_or("")
            );
        }
        WaitingRoomEvent::Unknown { kind } => {
            eprintln!("{} {}", "UNKNOWN".dimmed(), kind);
        }
    }
}
