//! Login command implementation.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use quizroom::{BaseUrl, Credentials, Session};

use crate::output;
use crate::session::storage::{self, FileTokenStore};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Backend base URL
    #[arg(long, default_value = "https://api.quizroom.app")]
    pub base: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let base = BaseUrl::new(&args.base).context("Invalid base URL")?;
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let path = storage::session_path()?;
    let store = Arc::new(FileTokenStore::create(path, &base));

    let session = Session::login_with_store(&base, credentials, store)
        .await
        .context("Failed to login")?;

    // The store wrote the token pair to disk during login
    output::success("Logged in successfully");
    println!();
    output::field("Backend", session.base().as_str());
    output::field("Account", &args.email);

    Ok(())
}
