//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::commands::require_session;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let session = require_session()?;

    output::field("Backend", session.base().as_str());
    output::field(
        "Access token",
        if session.access_token().is_some_and(|t| !t.is_empty()) {
            "present"
        } else {
            "missing"
        },
    );
    output::field(
        "Refresh token",
        if session.refresh_token().is_some() {
            "present"
        } else {
            "missing"
        },
    );

    Ok(())
}
