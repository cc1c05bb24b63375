//! pocket - local account shell
//!
//! Signs up, logs in and out against the on-device session store.
//!
//! # Examples
//!
//! ```bash
//! # Register and log in
//! pocket signup --name "Ada" --email ada@example.com --password secret1
//!
//! # Who is logged in?
//! pocket whoami --pretty
//!
//! # Log out, then back in
//! pocket logout
//! pocket login --email ADA@example.com --password secret1
//! ```

use pocket_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match pocket_cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
