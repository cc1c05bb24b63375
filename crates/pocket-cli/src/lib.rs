//! pocket-cli library
//!
//! Command dispatch, form validation and logging setup for the `pocket` binary.

pub mod app;
pub mod cli;
pub mod commands;
pub(crate) mod error;
pub mod form_validator;
pub(crate) mod logging;

pub use app::{App, CommandOutput, OutputBody};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use form_validator::{FormError, FormValidator};

use pocket_config::Config;
use pocket_store::{FileStore, SessionStore};

use std::process::ExitCode;

use tracing::info;

#[cfg(test)]
mod tests;

/// Load config, set up logging, restore the session and run one command.
pub async fn run(cli: Cli) -> CliResult<ExitCode> {
    let config = Config::load()?;
    config.validate()?;

    logging::setup_logging(&config.log_path()?, &config.logging)?;

    info!("Starting pocket v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let storage = FileStore::new(config.storage_path()?);
    info!("Storage directory: {:?}", storage.dir());

    let app = App::new(SessionStore::new(storage), config.validation.clone());
    app.start().await;

    let output = app.execute(cli.command).await;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output.body)?
    } else {
        serde_json::to_string(&output.body)?
    };
    println!("{json}");

    if let Some(alert) = output.alert {
        eprintln!("{alert}");
    }
    if let Some(hint) = output.hint {
        eprintln!("{hint}");
    }

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
