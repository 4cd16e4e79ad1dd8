//! Bookstore entry-point: loads settings, seeds the store, and runs a search.
//!
//! The command flow lives in `bookstore::cli` so it can be exercised without
//! spawning a process.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use bookstore::Bookstore;
use bookstore::cli::{self, CliError};
use bookstore::settings::BookstoreSettings;
use bookstore::telemetry;
use ortho_config::OrthoConfig;
use tracing::error;

fn main() -> ExitCode {
    match run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "bookstore failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl IntoIterator<Item = OsString>) -> Result<(), CliError> {
    let settings = BookstoreSettings::load_from_iter(args)?;
    telemetry::init(settings.log_filter(), settings.json_logs);

    let store = Bookstore::new();
    cli::execute(&settings, &store, &mut io::stdout().lock())
}
