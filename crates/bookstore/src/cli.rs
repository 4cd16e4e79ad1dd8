//! Command flow behind the `bookstore` binary.
//!
//! Seeds a [`Bookstore`] from the configured file and writes search matches as
//! JSON lines, so the binary's behaviour is testable without spawning a
//! process.

use std::io::{self, Write};
use std::sync::Arc;

use ortho_config::OrthoError;
use thiserror::Error;
use tracing::info;

use crate::domain::DomainError;
use crate::seed::{SeedError, SeedFile};
use crate::settings::BookstoreSettings;
use crate::store::Bookstore;

/// Errors surfaced by the `bookstore` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be merged from flags, environment, and files.
    #[error("configuration error: {source}")]
    Settings {
        /// Underlying configuration error.
        #[from]
        #[source]
        source: Arc<OrthoError>,
    },
    /// The seed file could not be loaded or applied.
    #[error("seed error: {source}")]
    Seed {
        /// Underlying seed error.
        #[from]
        #[source]
        source: SeedError,
    },
    /// The store rejected an operation.
    #[error("store error: {source}")]
    Store {
        /// Underlying domain error.
        #[from]
        #[source]
        source: DomainError,
    },
    /// A search match could not be encoded as JSON.
    #[error("failed to encode search match: {source}")]
    Encode {
        /// Underlying encoding error.
        #[from]
        #[source]
        source: serde_json::Error,
    },
    /// Output could not be written.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying I/O error.
        #[from]
        #[source]
        source: io::Error,
    },
}

/// Seed `store` from `settings.seed_path`, then write every book matching
/// `settings.search` to `out` as one JSON object per line.
///
/// # Errors
/// Returns [`CliError`] when seeding fails, a lock is poisoned, or output
/// cannot be encoded or written.
pub fn execute(
    settings: &BookstoreSettings,
    store: &Bookstore,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if let Some(path) = settings.seed_path.as_deref() {
        let summary = SeedFile::from_file(path)?.apply(store)?;
        info!(
            path = %path.display(),
            books = summary.books_added,
            users = summary.users_registered,
            skipped = summary.users_skipped,
            "seed applied"
        );
    }

    let (books, users) = store.counts()?;
    info!(books, users, "bookstore ready");

    if let Some(keyword) = settings.search.as_deref() {
        let found = store.search(keyword)?;
        for book in &found {
            serde_json::to_writer(&mut *out, book)?;
            writeln!(out)?;
        }
        info!(keyword, matches = found.len(), "search complete");
    }
    Ok(())
}
