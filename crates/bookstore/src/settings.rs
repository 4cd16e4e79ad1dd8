//! Runtime configuration loaded via OrthoConfig.
//!
//! Values merge from CLI flags, `BOOKSTORE_*` environment variables, and
//! configuration files in the usual OrthoConfig precedence.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Settings for the `bookstore` binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKSTORE")]
pub struct BookstoreSettings {
    /// JSON seed file used to pre-populate the store.
    pub seed_path: Option<PathBuf>,
    /// Title keyword to search for once the store is seeded.
    pub search: Option<String>,
    /// Emit logs as JSON lines instead of compact text.
    #[ortho_config(default = false)]
    pub json_logs: bool,
    /// `tracing` filter directive, for example `bookstore=debug`.
    pub log_filter: Option<String>,
}

impl BookstoreSettings {
    /// Configured log filter directive, if any.
    ///
    /// When unset, [`crate::telemetry::init`] reads `RUST_LOG` instead.
    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.log_filter.as_deref()
    }
}
