//! Tracing subscriber installation for the binary.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// A configured `filter` directive takes precedence. Without one, or when it
/// does not parse, `RUST_LOG` is used, and `info` when that is unset too.
/// Installation failures (a subscriber is already set) are logged and
/// otherwise ignored.
pub fn init(filter: Option<&str>, json: bool) {
    let env_filter = build_filter(filter);
    let result = if json {
        fmt().with_env_filter(env_filter).json().try_init()
    } else {
        fmt().with_env_filter(env_filter).compact().try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn build_filter(configured: Option<&str>) -> EnvFilter {
    configured
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
