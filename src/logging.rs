//! Tracing setup for the `jskw` binary.
//!
//! The subscriber is only installed when `JSKW_LOG` (or `RUST_LOG`) is set.
//! `JSKW_LOG` wins when both are present. Output goes to stderr so it never
//! mixes with the classification lines on stdout.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "JSKW_LOG";

fn build_filter() -> Option<EnvFilter> {
    if let Ok(val) = std::env::var(LOG_ENV) {
        Some(EnvFilter::builder().parse_lossy(val))
    } else if std::env::var("RUST_LOG").is_ok() {
        Some(EnvFilter::from_default_env())
    } else {
        None
    }
}

pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    // A subscriber may already be installed, e.g. by a test harness.
    if let Err(err) = installed {
        tracing::debug!(%err, "keeping existing tracing subscriber");
    }
}
