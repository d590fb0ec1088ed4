//! Diagnostics on stderr, filtered by `RUST_LOG` (`warn` when unset).
//!
//! Answers are printed on stdout by the binaries and never go through here.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber, call once at the top of `main`.
///
/// ```bash
/// RUST_LOG=guard_patrol=debug guard-patrol inputs.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
