//! Tracing subscriber setup.
//!
//! Only installed in debug mode (`PWLAB_DEBUG` or `RUST_LOG` set), where the
//! message macros route through `tracing` instead of plain `println!`.

use super::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs an `EnvFilter` + compact stderr subscriber when debug mode is on.
///
/// Reads `RUST_LOG`; defaults to `pwlab=debug` when only `PWLAB_DEBUG` is set.
///
/// ```bash
/// RUST_LOG=pwlab=trace pwlab pattern 10
/// ```
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pwlab=debug"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .try_init();
}
