//! Tracing setup for the `trifuzzy` binary.
//!
//! ## Log Levels
//!
//! - **INFO**: Command lifecycle
//! - **DEBUG**: Aggregates (mean computation)
//! - **TRACE**: Individual set insertions and removals

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `default_directive`. Safe to call multiple times -
/// only the first call has effect.
pub fn init(default_directive: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init();
    });
}
