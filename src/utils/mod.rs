pub mod build_info;
pub mod persistence;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "finance_tracker=info";

/// Initializes the global tracing subscriber, honouring `RUST_LOG` when set.
///
/// Logs go to stderr so that ledger listings on stdout stay clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber may already be installed by an embedding application.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
