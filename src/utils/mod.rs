pub mod build_info;

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global fmt subscriber. `RUST_LOG` takes precedence over
/// `default_filter`; an unparsable filter falls back to `info`.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Another subscriber may already be installed by the host application.
    let _ = fmt().with_env_filter(filter).try_init();
}
