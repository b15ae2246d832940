#![doc(test(attr(deny(warnings))))]

//! BuyBye turns a price into hours of work, foregone investment growth and
//! progress toward savings goals, and credits declined purchases to those
//! goals exactly once.

pub mod clock;
pub mod engine;
pub mod errors;
pub mod utils;

pub use buybye_config::{ConfigManager, EngineConfig};
pub use buybye_core;
pub use buybye_domain;
pub use clock::SystemClock;
pub use engine::{DecisionReceipt, PurchaseEngine};
pub use errors::EngineError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default filter and emits a startup log.
pub fn init() {
    init_with_config(&EngineConfig::default());
}

/// Initializes global tracing using the config's log filter; `RUST_LOG` wins when set.
pub fn init_with_config(config: &EngineConfig) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(&config.log_filter);
        let build = utils::build_info::current();
        tracing::info!(version = build.version, git = build.git_hash, "BuyBye engine tracing initialized.");
    });
}
