//! buybye-config
//!
//! Engine configuration model (projection horizon, work-hour basis, reminder
//! options, log filter) plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::EngineConfig;
