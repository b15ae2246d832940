//! buybye-core
//!
//! Projection arithmetic and the goal-crediting state machine.
//! Depends on buybye-domain. No terminal I/O, no storage, no clock reads
//! except through the injected [`Clock`].

pub mod error;
pub mod format;
pub mod goal_matcher;
pub mod goal_service;
pub mod investment_service;
pub mod ledger_service;
pub mod rate_service;
pub mod retirement_service;
pub mod settings_service;
pub mod time;
pub mod timeline_service;
pub mod work_time_service;

mod validation;

pub use error::CoreError;
pub use format::*;
pub use goal_matcher::*;
pub use goal_service::*;
pub use investment_service::*;
pub use ledger_service::*;
pub use rate_service::*;
pub use retirement_service::*;
pub use settings_service::*;
pub use time::Clock;
pub use timeline_service::*;
pub use work_time_service::*;
