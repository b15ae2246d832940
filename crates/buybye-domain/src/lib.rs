//! buybye-domain
//!
//! Pure domain models (UserSettings, Goal, SavingsAggregate, PurchaseDecision, etc.).
//! No I/O, no storage. Only data types and core enums.

pub mod common;
pub mod decision;
pub mod goal;
pub mod savings;
pub mod settings;

pub use common::*;
pub use decision::*;
pub use goal::*;
pub use savings::*;
pub use settings::*;
