//! HTTP inbound adapter serving the front desk page, its form handlers, the
//! CSV history export, and health probes.

pub mod error;
pub mod export;
pub mod forms;
pub mod front_desk;
pub mod health;
pub mod page;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
