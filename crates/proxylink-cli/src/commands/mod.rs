//! Command implementations.

pub mod associate;
pub mod config;

pub use self::associate::{execute_associate, AssociateReport};
pub use self::config::execute_config;
