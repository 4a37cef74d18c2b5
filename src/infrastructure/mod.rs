//! Infrastructure layer - External service implementations

pub mod account;
pub mod logging;
