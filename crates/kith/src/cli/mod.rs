//! CLI command implementations.

mod display;

pub mod query;
pub mod session;
