//! CLI command implementations.

pub mod connect;
pub mod resolve;
pub mod version;
