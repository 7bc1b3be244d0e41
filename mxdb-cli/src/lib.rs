//! mxdb CLI - Command-line interface for MongoDB connection descriptors.
//!
//! This crate provides the `mxdb` tool, which resolves descriptors into
//! standalone or replica set topologies and checks that a database can be
//! selected (and authenticated against) with them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
