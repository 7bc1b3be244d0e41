//! # mxdb
//!
//! Resolve loosely formatted MongoDB connection descriptors into clients.
//!
//! mxdb provides:
//! - Descriptor parsing for `host`, `host:port`, `scheme://host:port` and
//!   comma, semicolon or whitespace separated host lists
//! - Standalone vs. replica set dispatch with a three host minimum
//! - Database selection with optional authentication against a separate
//!   authentication database
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mxdb::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mxdb::ConnectError> {
//!     let connection = resolve(
//!         &MongoConnector,
//!         "mongodb://localhost:27018",
//!         None,
//!         &ConnectOptions::default(),
//!     )?;
//!
//!     let db = select_database(&connection, "mydb", &Credentials::new("app", "secret")).await?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Descriptor parsing and normalization.
pub mod descriptor {
    pub use mxdb_connect::descriptor::*;
}

/// Logging bootstrap.
pub mod logging {
    pub use mxdb_connect::logging::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use mxdb_connect::prelude::*;
}

// Re-export key types at the crate root
pub use mxdb_connect::{
    ClientHandle, ClusterSpec, ConnectError, ConnectOptions, ConnectResult, Connector, Credentials,
    DEFAULT_PORT, DatabaseHandle, MIN_CLUSTER_HOSTS, MongoConnection, MongoConnector,
    MongoDatabase, Topology, normalize, resolve, select_database,
};
