//! # mxdb-connect
//!
//! Resolves human supplied MongoDB connection descriptors into clients.
//!
//! This crate provides:
//! - Descriptor parsing: `host`, `host:port`, `scheme://host:port` and
//!   separated host lists, normalized to `host:port`
//! - Standalone vs. replica set dispatch, with a minimum of three hosts per
//!   replica set
//! - Database selection with optional authentication against a separate
//!   authentication database
//! - A driver seam ([`Connector`], [`ClientHandle`], [`DatabaseHandle`]) with
//!   an implementation on top of the official MongoDB driver
//!
//! ## Example
//!
//! ```rust,ignore
//! use mxdb_connect::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = ConnectOptions::builder().app_name("reports").build();
//!
//!     // Replica set: at least three hosts, ports default to 27017
//!     let connection = resolve(
//!         &MongoConnector,
//!         "server1,server2:27018,server3",
//!         Some("rs0"),
//!         &options,
//!     )?;
//!
//!     // Authenticate against `admin`, then use `mydb`
//!     let credentials = Credentials::new("admin", "secret").with_authdb("admin");
//!     let db = select_database(&connection, "mydb", &credentials).await?;
//!
//!     db.ping().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod descriptor;
pub mod driver;
pub mod error;
pub mod logging;
pub mod mongo;
pub mod resolver;
pub mod select;

pub use config::{ConnectOptions, ConnectOptionsBuilder, Credentials};
pub use descriptor::{DEFAULT_PORT, HostToken, TokenError, normalize};
pub use driver::{ClientHandle, Connector, DatabaseHandle};
pub use error::{ConnectError, ConnectResult, DriverError};
pub use mongo::{MongoConnection, MongoConnector, MongoDatabase};
pub use resolver::{ClusterSpec, MIN_CLUSTER_HOSTS, Topology, resolve};
pub use select::select_database;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{ConnectOptions, Credentials};
    pub use crate::driver::{ClientHandle, Connector, DatabaseHandle};
    pub use crate::error::{ConnectError, ConnectResult};
    pub use crate::mongo::{MongoConnection, MongoConnector, MongoDatabase};
    pub use crate::resolver::{Topology, resolve};
    pub use crate::select::select_database;
}
