//! The driver seam.
//!
//! Resolution and database selection never talk to the network themselves.
//! They call into a driver through these traits, which keeps the parsing and
//! dispatch logic testable without a server. [`crate::mongo`] provides the
//! implementation backed by the official MongoDB driver.

use async_trait::async_trait;

use crate::config::ConnectOptions;

/// Builds clients for standalone servers and replica sets.
pub trait Connector: Send + Sync {
    /// Client handle produced by this connector.
    type Client: ClientHandle;

    /// Error produced when a client cannot be constructed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct a client for a single `host:port` endpoint.
    fn standalone(&self, uri: &str, options: &ConnectOptions) -> Result<Self::Client, Self::Error>;

    /// Construct a client for a comma separated `host:port` list forming `replica_set`.
    fn cluster(
        &self,
        host_list: &str,
        replica_set: &str,
        options: &ConnectOptions,
    ) -> Result<Self::Client, Self::Error>;
}

/// A live (or lazily connecting) client owned by the caller.
pub trait ClientHandle: Send + Sync {
    /// Database handle type.
    type Database: DatabaseHandle;

    /// Look up a database by name. Never fails; the lookup is lazy.
    fn database(&self, name: &str) -> Self::Database;
}

/// A database reached through a [`ClientHandle`].
#[async_trait]
pub trait DatabaseHandle: Send + Sync {
    /// Error produced when authentication fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name of this database.
    fn name(&self) -> &str;

    /// Authenticate against this database.
    ///
    /// On success the owning client's session is authenticated as `username`.
    async fn authenticate(&self, username: &str, password: &str) -> Result<(), Self::Error>;
}
