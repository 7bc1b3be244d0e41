//! Connection options and credentials.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Options handed to the driver when a client is constructed.
///
/// These are opaque to descriptor resolution: the resolver passes them
/// through untouched and only the [`Connector`](crate::driver::Connector)
/// decides what they mean. Unset fields leave the driver default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Application name (shown in server logs).
    pub app_name: Option<String>,
    /// Minimum connection pool size.
    pub min_pool_size: Option<u32>,
    /// Maximum connection pool size.
    pub max_pool_size: Option<u32>,
    /// Maximum idle time for pooled connections.
    pub max_idle_time: Option<Duration>,
    /// Connection timeout.
    pub connect_timeout: Option<Duration>,
    /// Server selection timeout.
    pub server_selection_timeout: Option<Duration>,
    /// Direct connection (bypass replica set discovery).
    pub direct_connection: Option<bool>,
}

impl ConnectOptions {
    /// Create a builder for options.
    pub fn builder() -> ConnectOptionsBuilder {
        ConnectOptionsBuilder::new()
    }

    /// Check whether no option is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Builder for [`ConnectOptions`].
#[derive(Debug, Default)]
pub struct ConnectOptionsBuilder {
    options: ConnectOptions,
}

impl ConnectOptionsBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application name.
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.options.app_name = Some(name.into());
        self
    }

    /// Set the minimum pool size.
    pub fn min_pool_size(mut self, size: u32) -> Self {
        self.options.min_pool_size = Some(size);
        self
    }

    /// Set the maximum pool size.
    pub fn max_pool_size(mut self, size: u32) -> Self {
        self.options.max_pool_size = Some(size);
        self
    }

    /// Set the maximum idle time for connections.
    pub fn max_idle_time(mut self, duration: Duration) -> Self {
        self.options.max_idle_time = Some(duration);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.options.connect_timeout = Some(duration);
        self
    }

    /// Set the server selection timeout.
    pub fn server_selection_timeout(mut self, duration: Duration) -> Self {
        self.options.server_selection_timeout = Some(duration);
        self
    }

    /// Enable direct connection (bypass replica set discovery).
    pub fn direct_connection(mut self, enabled: bool) -> Self {
        self.options.direct_connection = Some(enabled);
        self
    }

    /// Build the options.
    pub fn build(self) -> ConnectOptions {
        self.options
    }
}

/// Optional credentials used for a single authentication call.
///
/// Empty strings are treated the same as missing values.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// User to authenticate as.
    pub username: Option<String>,
    /// Password for `username`.
    pub password: Option<String>,
    /// Database the credentials are checked against.
    pub authdb: Option<String>,
}

impl Credentials {
    /// No credentials at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Username and password, checked against the selected database.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            authdb: None,
        }
    }

    /// Check credentials against a different database.
    pub fn with_authdb(mut self, authdb: impl Into<String>) -> Self {
        self.authdb = Some(authdb.into());
        self
    }

    /// The username, if non-empty.
    pub fn username(&self) -> Option<&str> {
        non_empty(&self.username)
    }

    /// The password, if non-empty.
    pub fn password(&self) -> Option<&str> {
        non_empty(&self.password)
    }

    /// The authentication database, if non-empty.
    pub fn authdb(&self) -> Option<&str> {
        non_empty(&self.authdb)
    }

    /// Authentication is requested when any field is set.
    pub fn is_requested(&self) -> bool {
        self.username().is_some() || self.password().is_some() || self.authdb().is_some()
    }

    /// Name of the database to authenticate against when selecting `db_name`.
    pub fn auth_database<'a>(&'a self, db_name: &'a str) -> &'a str {
        self.authdb().unwrap_or(db_name)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("authdb", &self.authdb)
            .finish()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
