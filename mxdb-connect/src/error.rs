//! Error types for connection resolution and database selection.

use thiserror::Error;

/// Boxed error coming back from a driver collaborator.
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for connection operations.
pub type ConnectResult<T> = Result<T, ConnectError>;

/// Errors that can occur while resolving a descriptor or selecting a database.
#[derive(Error, Debug)]
pub enum ConnectError {
    /// Cluster descriptor with too few hosts or a malformed host token.
    #[error("invalid cluster hosts list: {0}")]
    InvalidClusterDescriptor(String),

    /// Standalone descriptor without an extractable host.
    #[error("invalid standalone mongodb url: {0}")]
    InvalidStandaloneDescriptor(String),

    /// Exactly one of username and password was supplied.
    #[error("missing username or password")]
    MissingCredentialField,

    /// The driver failed to construct a client.
    #[error("driver connection error: {0}")]
    DriverConnection(#[source] DriverError),

    /// The driver rejected the supplied credentials.
    #[error("driver authentication error: {0}")]
    DriverAuthentication(#[source] DriverError),
}

impl ConnectError {
    /// Create an invalid cluster descriptor error.
    pub fn invalid_cluster(message: impl Into<String>) -> Self {
        Self::InvalidClusterDescriptor(message.into())
    }

    /// Create an invalid standalone descriptor error.
    pub fn invalid_standalone(message: impl Into<String>) -> Self {
        Self::InvalidStandaloneDescriptor(message.into())
    }

    /// Wrap a client construction failure.
    pub fn connection<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DriverConnection(Box::new(err))
    }

    /// Wrap an authentication failure.
    pub fn authentication<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DriverAuthentication(Box::new(err))
    }

    /// Check if this error was raised while validating a descriptor.
    pub fn is_descriptor_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidClusterDescriptor(_) | Self::InvalidStandaloneDescriptor(_)
        )
    }

    /// Check if this error came from the driver.
    pub fn is_driver_error(&self) -> bool {
        matches!(
            self,
            Self::DriverConnection(_) | Self::DriverAuthentication(_)
        )
    }

    /// Check if this is an authentication failure.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, Self::DriverAuthentication(_))
    }
}
