//! Database selection with optional authentication.

use tracing::{debug, info};

use crate::config::Credentials;
use crate::driver::{ClientHandle, DatabaseHandle};
use crate::error::{ConnectError, ConnectResult};

/// Return the `db_name` database of `connection`, authenticating first if
/// `credentials` ask for it.
///
/// Authentication is requested when any credential field is set. It runs
/// against `credentials.authdb`, or `db_name` when no authdb is given, and
/// needs both a username and a password; a lone username or password fails
/// with [`ConnectError::MissingCredentialField`] before the driver is called.
///
/// ```rust,ignore
/// use mxdb_connect::{Credentials, select_database};
///
/// let creds = Credentials::new("admin", "secret").with_authdb("admin");
/// let db = select_database(&connection, "mydb", &creds).await?;
/// ```
pub async fn select_database<C>(
    connection: &C,
    db_name: &str,
    credentials: &Credentials,
) -> ConnectResult<C::Database>
where
    C: ClientHandle,
{
    if credentials.is_requested() {
        let auth_db = credentials.auth_database(db_name);

        match (credentials.username(), credentials.password()) {
            (Some(username), Some(password)) => {
                debug!(database = %auth_db, username = %username, "Authenticating");
                connection
                    .database(auth_db)
                    .authenticate(username, password)
                    .await
                    .map_err(ConnectError::authentication)?;
                info!(database = %auth_db, username = %username, "Authenticated");
            }
            _ => return Err(ConnectError::MissingCredentialField),
        }
    }

    Ok(connection.database(db_name))
}
