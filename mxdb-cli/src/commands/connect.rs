//! `mxdb connect` command - Connect, authenticate and ping a database.

use mxdb_connect::{Credentials, DatabaseHandle, MongoConnector, Topology, select_database};
use tracing::debug;

use crate::cli::ConnectArgs;
use crate::commands::resolve::print_topology;
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output::{self, kv};

/// Run the connect command
pub async fn run(args: ConnectArgs) -> CliResult<()> {
    let config = Config::discover(args.config.as_deref())?;

    let descriptor = args
        .descriptor
        .or(config.connection.descriptor)
        .ok_or_else(|| {
            CliError::Config("no descriptor given (argument or connection.descriptor)".into())
        })?;
    let cluster = args.cluster.or(config.connection.cluster);
    let database = args.database.or(config.connection.database).ok_or_else(|| {
        CliError::Config("no database given (--database or connection.database)".into())
    })?;

    let credentials = Credentials {
        username: args.username.or(config.credentials.username),
        password: args.password.or(config.credentials.password),
        authdb: args.authdb.or(config.credentials.authdb),
    };

    let mut options = config.options;
    if args.app_name.is_some() {
        options.app_name = args.app_name;
    }
    if args.connect_timeout_ms.is_some() {
        options.connect_timeout_ms = args.connect_timeout_ms;
    }
    if args.server_selection_timeout_ms.is_some() {
        options.server_selection_timeout_ms = args.server_selection_timeout_ms;
    }
    let options = options.to_connect_options();

    let topology = Topology::resolve(&descriptor, cluster.as_deref())?;
    debug!(topology = %topology, ?credentials, "Connecting");

    output::header("Connecting");
    print_topology(&topology);
    kv("Database", &database);
    if credentials.is_requested() {
        kv("Auth database", credentials.auth_database(&database));
    }
    output::newline();

    let connection = topology.connect(&MongoConnector, &options)?;
    let db = select_database(&connection, &database, &credentials).await?;

    db.ping()
        .await
        .map_err(|e| CliError::Database(format!("ping '{}' failed: {}", db.name(), e)))?;

    output::success(&format!("Database '{}' is reachable", db.name()));
    Ok(())
}
