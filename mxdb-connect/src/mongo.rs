//! Driver implementation backed by the official MongoDB driver.

use std::sync::Arc;

use async_trait::async_trait;
use bson::{Document, doc};
use mongodb::options::{ClientOptions, Credential, ServerAddress};
use mongodb::{Client, Database};
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::config::ConnectOptions;
use crate::driver::{ClientHandle, Connector, DatabaseHandle};

/// [`Connector`] creating [`mongodb::Client`]s.
///
/// Clients are created lazily: constructing one does not contact a server,
/// so unreachable hosts surface on the first operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

impl MongoConnector {
    /// Build driver options for a comma separated host list.
    pub fn client_options(
        &self,
        host_list: &str,
        replica_set: Option<&str>,
        options: &ConnectOptions,
    ) -> mongodb::error::Result<ClientOptions> {
        let hosts = host_list
            .split(',')
            .map(|host| ServerAddress::parse(host))
            .collect::<mongodb::error::Result<Vec<_>>>()?;

        let mut client_options = ClientOptions::default();
        client_options.hosts = hosts;
        client_options.repl_set_name = replica_set.map(str::to_string);
        apply_options(&mut client_options, options);

        Ok(client_options)
    }

    fn connect(&self, client_options: ClientOptions) -> mongodb::error::Result<MongoConnection> {
        let client = Client::with_options(client_options.clone())?;

        info!(
            hosts = ?client_options.hosts,
            replica_set = ?client_options.repl_set_name,
            "MongoDB client created"
        );

        Ok(MongoConnection {
            shared: Arc::new(Shared {
                client: RwLock::new(client),
                options: client_options,
            }),
        })
    }
}

impl Connector for MongoConnector {
    type Client = MongoConnection;
    type Error = mongodb::error::Error;

    fn standalone(
        &self,
        uri: &str,
        options: &ConnectOptions,
    ) -> mongodb::error::Result<MongoConnection> {
        self.connect(self.client_options(uri, None, options)?)
    }

    fn cluster(
        &self,
        host_list: &str,
        replica_set: &str,
        options: &ConnectOptions,
    ) -> mongodb::error::Result<MongoConnection> {
        self.connect(self.client_options(host_list, Some(replica_set), options)?)
    }
}

/// Copy the set pass-through options onto driver options.
fn apply_options(client_options: &mut ClientOptions, options: &ConnectOptions) {
    if let Some(ref app_name) = options.app_name {
        client_options.app_name = Some(app_name.clone());
    }

    if let Some(min_pool) = options.min_pool_size {
        client_options.min_pool_size = Some(min_pool);
    }

    if let Some(max_pool) = options.max_pool_size {
        client_options.max_pool_size = Some(max_pool);
    }

    if let Some(max_idle) = options.max_idle_time {
        client_options.max_idle_time = Some(max_idle);
    }

    if let Some(connect_timeout) = options.connect_timeout {
        client_options.connect_timeout = Some(connect_timeout);
    }

    if let Some(selection_timeout) = options.server_selection_timeout {
        client_options.server_selection_timeout = Some(selection_timeout);
    }

    if let Some(direct) = options.direct_connection {
        client_options.direct_connection = Some(direct);
    }
}

struct Shared {
    client: RwLock<Client>,
    options: ClientOptions,
}

/// A MongoDB client handle.
///
/// Successful authentication through any of its databases replaces the
/// underlying client with an authenticated one; databases looked up after
/// that use the new client. Cloning shares that state.
#[derive(Clone)]
pub struct MongoConnection {
    shared: Arc<Shared>,
}

impl MongoConnection {
    /// The current driver client.
    pub fn client(&self) -> Client {
        self.shared.client.read().clone()
    }

    /// The driver options this connection was built from, without credentials.
    pub fn options(&self) -> &ClientOptions {
        &self.shared.options
    }
}

impl ClientHandle for MongoConnection {
    type Database = MongoDatabase;

    fn database(&self, name: &str) -> MongoDatabase {
        MongoDatabase {
            database: self.client().database(name),
            shared: Arc::clone(&self.shared),
        }
    }
}

/// A database reached through a [`MongoConnection`].
#[derive(Clone)]
pub struct MongoDatabase {
    database: Database,
    shared: Arc<Shared>,
}

impl MongoDatabase {
    /// Get the underlying driver database.
    pub fn inner(&self) -> &Database {
        &self.database
    }

    /// Check the server is reachable by pinging it.
    pub async fn ping(&self) -> mongodb::error::Result<Document> {
        self.database.run_command(doc! { "ping": 1 }, None).await
    }
}

#[async_trait]
impl DatabaseHandle for MongoDatabase {
    type Error = mongodb::error::Error;

    fn name(&self) -> &str {
        self.database.name()
    }

    async fn authenticate(&self, username: &str, password: &str) -> mongodb::error::Result<()> {
        let mut credential = Credential::default();
        credential.username = Some(username.to_string());
        credential.password = Some(password.to_string());
        credential.source = Some(self.name().to_string());

        let mut options = self.shared.options.clone();
        options.credential = Some(credential);

        let client = Client::with_options(options)?;
        debug!(database = %self.name(), "Verifying credentials");
        client
            .database(self.name())
            .run_command(doc! { "ping": 1 }, None)
            .await?;

        *self.shared.client.write() = client;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn address(s: &str) -> ServerAddress {
        ServerAddress::parse(s).unwrap()
    }

    #[test]
    fn test_standalone_options() {
        let options = MongoConnector
            .client_options("localhost:27018", None, &ConnectOptions::default())
            .unwrap();

        assert_eq!(options.hosts, vec![address("localhost:27018")]);
        assert_eq!(options.repl_set_name, None);
        assert!(options.credential.is_none());
    }

    #[test]
    fn test_cluster_options() {
        let options = MongoConnector
            .client_options(
                "server1:27017,server2:27018,server3:27017",
                Some("rs0"),
                &ConnectOptions::default(),
            )
            .unwrap();

        assert_eq!(
            options.hosts,
            vec![
                address("server1:27017"),
                address("server2:27018"),
                address("server3:27017"),
            ]
        );
        assert_eq!(options.repl_set_name, Some("rs0".to_string()));
    }

    #[test]
    fn test_pass_through_options_applied() {
        let connect = ConnectOptions::builder()
            .app_name("svc")
            .max_pool_size(5)
            .connect_timeout(Duration::from_secs(2))
            .direct_connection(true)
            .build();

        let options = MongoConnector
            .client_options("localhost:27017", None, &connect)
            .unwrap();

        assert_eq!(options.app_name, Some("svc".to_string()));
        assert_eq!(options.max_pool_size, Some(5));
        assert_eq!(options.connect_timeout, Some(Duration::from_secs(2)));
        assert_eq!(options.direct_connection, Some(true));
    }

    #[test]
    fn test_out_of_range_port_is_driver_error() {
        let result =
            MongoConnector.client_options("localhost:99999", None, &ConnectOptions::default());
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_connection_is_lazy() {
        let connection = MongoConnector
            .standalone("localhost:27017", &ConnectOptions::default())
            .unwrap();

        let db = connection.database("mydb");
        assert_eq!(db.name(), "mydb");
        assert_eq!(connection.options().hosts, vec![address("localhost:27017")]);
    }
}
