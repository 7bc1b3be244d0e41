//! Descriptor resolution and topology dispatch.
//!
//! [`resolve`] turns a raw descriptor into a client. It works in two steps:
//! the descriptor is first resolved into a [`Topology`] without touching the
//! driver, then the matching [`Connector`] constructor is called. A descriptor
//! that fails validation therefore never reaches the driver.

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::ConnectOptions;
use crate::descriptor::{self, HostToken};
use crate::driver::Connector;
use crate::error::{ConnectError, ConnectResult};

/// Minimum number of hosts in a replica set descriptor.
pub const MIN_CLUSTER_HOSTS: usize = 3;

/// A validated replica set: ordered `host:port` endpoints plus its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSpec {
    endpoints: Vec<String>,
    replica_set: String,
}

impl ClusterSpec {
    /// Create a cluster spec, enforcing the [`MIN_CLUSTER_HOSTS`] quorum.
    pub fn new(endpoints: Vec<String>, replica_set: impl Into<String>) -> ConnectResult<Self> {
        if endpoints.len() < MIN_CLUSTER_HOSTS {
            return Err(ConnectError::invalid_cluster(format!(
                "at least {} hosts required for a cluster, got {}",
                MIN_CLUSTER_HOSTS,
                endpoints.len()
            )));
        }

        Ok(Self {
            endpoints,
            replica_set: replica_set.into(),
        })
    }

    /// The normalized endpoints, in descriptor order.
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// The replica set name.
    pub fn replica_set(&self) -> &str {
        &self.replica_set
    }

    /// Endpoints joined with `,`, as handed to the driver.
    pub fn host_list(&self) -> String {
        self.endpoints.join(",")
    }
}

/// Where a descriptor points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topology {
    /// A single server.
    Standalone {
        /// Normalized `host:port` of the server.
        uri: String,
    },
    /// A replica set.
    Cluster(ClusterSpec),
}

impl Topology {
    /// Resolve a descriptor without connecting.
    ///
    /// A non-empty `cluster` selects replica set mode, where every token is
    /// parsed strictly and at least [`MIN_CLUSTER_HOSTS`] are required.
    /// Otherwise only the leading `[scheme://]host[:port]` of the first token
    /// is used, so full urls with a database path resolve to their server.
    pub fn resolve(descriptor: &str, cluster: Option<&str>) -> ConnectResult<Self> {
        match cluster.filter(|name| !name.is_empty()) {
            Some(replica_set) => Self::resolve_cluster(descriptor, replica_set),
            None => Self::resolve_standalone(descriptor),
        }
    }

    fn resolve_cluster(descriptor: &str, replica_set: &str) -> ConnectResult<Self> {
        let hosts = descriptor::parse_hosts(descriptor)
            .map_err(|e| ConnectError::invalid_cluster(e.to_string()))?;

        let endpoints = hosts.iter().map(HostToken::normalize).collect();
        let spec = ClusterSpec::new(endpoints, replica_set)?;

        debug!(
            replica_set = %spec.replica_set(),
            hosts = %spec.host_list(),
            "Resolved cluster descriptor"
        );
        Ok(Self::Cluster(spec))
    }

    fn resolve_standalone(descriptor: &str) -> ConnectResult<Self> {
        let mut tokens = descriptor::tokenize(descriptor);
        let first = tokens
            .next()
            .ok_or_else(|| ConnectError::invalid_standalone("no host found"))?;
        let first = HostToken::parse_prefix(first)
            .map_err(|e| ConnectError::invalid_standalone(e.to_string()))?;

        let ignored = tokens.count();
        if ignored > 0 {
            warn!(
                ignored,
                "Standalone descriptor names more than one host, using the first"
            );
        }

        let uri = first.normalize();
        debug!(uri = %uri, "Resolved standalone descriptor");
        Ok(Self::Standalone { uri })
    }

    /// Check whether this is a replica set.
    pub fn is_cluster(&self) -> bool {
        matches!(self, Self::Cluster(_))
    }

    /// Normalized endpoints of this topology.
    pub fn endpoints(&self) -> Vec<&str> {
        match self {
            Self::Standalone { uri } => vec![uri.as_str()],
            Self::Cluster(spec) => spec.endpoints().iter().map(String::as_str).collect(),
        }
    }

    /// Call the matching constructor on `connector`.
    pub fn connect<C>(&self, connector: &C, options: &ConnectOptions) -> ConnectResult<C::Client>
    where
        C: Connector,
    {
        let client = match self {
            Self::Standalone { uri } => connector
                .standalone(uri, options)
                .map_err(ConnectError::connection)?,
            Self::Cluster(spec) => connector
                .cluster(&spec.host_list(), spec.replica_set(), options)
                .map_err(ConnectError::connection)?,
        };

        info!(topology = %self, "Client created");
        Ok(client)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standalone { uri } => write!(f, "standalone {}", uri),
            Self::Cluster(spec) => {
                write!(f, "replica set {} [{}]", spec.replica_set(), spec.host_list())
            }
        }
    }
}

/// Resolve `descriptor` and construct a client for it.
///
/// With a non-empty `cluster` the descriptor is read as a replica set host
/// list; otherwise as a single server. `options` are passed through to the
/// connector unchanged.
///
/// ```rust,ignore
/// use mxdb_connect::{ConnectOptions, MongoConnector, resolve};
///
/// let options = ConnectOptions::default();
/// let standalone = resolve(&MongoConnector, "mongodb://localhost:27018", None, &options)?;
/// let cluster = resolve(&MongoConnector, "server1,server2:27018,server3", Some("rs0"), &options)?;
/// ```
pub fn resolve<C>(
    connector: &C,
    descriptor: &str,
    cluster: Option<&str>,
    options: &ConnectOptions,
) -> ConnectResult<C::Client>
where
    C: Connector,
{
    Topology::resolve(descriptor, cluster)?.connect(connector, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::mock::{Call, MockConnector};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_bare_host() {
        let connector = MockConnector::new();
        resolve(&connector, "localhost", None, &ConnectOptions::default()).unwrap();

        assert_eq!(
            connector.calls(),
            vec![Call::Standalone {
                uri: "localhost:27017".into()
            }]
        );
    }

    #[test]
    fn test_resolve_scheme_and_port() {
        let connector = MockConnector::new();
        resolve(
            &connector,
            "mongodb://localhost:27018",
            None,
            &ConnectOptions::default(),
        )
        .unwrap();

        assert_eq!(
            connector.calls(),
            vec![Call::Standalone {
                uri: "localhost:27018".into()
            }]
        );
    }

    #[test]
    fn test_resolve_cluster() {
        let connector = MockConnector::new();
        resolve(
            &connector,
            "server1,server2:27018,server3",
            Some("cluster_name"),
            &ConnectOptions::default(),
        )
        .unwrap();

        assert_eq!(
            connector.calls(),
            vec![Call::Cluster {
                host_list: "server1:27017,server2:27018,server3:27017".into(),
                replica_set: "cluster_name".into(),
            }]
        );
    }

    #[test]
    fn test_resolve_cluster_with_mixed_separators() {
        let topology = Topology::resolve(
            " mongodb://a:1 ;b, \n c:3 ,",
            Some("rs0"),
        )
        .unwrap();

        assert!(topology.is_cluster());
        assert_eq!(topology.endpoints(), vec!["a:1", "b:27017", "c:3"]);
    }

    #[test]
    fn test_cluster_requires_three_hosts() {
        let connector = MockConnector::new();
        let err = resolve(&connector, "a,b", Some("cluster_name"), &ConnectOptions::default())
            .unwrap_err();

        assert!(matches!(err, ConnectError::InvalidClusterDescriptor(_)));
        assert!(err.to_string().contains("at least 3 hosts required for a cluster"));
        assert!(connector.calls().is_empty());
    }

    #[test]
    fn test_cluster_rejects_malformed_token() {
        let err = Topology::resolve("a,b:port,c", Some("rs0")).unwrap_err();
        assert!(matches!(err, ConnectError::InvalidClusterDescriptor(_)));
    }

    #[test]
    fn test_empty_standalone_fails() {
        let connector = MockConnector::new();
        let err = resolve(&connector, "", None, &ConnectOptions::default()).unwrap_err();

        assert!(matches!(err, ConnectError::InvalidStandaloneDescriptor(_)));
        assert!(connector.calls().is_empty());
    }

    #[test]
    fn test_standalone_rejects_malformed_token() {
        let err = Topology::resolve("mongodb://:27017", None).unwrap_err();
        assert!(matches!(err, ConnectError::InvalidStandaloneDescriptor(_)));
    }

    #[test]
    fn test_standalone_uses_first_host() {
        let topology = Topology::resolve("a:1,b:2", None).unwrap();
        assert_eq!(
            topology,
            Topology::Standalone {
                uri: "a:1".into()
            }
        );
    }

    #[test]
    fn test_standalone_full_url() {
        let topology = Topology::resolve("mongodb://localhost:27017/mydb", None).unwrap();
        assert_eq!(topology.endpoints(), vec!["localhost:27017"]);

        let topology = Topology::resolve("mongodb://localhost:27018/?ssl=false", None).unwrap();
        assert_eq!(topology.endpoints(), vec!["localhost:27018"]);
    }

    #[test]
    fn test_standalone_ignores_later_tokens() {
        let topology = Topology::resolve("localhost other:abc", None).unwrap();
        assert_eq!(
            topology,
            Topology::Standalone {
                uri: "localhost:27017".into()
            }
        );
    }

    #[test]
    fn test_cluster_stays_strict_on_paths() {
        let err = Topology::resolve("mongodb://a:1/db,b,c", Some("rs0")).unwrap_err();
        assert!(matches!(err, ConnectError::InvalidClusterDescriptor(_)));

        let err = Topology::resolve("a,b,c:abc", Some("rs0")).unwrap_err();
        assert!(matches!(err, ConnectError::InvalidClusterDescriptor(_)));
    }

    #[test]
    fn test_empty_cluster_name_is_standalone() {
        let topology = Topology::resolve("localhost", Some("")).unwrap();
        assert!(!topology.is_cluster());
    }

    #[test]
    fn test_options_pass_through() {
        let connector = MockConnector::new();
        let options = ConnectOptions::builder().app_name("svc").build();
        let client = resolve(&connector, "localhost", None, &options).unwrap();
        assert_eq!(client.options, options);
    }

    #[test]
    fn test_driver_error_propagates() {
        let connector = MockConnector {
            refuse_connection: true,
            ..MockConnector::default()
        };
        let err = resolve(&connector, "localhost", None, &ConnectOptions::default()).unwrap_err();

        assert!(matches!(err, ConnectError::DriverConnection(_)));
        assert_eq!(err.to_string(), "driver connection error: connection refused");
    }

    #[test]
    fn test_cluster_spec_quorum() {
        let err = ClusterSpec::new(vec!["a:27017".into(), "b:27017".into()], "rs0").unwrap_err();
        assert!(err.is_descriptor_error());

        let spec = ClusterSpec::new(
            vec!["a:27017".into(), "b:27017".into(), "c:27017".into()],
            "rs0",
        )
        .unwrap();
        assert_eq!(spec.host_list(), "a:27017,b:27017,c:27017");
        assert_eq!(spec.replica_set(), "rs0");
    }

    #[test]
    fn test_topology_display() {
        let topology = Topology::resolve("a,b,c", Some("rs0")).unwrap();
        assert_eq!(
            topology.to_string(),
            "replica set rs0 [a:27017,b:27017,c:27017]"
        );
    }
}
