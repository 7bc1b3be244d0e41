//! Integration tests for descriptor resolution through the facade crate.
//!
//! These run without a server: they stop at the resolved topology or at the
//! driver options the MongoDB connector would use.

use mxdb::descriptor::{HostToken, parse_hosts};
use mxdb::{ConnectError, ConnectOptions, Credentials, MongoConnector, Topology};
use pretty_assertions::assert_eq;

/// Bare hosts get the default port
#[test]
fn test_standalone_default_port() {
    let topology = Topology::resolve("localhost", None).unwrap();
    assert_eq!(
        topology,
        Topology::Standalone {
            uri: "localhost:27017".to_string()
        }
    );
}

/// Schemes are stripped and never reconstructed
#[test]
fn test_standalone_scheme_stripped() {
    let topology = Topology::resolve("mongodb://localhost:27018", None).unwrap();
    assert_eq!(topology.endpoints(), vec!["localhost:27018"]);
}

/// A full url resolves to its server, path and query dropped
#[test]
fn test_standalone_full_url() {
    let topology = Topology::resolve("mongodb://localhost:27017/mydb", None).unwrap();
    assert_eq!(topology.endpoints(), vec!["localhost:27017"]);
}

/// Replica set host lists keep their order
#[test]
fn test_cluster_host_list() {
    let topology = Topology::resolve("server1,server2:27018,server3", Some("cluster_name")).unwrap();

    match topology {
        Topology::Cluster(spec) => {
            assert_eq!(spec.replica_set(), "cluster_name");
            assert_eq!(
                spec.host_list(),
                "server1:27017,server2:27018,server3:27017"
            );
        }
        other => panic!("expected a cluster, got {:?}", other),
    }
}

/// Whitespace, commas and semicolons all separate hosts
#[test]
fn test_cluster_separators() {
    let topology = Topology::resolve("a:1; b:2\tc:3", Some("rs0")).unwrap();
    assert_eq!(topology.endpoints(), vec!["a:1", "b:2", "c:3"]);
}

/// Two hosts are not a replica set
#[test]
fn test_cluster_quorum() {
    let err = Topology::resolve("a,b", Some("cluster_name")).unwrap_err();
    assert!(matches!(err, ConnectError::InvalidClusterDescriptor(_)));
}

/// An empty standalone descriptor has no host
#[test]
fn test_empty_standalone() {
    let err = Topology::resolve("", None).unwrap_err();
    assert!(matches!(err, ConnectError::InvalidStandaloneDescriptor(_)));
}

/// Tokens that only partially match the grammar are rejected
#[test]
fn test_partial_tokens_rejected() {
    assert!(parse_hosts("a,:27017,c").is_err());
    assert!(parse_hosts("a,b:,c").is_err());
    assert_eq!(
        parse_hosts("a b").unwrap(),
        vec![HostToken::new("a", None), HostToken::new("b", None)]
    );
}

/// The resolved topology maps onto driver options
#[test]
fn test_cluster_driver_options() {
    let topology = Topology::resolve("server1,server2:27018,server3", Some("rs0")).unwrap();
    let Topology::Cluster(spec) = topology else {
        panic!("expected a cluster");
    };

    let options = MongoConnector
        .client_options(
            &spec.host_list(),
            Some(spec.replica_set()),
            &ConnectOptions::builder().app_name("integration").build(),
        )
        .unwrap();

    assert_eq!(options.hosts.len(), 3);
    assert_eq!(options.repl_set_name.as_deref(), Some("rs0"));
    assert_eq!(options.app_name.as_deref(), Some("integration"));
}

/// Credentials parse from configuration files
#[test]
fn test_credentials_config() {
    let creds: Credentials = toml::from_str(
        r#"
        username = "admin"
        password = "secret"
        authdb = "admin"
        "#,
    )
    .expect("Failed to parse credentials");

    assert!(creds.is_requested());
    assert_eq!(creds.auth_database("mydb"), "admin");
}
