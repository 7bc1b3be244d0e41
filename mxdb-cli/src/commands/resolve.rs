//! `mxdb resolve` command - Resolve a descriptor without connecting.

use mxdb_connect::Topology;

use crate::cli::ResolveArgs;
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the resolve command
pub async fn run(args: ResolveArgs) -> CliResult<()> {
    let topology = Topology::resolve(&args.descriptor, args.cluster.as_deref())?;

    output::header("Resolved descriptor");
    print_topology(&topology);
    output::newline();

    Ok(())
}

/// Print the topology kind and its endpoints
pub fn print_topology(topology: &Topology) {
    match topology {
        Topology::Standalone { uri } => {
            kv("Topology", "standalone");
            kv("Uri", uri);
        }
        Topology::Cluster(spec) => {
            kv("Topology", "replica set");
            kv("Replica set", spec.replica_set());
            kv("Host list", &spec.host_list());
            output::newline();
            output::section("Endpoints");
            for (i, endpoint) in spec.endpoints().iter().enumerate() {
                output::numbered_item(i + 1, endpoint);
            }
        }
    }
}
