//! `mxdb version` command - Display version information.

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub async fn run() -> CliResult<()> {
    output::header("mxdb");

    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);
    kv("Default port", &mxdb_connect::DEFAULT_PORT.to_string());
    kv(
        "Replica set minimum",
        &format!("{} hosts", mxdb_connect::MIN_CLUSTER_HOSTS),
    );

    output::newline();

    Ok(())
}
