//! Main entrypoint for the inspect binary.

use anyhow::Result;
use clap::Parser;
use op_near_inspect::{init_tracing_subscriber, run, InspectCli};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let cli = InspectCli::parse();
    init_tracing_subscriber(cli.v)?;
    run(cli).await
}
