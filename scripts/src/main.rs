use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use social_scripts::{
    cli::{exit_status, Cli},
    errors::ScriptError,
    tx::client::create_rpc_provider,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    dotenv().ok();

    let cli = Cli::parse();

    // Stdout only carries the deployment report
    tracing_subscriber::fmt()
        .pretty()
        .with_writer(std::io::stderr)
        .init();

    ExitCode::from(exit_status(run(cli).await, &mut std::io::stderr()))
}

/// Build the client and run the requested command
async fn run(cli: Cli) -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        command,
    } = cli;

    // Build our RPC client with signer
    let client = create_rpc_provider(&rpc_url, &priv_key).await?;

    command.run(client).await
}
