//! Definitions of CLI arguments and commands for deploy scripts

use std::{io::Write, path::PathBuf};

use alloy::primitives::U256;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::{deploy_contracts, inspect_deployment},
    constants::{
        COMMENT_REWARD, DEFAULT_ARTIFACTS_DIR, DEFAULT_OUTPUT_FILE, DEFAULT_RPC, LIKE_REWARD,
        MAX_SUPPLY, POST_REWARD, SOCIAL_MEDIA_CONTRACT, SOCIAL_TOKEN, TOKEN_DECIMALS,
        TRANSFER_AMOUNT,
    },
    deploy::DeploymentParams,
    errors::ScriptError,
    tx::client::LiveClient,
};

/// Scripts for deploying the SocialToken and SocialMediaContract contracts
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Private key of the deployer, hex encoded
    #[arg(short, long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC)]
    pub rpc_url: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the token and rewards contracts, then fund the rewards contract
    Deploy(DeployArgs),
    /// Print the balances of a recorded deployment
    Inspect(InspectArgs),
}

impl Command {
    /// Run the command
    pub async fn run(self, client: LiveClient) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => {
                info!("Deploying contracts...");
                deploy_contracts(args, client).await?;
                Ok(())
            }
            Command::Inspect(args) => {
                info!("Inspecting deployment...");
                inspect_deployment(args, client).await
            }
        }
    }
}

/// Exit status of a finished command, printing the error of a failed one to `err_out`
pub fn exit_status<W: Write>(result: Result<(), ScriptError>, err_out: &mut W) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err_out, "{e}");
            1
        }
    }
}

/// Deploy contracts
#[derive(Args)]
pub struct DeployArgs {
    /// Directory holding the compiled contract artifacts
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,
    /// Where to record the deployed addresses
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
    /// Artifact name of the token contract
    #[arg(long, default_value = SOCIAL_TOKEN)]
    pub token_name: String,
    /// Artifact name of the rewards contract
    #[arg(long, default_value = SOCIAL_MEDIA_CONTRACT)]
    pub rewards_name: String,
    /// Max supply of the token, in whole tokens
    #[arg(long, default_value_t = MAX_SUPPLY)]
    pub max_supply: u64,
    /// Tokens credited per post
    #[arg(long, default_value_t = POST_REWARD)]
    pub post_reward: u64,
    /// Tokens credited per like
    #[arg(long, default_value_t = LIKE_REWARD)]
    pub like_reward: u64,
    /// Tokens credited per comment
    #[arg(long, default_value_t = COMMENT_REWARD)]
    pub comment_reward: u64,
    /// Whole tokens transferred to the rewards contract
    #[arg(long, default_value = TRANSFER_AMOUNT)]
    pub transfer_amount: String,
    /// Decimals of the token
    #[arg(long, default_value_t = TOKEN_DECIMALS)]
    pub decimals: u8,
}

impl DeployArgs {
    /// The deployment parameters carried by the arguments
    pub fn params(&self) -> DeploymentParams {
        DeploymentParams {
            token_name: self.token_name.clone(),
            rewards_name: self.rewards_name.clone(),
            max_supply: U256::from(self.max_supply),
            post_reward: U256::from(self.post_reward),
            like_reward: U256::from(self.like_reward),
            comment_reward: U256::from(self.comment_reward),
            transfer_amount: self.transfer_amount.clone(),
            token_decimals: self.decimals,
        }
    }
}

/// Inspect a recorded deployment
#[derive(Args)]
pub struct InspectArgs {
    /// Deployment record written by `deploy`
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
    /// Artifact name of the token contract
    #[arg(long, default_value = SOCIAL_TOKEN)]
    pub token_name: String,
    /// Artifact name of the rewards contract
    #[arg(long, default_value = SOCIAL_MEDIA_CONTRACT)]
    pub rewards_name: String,
    /// Decimals of the token
    #[arg(long, default_value_t = TOKEN_DECIMALS)]
    pub decimals: u8,
}
