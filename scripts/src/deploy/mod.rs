//! Deployment of the social token and its rewards contract

use std::io::Write;

use alloy::primitives::{Address, Bytes, TxHash, U256};
use tracing::info;

use crate::{artifacts::ContractLookup, errors::ScriptError, units::format_token_amount};

/// Deployment inputs and outputs
mod params;

pub use params::{DeploymentParams, DeploymentReport};

/// The network operations a deployment needs.
///
/// Every call is awaited to completion, a failure aborts the whole deployment.
#[allow(async_fn_in_trait)]
pub trait DeployClient {
    /// Account signing and paying for the transactions
    async fn signer(&self) -> Result<Address, ScriptError>;

    /// Send a contract creation transaction, returning the deployed address
    async fn deploy(&self, contract: &str, code: Bytes) -> Result<Address, ScriptError>;

    /// Send an ERC20 `transfer` from the signer
    async fn transfer_tokens(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, ScriptError>;
}

/// Deploy the token, deploy the rewards contract against it, then fund the
/// rewards contract.
///
/// One report line is written to `out` after each step. Nothing is rolled back
/// on failure: a token deployed before a failing step stays deployed.
pub async fn deploy_social_contracts<C, L, W>(
    client: &C,
    contracts: &L,
    params: &DeploymentParams,
    out: &mut W,
) -> Result<DeploymentReport, ScriptError>
where
    C: DeployClient,
    L: ContractLookup + ?Sized,
    W: Write,
{
    let transfer_amount = params.scaled_transfer_amount()?;

    // Token, held by the signer
    let token_factory = contracts.get_contract_factory(&params.token_name)?;
    let signer = client.signer().await?;
    info!("Deploying {} from {}", params.token_name, signer);
    let token = client
        .deploy(
            &params.token_name,
            token_factory.deploy_code((params.max_supply, signer)),
        )
        .await?;
    report(out, format_args!("{} deployed to: {}", params.token_name, token))?;

    // Rewards contract, needs the token address
    let rewards_factory = contracts.get_contract_factory(&params.rewards_name)?;
    info!("Deploying {} against token {}", params.rewards_name, token);
    let rewards = client
        .deploy(
            &params.rewards_name,
            rewards_factory.deploy_code((
                params.post_reward,
                params.like_reward,
                params.comment_reward,
                token,
            )),
        )
        .await?;
    report(
        out,
        format_args!("{} deployed to: {}", params.rewards_name, rewards),
    )?;

    // Initial allocation
    info!("Transferring {} tokens to {}", params.transfer_amount, rewards);
    let transfer_tx = client
        .transfer_tokens(token, rewards, transfer_amount)
        .await?;
    report(
        out,
        format_args!(
            "Transferred {} tokens to {}",
            format_token_amount(transfer_amount, params.token_decimals)?,
            params.rewards_name
        ),
    )?;

    Ok(DeploymentReport {
        signer,
        token,
        rewards,
        transfer_amount,
        transfer_tx,
    })
}

/// Write a single report line
fn report<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) -> Result<(), ScriptError> {
    writeln!(out, "{line}")
        .and_then(|_| out.flush())
        .map_err(|e| ScriptError::ReportOutput(e.to_string()))
}
