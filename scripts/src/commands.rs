//! Implementations of the CLI commands

use std::{io, path::Path};

use alloy::primitives::Address;
use tracing::info;

use crate::{
    artifacts::ArtifactStore,
    cli::{DeployArgs, InspectArgs},
    constants::INITIAL_ALLOCATION_TX,
    deploy::{deploy_social_contracts, DeploymentParams, DeploymentReport},
    errors::ScriptError,
    output_writer::{read_output_file, write_output_file, OutputKeys},
    tx::{
        client::LiveClient,
        reader::{get_token_balance, get_total_supply},
    },
    units::format_token_amount,
};

/// Deploy the social contracts and record their addresses
pub async fn deploy_contracts(
    args: DeployArgs,
    client: LiveClient,
) -> Result<DeploymentReport, ScriptError> {
    let store = ArtifactStore::open(&args.artifacts)?;
    let params = args.params();

    let report = deploy_social_contracts(&client, &store, &params, &mut io::stdout()).await?;
    info!("Deployed with success");

    record_deployment(&args.output, &params, &report)?;
    info!("Deployment recorded in {}", args.output.display());

    Ok(report)
}

/// Write the addresses and the allocation transfer of `report` to the deployment record
pub fn record_deployment(
    file_path: &Path,
    params: &DeploymentParams,
    report: &DeploymentReport,
) -> Result<(), ScriptError> {
    write_output_file(
        file_path,
        OutputKeys::Deployment {
            key: &params.token_name,
        },
        report.token,
    )?;
    write_output_file(
        file_path,
        OutputKeys::Tx {
            key: &params.token_name,
            tx_key: INITIAL_ALLOCATION_TX,
        },
        report.transfer_tx,
    )?;
    write_output_file(
        file_path,
        OutputKeys::Deployment {
            key: &params.rewards_name,
        },
        report.rewards,
    )
}

/// Print the supply and balances of a recorded deployment
pub async fn inspect_deployment(args: InspectArgs, client: LiveClient) -> Result<(), ScriptError> {
    let token = read_deployed_address(&args.output, &args.token_name)?;
    let rewards = read_deployed_address(&args.output, &args.rewards_name)?;
    let signer = client.signer_address();

    let total_supply = get_total_supply(token, client.provider().clone()).await?;
    let signer_balance = get_token_balance(token, signer, client.provider().clone()).await?;
    let rewards_balance = get_token_balance(token, rewards, client.provider().clone()).await?;

    println!("{} at {}", args.token_name, token);
    println!(
        "  total supply: {}",
        format_token_amount(total_supply, args.decimals)?
    );
    println!(
        "  signer {} balance: {}",
        signer,
        format_token_amount(signer_balance, args.decimals)?
    );
    println!(
        "  {} {} balance: {}",
        args.rewards_name,
        rewards,
        format_token_amount(rewards_balance, args.decimals)?
    );

    Ok(())
}

/// Fetch a contract address from the deployment record
fn read_deployed_address(file_path: &Path, contract: &str) -> Result<Address, ScriptError> {
    read_output_file(file_path, OutputKeys::Deployment { key: contract })?
        .parse::<Address>()
        .map_err(|e| ScriptError::JsonOutputError(format!("{contract} address: {e}")))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{B256, U256};

    use super::*;

    #[test]
    fn recorded_deployment_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployed.json");
        let params = DeploymentParams::default();
        let report = DeploymentReport {
            signer: Address::repeat_byte(0x01),
            token: Address::repeat_byte(0x02),
            rewards: Address::repeat_byte(0x03),
            transfer_amount: U256::from(1u64),
            transfer_tx: B256::repeat_byte(0x04),
        };

        record_deployment(&path, &params, &report).unwrap();

        assert_eq!(
            read_deployed_address(&path, &params.token_name).unwrap(),
            report.token
        );
        assert_eq!(
            read_deployed_address(&path, &params.rewards_name).unwrap(),
            report.rewards
        );
        assert_eq!(
            read_output_file(
                &path,
                OutputKeys::Tx {
                    key: &params.token_name,
                    tx_key: INITIAL_ALLOCATION_TX,
                }
            )
            .unwrap(),
            format!("{:#x}", report.transfer_tx)
        );
    }
}
