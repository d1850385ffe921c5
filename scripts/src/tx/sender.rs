//! Transactions sent by the scripts

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, U256},
    providers::Provider,
    rpc::types::eth::{TransactionReceipt, TransactionRequest},
};
use tracing::info;

use crate::{
    errors::ScriptError,
    tx::{abi::ISocialToken::transferCall, client::RpcProvider},
};

/// Deploy a contract from its creation code, returning the deployed address
pub async fn send_deploy_transaction(
    contract: &str,
    code: Bytes,
    client: &RpcProvider,
) -> Result<Address, ScriptError> {
    // Build the tx
    let tx_request = TransactionRequest::default().with_deploy_code(code);

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    info!(
        "Pending {} deployment transaction... {}",
        contract,
        pending_tx.tx_hash()
    );

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    ensure_success(&receipt).map_err(ScriptError::ContractDeployment)?;
    info!(
        "{} deployment done on block: {:?}",
        contract, receipt.block_number
    );

    receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment(format!(
            "receipt of {} has no contract address",
            receipt.transaction_hash
        ))
    })
}

/// Transfer `amount` of `token` from the signer to `to`
pub async fn send_token_transfer(
    token: Address,
    to: Address,
    amount: U256,
    client: &RpcProvider,
) -> Result<TxHash, ScriptError> {
    // Build the tx
    let tx_request = TransactionRequest::default()
        .with_to(token)
        .with_call(&transferCall { to, amount })
        .with_value(U256::from(0));

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("Pending transfer transaction... {}", pending_tx.tx_hash());

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    ensure_success(&receipt).map_err(ScriptError::ContractInteraction)?;
    info!("Transfer tx done on block: {:?}", receipt.block_number);

    Ok(receipt.transaction_hash)
}

/// Reverted transactions are still mined, check their status
fn ensure_success(receipt: &TransactionReceipt) -> Result<(), String> {
    if receipt.status() {
        Ok(())
    } else {
        Err(format!("transaction {} reverted", receipt.transaction_hash))
    }
}
