//! Read calls against the deployed contracts

use alloy::primitives::{Address, U256};

use crate::{
    errors::ScriptError,
    tx::{abi::ISocialToken, client::RpcProvider},
};

/// Get the total supply of the token, in its smallest denomination
pub async fn get_total_supply(token: Address, client: RpcProvider) -> Result<U256, ScriptError> {
    // Build our contract
    let contract = ISocialToken::new(token, client);

    // Read the smart contract
    let total_supply = contract
        .totalSupply()
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(total_supply._0)
}

/// Get the token balance of `account`
pub async fn get_token_balance(
    token: Address,
    account: Address,
    client: RpcProvider,
) -> Result<U256, ScriptError> {
    let contract = ISocialToken::new(token, client);

    let balance = contract
        .balanceOf(account)
        .call()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    Ok(balance._0)
}
