//! Parameters and outcome of a deployment run

use alloy::primitives::{Address, TxHash, U256};

use crate::{
    constants::{
        COMMENT_REWARD, LIKE_REWARD, MAX_SUPPLY, POST_REWARD, SOCIAL_MEDIA_CONTRACT, SOCIAL_TOKEN,
        TOKEN_DECIMALS, TRANSFER_AMOUNT,
    },
    errors::ScriptError,
    units::{parse_token_amount, scale_whole_tokens},
};

/// Everything the deployment needs besides the network client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentParams {
    /// Artifact name of the token contract
    pub token_name: String,
    /// Artifact name of the rewards contract
    pub rewards_name: String,
    /// Max supply handed to the token constructor, in whole tokens
    pub max_supply: U256,
    /// Tokens credited per post
    pub post_reward: U256,
    /// Tokens credited per like
    pub like_reward: U256,
    /// Tokens credited per comment
    pub comment_reward: U256,
    /// Whole tokens moved from the signer to the rewards contract, as a decimal string
    pub transfer_amount: String,
    /// Decimals the token scales its amounts with
    pub token_decimals: u8,
}

impl Default for DeploymentParams {
    fn default() -> Self {
        Self {
            token_name: SOCIAL_TOKEN.to_string(),
            rewards_name: SOCIAL_MEDIA_CONTRACT.to_string(),
            max_supply: U256::from(MAX_SUPPLY),
            post_reward: U256::from(POST_REWARD),
            like_reward: U256::from(LIKE_REWARD),
            comment_reward: U256::from(COMMENT_REWARD),
            transfer_amount: TRANSFER_AMOUNT.to_string(),
            token_decimals: TOKEN_DECIMALS,
        }
    }
}

impl DeploymentParams {
    /// Transfer amount in the token's smallest denomination.
    ///
    /// Fails if the amount doesn't parse or is larger than the scaled max supply.
    pub fn scaled_transfer_amount(&self) -> Result<U256, ScriptError> {
        let amount = parse_token_amount(&self.transfer_amount, self.token_decimals)?;
        let supply = self
            .max_supply
            .checked_mul(scale_whole_tokens(U256::from(1u64), self.token_decimals))
            .ok_or_else(|| {
                ScriptError::InvalidParameters(format!(
                    "max supply {} overflows once scaled",
                    self.max_supply
                ))
            })?;

        if amount > supply {
            return Err(ScriptError::InvalidParameters(format!(
                "transfer amount {} exceeds the max supply {}",
                self.transfer_amount, self.max_supply
            )));
        }

        Ok(amount)
    }
}

/// Addresses and transfer produced by a successful deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReport {
    /// Account that deployed and funded the contracts
    pub signer: Address,
    /// Token contract address
    pub token: Address,
    /// Rewards contract address
    pub rewards: Address,
    /// Transferred amount, in the token's smallest denomination
    pub transfer_amount: U256,
    /// Hash of the initial allocation transfer
    pub transfer_tx: TxHash,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_transfer_half_the_supply() {
        let params = DeploymentParams::default();
        let amount = params.scaled_transfer_amount().unwrap();

        assert_eq!(
            amount * U256::from(2u64),
            scale_whole_tokens(params.max_supply, params.token_decimals)
        );
    }

    #[test]
    fn transfer_above_supply_is_rejected() {
        let params = DeploymentParams {
            transfer_amount: "1000000.5".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            params.scaled_transfer_amount(),
            Err(ScriptError::InvalidParameters(_))
        ));
    }
}
