//! RPC client construction

use alloy::{
    hex,
    network::{Ethereum, EthereumWallet},
    primitives::{Address, Bytes, TxHash, B256, U256},
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, Provider, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::info;

use crate::{
    deploy::DeployClient,
    errors::ScriptError,
    tx::sender::{send_deploy_transaction, send_token_transfer},
};

/// Re-export from alloy recommend filter
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// An alloy provider that uses a local private key to generate signatures
/// & interfaces with the RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// The RPC provider along with the address of the key it signs with
#[derive(Clone)]
pub struct LiveClient {
    /// Provider signing with the local key
    provider: RpcProvider,
    /// Address of the local key
    signer: Address,
}

impl LiveClient {
    /// The underlying provider, for read calls
    pub fn provider(&self) -> &RpcProvider {
        &self.provider
    }

    /// Address of the signing key
    pub fn signer_address(&self) -> Address {
        self.signer
    }
}

/// Build the RPC client with a signer from the hex encoded `priv_key`
pub async fn create_rpc_provider(rpc_url: &str, priv_key: &str) -> Result<LiveClient, ScriptError> {
    let key_bytes =
        hex::decode(priv_key.trim()).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let private_key = B256::try_from(key_bytes.as_slice()).map_err(|_| {
        ScriptError::ClientInitialization(format!(
            "private key must be 32 bytes, got {}",
            key_bytes.len()
        ))
    })?;
    // Create our signer
    let signer = PrivateKeySigner::from_bytes(&private_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let signer_address = signer.address();

    let wallet = EthereumWallet::from(signer);

    let url = rpc_url
        .parse::<Url>()
        .map_err(|e| ScriptError::ClientInitialization(format!("rpc url `{rpc_url}`: {e}")))?;

    // Create our provider with the rpc client + signer
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(url);

    // Fetch chain id
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    info!("Build client on chain ID: {}", chain_id);

    Ok(LiveClient {
        provider,
        signer: signer_address,
    })
}

impl DeployClient for LiveClient {
    async fn signer(&self) -> Result<Address, ScriptError> {
        Ok(self.signer)
    }

    async fn deploy(&self, contract: &str, code: Bytes) -> Result<Address, ScriptError> {
        send_deploy_transaction(contract, code, &self.provider).await
    }

    async fn transfer_tokens(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<TxHash, ScriptError> {
        send_token_transfer(token, to, amount, &self.provider).await
    }
}
