//! Definitions of errors that can occur during the execution of the deployment scripts

use thiserror::Error;

/// Errors that can occur during the execution of the deployment scripts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// Error when reading or writing the deployment record
    #[error("error writing json output: {0}")]
    JsonOutputError(String),
    /// Error when creating the client
    #[error("error during client init: {0}")]
    ClientInitialization(String),
    /// Error when resolving a compiled contract by name
    #[error("error looking up contract artifact: {0}")]
    ArtifactLookup(String),
    /// Deployment parameters that can't produce a valid deployment
    #[error("invalid deployment parameters: {0}")]
    InvalidParameters(String),
    /// Error deploying a contract
    #[error("error deploying contract: {0}")]
    ContractDeployment(String),
    /// Error writing the deployment report
    #[error("error writing deployment report: {0}")]
    ReportOutput(String),
    /// Error calling a contract method
    #[error("error interacting with contract: {0}")]
    ContractInteraction(String),
}
