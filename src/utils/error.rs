use alloy::primitives::TxHash;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("RPC transport error: {0}")]
    RpcError(#[from] alloy::transports::TransportError),

    #[error("Contract call failed: {0}")]
    ContractError(#[from] alloy::contract::Error),

    #[error("Transaction confirmation failed: {0}")]
    ReceiptError(#[from] alloy::providers::PendingTransactionError),

    #[error("Signer error: {0}")]
    SignerError(#[from] alloy::signers::local::LocalSignerError),

    #[error("Mint of '{name}' reverted (tx {tx_hash})")]
    MintRevertedError { name: String, tx_hash: TxHash },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, MigrateError>;
