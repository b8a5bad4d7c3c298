use crate::utils::error::{MigrateError, Result};
use crate::utils::validation::{validate_url, Validate};
use alloy::primitives::Address;
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tld-migrate")]
#[command(about = "Re-mints domains from an old TLD registry onto a new one")]
pub struct CliConfig {
    /// Address of the registry being migrated from
    #[arg(long)]
    pub source: Option<Address>,

    /// Address of the registry being migrated to
    #[arg(long)]
    pub dest: Option<Address>,

    /// JSON-RPC endpoint of the network both registries live on
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Optional TOML file supplying the same settings (CLI flags win)
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

/// Settings read from a `--config` TOML file. Every field is optional; the
/// file only fills in what the command line left unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub source: Option<Address>,
    pub dest: Option<Address>,
    pub rpc_url: Option<String>,
}

impl FileConfig {
    pub fn from_path(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// The fully resolved, validated configuration a run starts from.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationConfig {
    pub source: Address,
    pub dest: Address,
    pub rpc_url: String,
    pub verbose: bool,
}

impl CliConfig {
    /// Merges command-line flags with the optional config file and applies
    /// defaults. Flags take precedence over file values.
    pub fn resolve(self) -> Result<MigrationConfig> {
        let file = match &self.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig::default(),
        };

        let source = self
            .source
            .or(file.source)
            .ok_or_else(|| MigrateError::MissingConfigError {
                field: "source".to_string(),
            })?;

        let dest = self
            .dest
            .or(file.dest)
            .ok_or_else(|| MigrateError::MissingConfigError {
                field: "dest".to_string(),
            })?;

        let rpc_url = self
            .rpc_url
            .or(file.rpc_url)
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let resolved = MigrationConfig {
            source,
            dest,
            rpc_url,
            verbose: self.verbose,
        };
        resolved.validate()?;
        Ok(resolved)
    }
}

impl Validate for MigrationConfig {
    fn validate(&self) -> Result<()> {
        validate_url("rpc_url", &self.rpc_url)?;

        if self.source == self.dest {
            return Err(MigrateError::InvalidConfigValueError {
                field: "dest".to_string(),
                value: self.dest.to_string(),
                reason: "source and destination registries must differ".to_string(),
            });
        }

        Ok(())
    }
}
