pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::evm::EvmRegistry;
pub use config::{CliConfig, FileConfig, MigrationConfig};
pub use core::migrator::Migrator;
pub use domain::model::{DomainRecord, MigrationSummary};
pub use domain::ports::{RegistryMinter, RegistryReader};
pub use utils::error::{MigrateError, Result};
