pub mod migrator;

pub use crate::domain::model::{DomainRecord, MigrationSummary};
pub use crate::domain::ports::{RegistryMinter, RegistryReader};
pub use crate::utils::error::Result;
