use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// One domain as recorded in the source registry: the name at a given index
/// and the address currently holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub name: String,
    pub holder: Address,
}

impl DomainRecord {
    /// The key the destination registry is probed under and minted with.
    /// New registries only accept lowercased names.
    pub fn mint_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Outcome of a migration run, logged at the end and serialized in debug
/// output. `dest_supply_after - dest_supply_before` should equal `minted`
/// when nobody else minted during the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationSummary {
    pub source_supply: u64,
    pub dest_supply_before: u64,
    pub dest_supply_after: u64,
    pub minted: u64,
    pub skipped: u64,
    pub price: U256,
}

impl MigrationSummary {
    pub fn newly_minted(&self) -> u64 {
        self.dest_supply_after.saturating_sub(self.dest_supply_before)
    }
}
