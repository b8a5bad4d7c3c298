use crate::utils::error::Result;
use alloy::primitives::{Address, U256};
use async_trait::async_trait;

/// Read-only surface of a TLD registry contract.
///
/// `holder_of` returns the zero address for names that have never been
/// minted; callers rely on that to detect absence.
#[async_trait]
pub trait RegistryReader: Send + Sync {
    async fn total_supply(&self) -> Result<u64>;
    async fn mint_price(&self) -> Result<U256>;
    async fn name_by_id(&self, id: u64) -> Result<String>;
    async fn holder_of(&self, name: &str) -> Result<Address>;
}

/// A registry that can additionally mint new domains for a holder.
///
/// `mint` must not resolve until the state change is confirmed: the caller's
/// next `holder_of` probe has to observe the new domain.
#[async_trait]
pub trait RegistryMinter: RegistryReader {
    async fn mint(
        &self,
        name: &str,
        holder: Address,
        referrer: Address,
        payment: U256,
    ) -> Result<()>;
}
