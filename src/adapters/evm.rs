use crate::domain::ports::{RegistryMinter, RegistryReader};
use crate::utils::error::{MigrateError, Result};
use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    sol,
};
use async_trait::async_trait;

sol! {
    #[sol(rpc)]
    interface ITldRegistry {
        function totalSupply() external view returns (uint256);
        function price() external view returns (uint256);
        function domainIdsNames(uint256 id) external view returns (string memory);
        function getDomainHolder(string memory domainName) external view returns (address);
        function mint(string memory domainName, address domainHolder, address referrer) external payable returns (uint256);
    }
}

/// A deployed TLD registry contract, seen through the minimal five-function
/// migration ABI. Reads are plain `eth_call`s; `mint` submits a signed,
/// value-bearing transaction and waits for the receipt.
pub struct EvmRegistry<P: Provider> {
    contract: ITldRegistry::ITldRegistryInstance<P>,
}

impl<P: Provider> EvmRegistry<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            contract: ITldRegistry::new(address, provider),
        }
    }

    pub fn address(&self) -> Address {
        *self.contract.address()
    }
}

#[async_trait]
impl<P: Provider> RegistryReader for EvmRegistry<P> {
    async fn total_supply(&self) -> Result<u64> {
        let supply = self.contract.totalSupply().call().await?;
        u64::try_from(supply).map_err(|_| MigrateError::ProcessingError {
            message: format!("total supply {supply} does not fit in u64"),
        })
    }

    async fn mint_price(&self) -> Result<U256> {
        Ok(self.contract.price().call().await?)
    }

    async fn name_by_id(&self, id: u64) -> Result<String> {
        Ok(self.contract.domainIdsNames(U256::from(id)).call().await?)
    }

    async fn holder_of(&self, name: &str) -> Result<Address> {
        Ok(self.contract.getDomainHolder(name.to_string()).call().await?)
    }
}

#[async_trait]
impl<P: Provider> RegistryMinter for EvmRegistry<P> {
    async fn mint(
        &self,
        name: &str,
        holder: Address,
        referrer: Address,
        payment: U256,
    ) -> Result<()> {
        tracing::debug!("Submitting mint for '{name}' with value {payment} wei");
        let pending = self
            .contract
            .mint(name.to_string(), holder, referrer)
            .value(payment)
            .send()
            .await?;

        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            return Err(MigrateError::MintRevertedError {
                name: name.to_string(),
                tx_hash: receipt.transaction_hash,
            });
        }

        tracing::debug!(
            "Mint for '{name}' confirmed in tx {}",
            receipt.transaction_hash
        );
        Ok(())
    }
}
