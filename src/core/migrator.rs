use crate::core::{DomainRecord, MigrationSummary, RegistryMinter, RegistryReader, Result};
use alloy::primitives::Address;

/// Referrer passed to every mint. Migration mints credit nobody.
const NO_REFERRER: Address = Address::ZERO;

/// Copies every domain recorded in the source registry onto the destination,
/// skipping names the destination already resolves to a holder.
pub struct Migrator<S, D> {
    source: S,
    dest: D,
}

impl<S: RegistryReader, D: RegistryMinter> Migrator<S, D> {
    pub fn new(source: S, dest: D) -> Self {
        Self { source, dest }
    }

    /// Runs the full pass over the source registry. The first failed read or
    /// write aborts the whole run; a re-run resumes safely because every
    /// index is probed against the destination before minting.
    pub async fn run(&self) -> Result<MigrationSummary> {
        let source_supply = self.source.total_supply().await?;
        tracing::info!("Source registry supply: {source_supply}");

        let dest_supply_before = self.dest.total_supply().await?;
        tracing::info!("Destination registry supply before: {dest_supply_before}");

        // Read once; every mint in this run pays this amount, even if the
        // contract price changes mid-run.
        let price = self.dest.mint_price().await?;
        tracing::info!("Domain price in wei: {price}");

        let mut minted = 0;
        let mut skipped = 0;

        for id in 0..source_supply {
            let record = self.fetch_record(id).await?;
            tracing::info!("{} --> {} (source)", record.name, record.holder);

            // Probe under the same lowercased key the mint writes, so a
            // re-run observes its own earlier mints.
            let key = record.mint_key();
            let existing = self.dest.holder_of(&key).await?;

            if existing == Address::ZERO {
                self.dest
                    .mint(&key, record.holder, NO_REFERRER, price)
                    .await?;
                let confirmed = self.dest.holder_of(&key).await?;
                tracing::info!("{} --> {} (destination)", key, confirmed);
                minted += 1;
            } else {
                tracing::info!("{} already held by {}, skipping", key, existing);
                skipped += 1;
            }
        }

        let dest_supply_after = self.dest.total_supply().await?;
        tracing::info!(
            "Destination registry supply after: {dest_supply_after} (source: {source_supply})"
        );

        Ok(MigrationSummary {
            source_supply,
            dest_supply_before,
            dest_supply_after,
            minted,
            skipped,
            price,
        })
    }

    async fn fetch_record(&self, id: u64) -> Result<DomainRecord> {
        let name = self.source.name_by_id(id).await?;
        let holder = self.source.holder_of(&name).await?;
        Ok(DomainRecord { name, holder })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MigrateError;
    use alloy::primitives::U256;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct InMemoryRegistry {
        state: Arc<Mutex<State>>,
        price: U256,
    }

    #[derive(Default)]
    struct State {
        names: Vec<String>,
        holders: HashMap<String, Address>,
        referrers_seen: Vec<Address>,
    }

    impl InMemoryRegistry {
        fn new(price: u64) -> Self {
            Self {
                state: Arc::new(Mutex::new(State::default())),
                price: U256::from(price),
            }
        }

        async fn seed(&self, name: &str, holder: Address) {
            let mut state = self.state.lock().await;
            state.names.push(name.to_string());
            state.holders.insert(name.to_string(), holder);
        }

        async fn referrers_seen(&self) -> Vec<Address> {
            self.state.lock().await.referrers_seen.clone()
        }
    }

    #[async_trait]
    impl RegistryReader for InMemoryRegistry {
        async fn total_supply(&self) -> Result<u64> {
            Ok(self.state.lock().await.names.len() as u64)
        }

        async fn mint_price(&self) -> Result<U256> {
            Ok(self.price)
        }

        async fn name_by_id(&self, id: u64) -> Result<String> {
            self.state
                .lock()
                .await
                .names
                .get(id as usize)
                .cloned()
                .ok_or_else(|| MigrateError::ProcessingError {
                    message: format!("no domain at index {id}"),
                })
        }

        async fn holder_of(&self, name: &str) -> Result<Address> {
            let state = self.state.lock().await;
            Ok(state.holders.get(name).copied().unwrap_or(Address::ZERO))
        }
    }

    #[async_trait]
    impl RegistryMinter for InMemoryRegistry {
        async fn mint(
            &self,
            name: &str,
            holder: Address,
            referrer: Address,
            payment: U256,
        ) -> Result<()> {
            let mut state = self.state.lock().await;
            if state.holders.contains_key(name) {
                return Err(MigrateError::ProcessingError {
                    message: format!("domain '{name}' already exists"),
                });
            }
            if payment < self.price {
                return Err(MigrateError::ProcessingError {
                    message: "insufficient payment".to_string(),
                });
            }
            state.referrers_seen.push(referrer);
            state.names.push(name.to_string());
            state.holders.insert(name.to_string(), holder);
            Ok(())
        }
    }

    fn addr(n: u8) -> Address {
        Address::repeat_byte(n)
    }

    #[tokio::test]
    async fn empty_source_registry_is_a_noop() {
        let source = InMemoryRegistry::new(0);
        let dest = InMemoryRegistry::new(100);

        let summary = Migrator::new(source, dest).run().await.unwrap();

        assert_eq!(summary.source_supply, 0);
        assert_eq!(summary.minted, 0);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.dest_supply_before, summary.dest_supply_after);
    }

    #[tokio::test]
    async fn mints_carry_the_zero_referrer() {
        let source = InMemoryRegistry::new(0);
        source.seed("name", addr(1)).await;
        let dest = InMemoryRegistry::new(100);

        Migrator::new(source, dest.clone()).run().await.unwrap();

        assert_eq!(dest.referrers_seen().await, vec![Address::ZERO]);
    }

    #[tokio::test]
    async fn holder_is_preserved_under_lowercased_key() {
        let source = InMemoryRegistry::new(0);
        source.seed("Crypto", addr(7)).await;
        let dest = InMemoryRegistry::new(100);

        let summary = Migrator::new(source, dest.clone()).run().await.unwrap();

        assert_eq!(summary.minted, 1);
        assert_eq!(dest.holder_of("crypto").await.unwrap(), addr(7));
        assert_eq!(dest.holder_of("Crypto").await.unwrap(), Address::ZERO);
    }
}
