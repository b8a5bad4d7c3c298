// Adapters layer: concrete implementations for external systems.

pub mod evm;

pub use evm::EvmRegistry;
