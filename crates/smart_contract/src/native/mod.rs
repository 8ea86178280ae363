//! Native contracts module.
//!
//! This module provides the built-in native contracts for the Neo blockchain,
//! including NEO, GAS, Policy, and other system contracts.

pub mod contract_management;
pub mod crypto_lib;
pub mod fungible_token;
pub mod gas_token;
pub mod governance_types;
pub mod ledger_contract;
pub mod native_contract;
pub mod neo_token;
pub mod notary;
pub mod oracle_contract;
pub mod policy_contract;
pub mod role_management;
pub mod std_lib;
pub mod treasury;

pub use contract_management::ContractManagement;
pub use crypto_lib::CryptoLib;
pub use fungible_token::FungibleToken;
pub use gas_token::GasToken;
pub use ledger_contract::LedgerContract;
pub use native_contract::{NativeContract, NativeMethod};
pub use neo_token::NeoToken;
pub use notary::Notary;
pub use oracle_contract::{OracleContract, OracleRequest, OracleResponse};
pub use policy_contract::PolicyContract;
pub use role_management::{Role, RoleManagement};
pub use std_lib::StdLib;
pub use treasury::Treasury;

use neo_core::UInt160;
use std::collections::HashMap;

/// Registry for native contracts.
pub struct NativeRegistry {
    contracts: HashMap<UInt160, Box<dyn NativeContract>>,
}

impl NativeRegistry {
    /// Creates a new native contract registry.
    pub fn new() -> Self {
        let mut registry = Self {
            contracts: HashMap::new(),
        };

        // Register standard native contracts
        registry.register_standard_contracts();

        registry
    }

    /// Registers a native contract.
    pub fn register(&mut self, contract: Box<dyn NativeContract>) {
        self.contracts.insert(contract.hash(), contract);
    }

    /// Gets a native contract by hash.
    pub fn get(&self, hash: &UInt160) -> Option<&dyn NativeContract> {
        self.contracts.get(hash).map(|c| c.as_ref())
    }

    /// Checks if a contract hash is a native contract.
    pub fn is_native(&self, hash: &UInt160) -> bool {
        self.contracts.contains_key(hash)
    }

    /// Gets all native contract hashes.
    pub fn all_hashes(&self) -> Vec<UInt160> {
        self.contracts.keys().copied().collect()
    }

    /// Gets a native contract by its fixed protocol id.
    pub fn get_by_id(&self, id: i32) -> Option<&dyn NativeContract> {
        self.contracts.values().map(|c| c.as_ref()).find(|c| c.id() == id)
    }

    /// Removes and returns a native contract by hash, for callers that need
    /// to invoke it with a method taking `&mut ApplicationEngine` while the
    /// engine itself (which owns this registry) is also borrowed mutably.
    /// The caller is expected to `register` the contract back afterwards.
    pub fn take_contract_by_hash(&mut self, hash: &UInt160) -> Option<Box<dyn NativeContract>> {
        self.contracts.remove(hash)
    }

    /// Removes and returns a native contract by name. See
    /// [`Self::take_contract_by_hash`] for why this take/invoke/put-back
    /// shape exists.
    pub fn take_contract_by_name(&mut self, name: &str) -> Option<Box<dyn NativeContract>> {
        let hash = self
            .contracts
            .values()
            .find(|c| c.name() == name)
            .map(|c| c.hash())?;
        self.contracts.remove(&hash)
    }

    /// Iterates mutably over all registered contracts.
    pub fn contracts_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn NativeContract>> {
        self.contracts.values_mut()
    }

    /// Returns the native contracts active at the given block height, per
    /// their `active_in` hardfork gate and the supplied hardfork schedule.
    pub fn active_contracts(
        &self,
        hardforks: &neo_core::HardforkManager,
        block_index: u32,
    ) -> Vec<&dyn NativeContract> {
        self.contracts
            .values()
            .map(|c| c.as_ref())
            .filter(|c| match c.active_in() {
                None => true,
                Some(hardfork) => hardforks.is_enabled(hardfork, block_index),
            })
            .collect()
    }

    /// Registers standard Neo native contracts.
    fn register_standard_contracts(&mut self) {
        // Register ContractManagement contract
        self.register(Box::new(ContractManagement::new()));

        // Register StdLib contract
        self.register(Box::new(StdLib::new()));

        // Register CryptoLib contract
        self.register(Box::new(CryptoLib::new()));

        // Register LedgerContract
        self.register(Box::new(LedgerContract::new()));

        // Register NEO token contract
        self.register(Box::new(NeoToken::new()));

        // Register GAS token contract
        self.register(Box::new(GasToken::new()));

        // Register Policy contract
        self.register(Box::new(PolicyContract::new()));

        // Register RoleManagement contract
        self.register(Box::new(RoleManagement::new()));

        // Register Oracle contract
        self.register(Box::new(OracleContract::new()));

        // Register Notary contract (active from HF_Echidna)
        self.register(Box::new(Notary::new()));

        // Register Treasury contract (active from HF_Faun)
        self.register(Box::new(Treasury::new()));
    }
}

impl Default for NativeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_registry_creation() {
        let registry = NativeRegistry::new();

        // Check that standard contracts are registered
        let neo_hash = NeoToken::new().hash();
        let gas_hash = GasToken::new().hash();

        assert!(registry.is_native(&neo_hash));
        assert!(registry.is_native(&gas_hash));
        assert!(registry.get(&neo_hash).is_some());
        assert!(registry.get(&gas_hash).is_some());
    }

    #[test]
    fn test_native_registry_all_hashes() {
        let registry = NativeRegistry::new();
        let hashes = registry.all_hashes();

        // Should have at least NEO and GAS contracts
        assert!(hashes.len() >= 2);
    }

    #[test]
    fn test_non_native_contract() {
        let registry = NativeRegistry::new();
        let random_hash = UInt160::zero();

        // Assuming zero hash is not used by native contracts
        if !registry.is_native(&random_hash) {
            assert!(registry.get(&random_hash).is_none());
        }
    }

    #[test]
    fn test_get_by_id_covers_all_eleven_contracts() {
        let registry = NativeRegistry::new();
        for id in [-1, -2, -3, -4, -5, -6, -7, -8, -9, -10, -11] {
            assert!(registry.get_by_id(id).is_some(), "missing native contract id {}", id);
        }
    }

    #[test]
    fn test_notary_inactive_before_echidna() {
        let registry = NativeRegistry::new();
        let hardforks = neo_core::HardforkManager::mainnet();

        let active = registry.active_contracts(&hardforks, 0);
        assert!(!active.iter().any(|c| c.name() == "Notary"));
        assert!(!active.iter().any(|c| c.name() == "Treasury"));

        let active_at_echidna = registry.active_contracts(&hardforks, 7_300_000);
        assert!(active_at_echidna.iter().any(|c| c.name() == "Notary"));
        assert!(!active_at_echidna.iter().any(|c| c.name() == "Treasury"));

        let active_at_faun = registry.active_contracts(&hardforks, 8_200_000);
        assert!(active_at_faun.iter().any(|c| c.name() == "Treasury"));
    }
}
