// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! # neo-rs
//!
//! Top-level facade crate for the Neo N3 NeoVM and application engine.
//!
//! This crate does not implement execution logic itself; it wires together the
//! member crates of the workspace (core types, cryptography, the VM, and the
//! smart contract engine) and re-exports the surface a host embedding the
//! engine needs, the way `neo-smart-contract` re-exports the pieces of
//! `neo-core` and `neo-vm` its own API is built from.
//!
//! ## Example
//!
//! ```rust,no_run
//! use neo_rs::{ApplicationEngine, TriggerType};
//!
//! let mut engine = ApplicationEngine::new(TriggerType::Application, 20_000_000);
//! ```

pub use neo_core::{
    Hardfork, HardforkManager, NeoSystem, Signer, Transaction, UInt160, UInt256, Witness,
    WitnessScope,
};
pub use neo_cryptography::{ECCurve, ECPoint};
pub use neo_persistence::Storage;
pub use neo_smart_contract::{
    application_engine::ApplicationEngine,
    native::{NativeContract, NativeRegistry},
    Error as SmartContractError,
};
pub use neo_vm::TriggerType;

use thiserror::Error;

/// Errors surfaced by the facade crate itself.
///
/// Execution errors from the VM and smart contract layers propagate through
/// their own error types ([`SmartContractError`], [`neo_vm::Error`]); this
/// type only covers concerns that belong to assembling and configuring the
/// engine from the embedding application's side.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("smart contract error: {0}")]
    SmartContract(#[from] neo_smart_contract::Error),
}

/// Convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns the native contracts active at `block_index` under `hardforks`,
/// for hosts that need to inspect what is reachable before invoking a
/// script (e.g. to decide whether a notary-assisted transaction is valid
/// yet).
///
/// [`ApplicationEngine::new`] already registers the classic native
/// contracts on construction; this helper exposes the hardfork-gated view
/// from [`NativeRegistry`] for contracts, like Notary and Treasury, whose
/// availability depends on chain height.
pub fn active_native_contracts(hardforks: &HardforkManager, block_index: u32) -> Vec<String> {
    let registry = NativeRegistry::new();
    registry
        .active_contracts(hardforks, block_index)
        .into_iter()
        .map(|c| c.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_tracks_the_requested_gas_limit() {
        let engine = ApplicationEngine::new(TriggerType::Application, 10_000_000);
        assert_eq!(engine.gas_limit(), 10_000_000);
        assert_eq!(engine.gas_consumed(), 0);
    }
}
