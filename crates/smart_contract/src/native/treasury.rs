//! Treasury native contract implementation.
//!
//! The Treasury contract is the destination for funds recovered by
//! `PolicyContract.recoverFund` from long-blocked NEP-17 accounts. It holds
//! no business logic beyond balance accounting and a committee-gated
//! verification entry point, mirroring the way GasToken accrues balances
//! without exposing arbitrary transfer-out.

use crate::application_engine::ApplicationEngine;
use crate::native::{NativeContract, NativeMethod};
use crate::storage::{StorageItem, StorageKey};
use crate::{Error, Result};
use neo_config::SECONDS_PER_BLOCK;
use neo_core::{Hardfork, UInt160};

/// Prefix for the single aggregate balance storage entry.
const PREFIX_BALANCE: u8 = 1;

/// The Treasury native contract.
pub struct Treasury {
    hash: UInt160,
    methods: Vec<NativeMethod>,
}

impl Treasury {
    /// Fixed protocol id of the Treasury native contract.
    pub const ID: i32 = -11;

    const HASH_BYTES: [u8; 20] = [
        0x6a, 0x2b, 0x5c, 0x3d, 0x94, 0xf0, 0x17, 0x22, 0xa8, 0xbe, 0x6e, 0xd1, 0x3b, 0x9c, 0x44,
        0x0e, 0xc7, 0x5f, 0x81, 0x2a,
    ];

    fn balance_key() -> Vec<u8> {
        vec![PREFIX_BALANCE]
    }

    /// Creates a new Treasury contract.
    pub fn new() -> Self {
        let hash = UInt160::from_bytes(&Self::HASH_BYTES).expect("Valid Treasury contract hash");

        let methods = vec![
            NativeMethod::safe("balance".to_string(), 1 << SECONDS_PER_BLOCK),
            NativeMethod::unsafe_method("receive".to_string(), 1 << SECONDS_PER_BLOCK, 0x0f),
            NativeMethod::safe("verify".to_string(), 1 << SECONDS_PER_BLOCK),
        ];

        Self { hash, methods }
    }

    fn invoke_method(
        &self,
        engine: &mut ApplicationEngine,
        method: &str,
        args: &[Vec<u8>],
    ) -> Result<Vec<u8>> {
        match method {
            "balance" => self.balance(engine),
            "receive" => self.receive(engine, args),
            "verify" => self.verify(engine, args),
            _ => Err(Error::NativeContractError(format!(
                "Unknown method: {}",
                method
            ))),
        }
    }

    fn read_balance(&self, engine: &ApplicationEngine) -> i64 {
        let key = StorageKey::new(Self::ID, Self::balance_key());
        match engine.get_storage(&key) {
            Some(item) if item.value.len() == 8 => i64::from_le_bytes(item.value.as_slice().try_into().unwrap()),
            _ => 0,
        }
    }

    fn write_balance(&self, engine: &mut ApplicationEngine, balance: i64) -> Result<()> {
        let key = StorageKey::new(Self::ID, Self::balance_key());
        engine.set_storage(key, StorageItem::new(balance.to_le_bytes().to_vec(), false))?;
        Ok(())
    }

    fn balance(&self, engine: &ApplicationEngine) -> Result<Vec<u8>> {
        Ok(self.read_balance(engine).to_le_bytes().to_vec())
    }

    /// Credits recovered funds to the treasury. Called only by
    /// PolicyContract.recoverFund, which already enforces the one-year lock
    /// and committee gating; this method simply accounts for the transfer.
    fn receive(&self, engine: &mut ApplicationEngine, args: &[Vec<u8>]) -> Result<Vec<u8>> {
        if args.is_empty() {
            return Err(Error::NativeContractError(
                "receive requires an amount argument".to_string(),
            ));
        }
        if args[0].len() != 8 {
            return Err(Error::NativeContractError("Invalid amount argument".to_string()));
        }
        let amount = i64::from_le_bytes(args[0].as_slice().try_into().unwrap());
        if amount < 0 {
            return Err(Error::NativeContractError(
                "Recovered amount cannot be negative".to_string(),
            ));
        }

        let balance = self.read_balance(engine).saturating_add(amount);
        self.write_balance(engine, balance)?;

        engine.emit_event("FundsRecovered", vec![amount.to_le_bytes().to_vec()])?;

        Ok(vec![1])
    }

    /// Committee-gated verification: the Treasury only authorises spends
    /// witnessed by the committee multi-signature account.
    fn verify(&self, engine: &ApplicationEngine, _args: &[Vec<u8>]) -> Result<Vec<u8>> {
        let authorised = engine.check_committee_witness().unwrap_or(false);
        Ok(vec![authorised as u8])
    }
}

impl NativeContract for Treasury {
    fn hash(&self) -> UInt160 {
        self.hash
    }

    fn id(&self) -> i32 {
        Self::ID
    }

    fn name(&self) -> &str {
        "Treasury"
    }

    fn active_in(&self) -> Option<Hardfork> {
        Some(Hardfork::HF_Faun)
    }

    fn methods(&self) -> &[NativeMethod] {
        &self.methods
    }

    fn invoke(
        &self,
        engine: &mut ApplicationEngine,
        method: &str,
        args: &[Vec<u8>],
    ) -> Result<Vec<u8>> {
        self.invoke_method(engine, method, args)
    }
}

impl Default for Treasury {
    fn default() -> Self {
        Self::new()
    }
}
