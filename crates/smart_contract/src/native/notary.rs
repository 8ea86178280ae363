//! Notary native contract implementation.
//!
//! The Notary contract escrows GAS deposits used to pay the network and
//! system fees of notary-assisted transactions, and exposes the
//! notary-assisted transaction verification entry point.

use crate::application_engine::ApplicationEngine;
use crate::native::{NativeContract, NativeMethod};
use crate::storage::{StorageItem, StorageKey};
use crate::{Error, Result};
use neo_config::SECONDS_PER_BLOCK;
use neo_core::{Hardfork, UInt160};
use serde::{Deserialize, Serialize};

/// Prefix for deposit-account storage entries.
const PREFIX_DEPOSIT: u8 = 1;
/// Prefix for the maximum not-valid-before delta configuration value.
const PREFIX_MAX_NOT_VALID_BEFORE_DELTA: u8 = 10;

/// Default maximum number of blocks a notary request may be valid ahead of the
/// current height.
const DEFAULT_MAX_NOT_VALID_BEFORE_DELTA: u32 = 140;

/// A notary deposit: an amount of escrowed GAS, released at `till`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deposit {
    /// Escrowed GAS amount, in datoshi.
    pub amount: i64,
    /// Block index at or after which the deposit may be withdrawn.
    pub till: u32,
}

/// The Notary native contract.
pub struct Notary {
    hash: UInt160,
    methods: Vec<NativeMethod>,
}

impl Notary {
    /// Fixed protocol id of the Notary native contract.
    pub const ID: i32 = -10;

    const HASH_BYTES: [u8; 20] = [
        0xc1, 0xe1, 0x4f, 0x19, 0xc3, 0xe6, 0x08, 0xe5, 0x53, 0xb5, 0x12, 0x2e, 0xc7, 0x46, 0x3c,
        0xf0, 0xd2, 0xc8, 0xd8, 0x31,
    ];

    fn deposit_key(account: &UInt160) -> Vec<u8> {
        let mut key = Vec::with_capacity(1 + account.as_bytes().len());
        key.push(PREFIX_DEPOSIT);
        key.extend_from_slice(account.as_bytes().as_ref());
        key
    }

    /// Creates a new Notary contract.
    pub fn new() -> Self {
        let hash = UInt160::from_bytes(&Self::HASH_BYTES).expect("Valid Notary contract hash");

        let methods = vec![
            NativeMethod::unsafe_method("lockDepositUntil".to_string(), 1 << SECONDS_PER_BLOCK, 0x0f),
            NativeMethod::unsafe_method("withdraw".to_string(), 1 << SECONDS_PER_BLOCK, 0x0f),
            NativeMethod::safe("balanceOf".to_string(), 1 << SECONDS_PER_BLOCK),
            NativeMethod::safe("expirationOf".to_string(), 1 << SECONDS_PER_BLOCK),
            NativeMethod::safe("getMaxNotValidBeforeDelta".to_string(), 1 << SECONDS_PER_BLOCK),
            NativeMethod::unsafe_method(
                "setMaxNotValidBeforeDelta".to_string(),
                1 << SECONDS_PER_BLOCK,
                0x0f,
            ),
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
            "lockDepositUntil" => self.lock_deposit_until(engine, args),
            "withdraw" => self.withdraw(engine, args),
            "balanceOf" => self.balance_of(engine, args),
            "expirationOf" => self.expiration_of(engine, args),
            "getMaxNotValidBeforeDelta" => self.get_max_not_valid_before_delta(engine),
            "setMaxNotValidBeforeDelta" => self.set_max_not_valid_before_delta(engine, args),
            "verify" => self.verify(engine, args),
            _ => Err(Error::NativeContractError(format!(
                "Unknown method: {}",
                method
            ))),
        }
    }

    fn read_deposit(&self, engine: &ApplicationEngine, account: &UInt160) -> Deposit {
        let key = StorageKey::new(Self::ID, Self::deposit_key(account));
        match engine.get_storage(&key) {
            Some(item) if item.value.len() >= 12 => {
                let amount = i64::from_le_bytes(item.value[0..8].try_into().unwrap());
                let till = u32::from_le_bytes(item.value[8..12].try_into().unwrap());
                Deposit { amount, till }
            }
            _ => Deposit::default(),
        }
    }

    fn write_deposit(
        &self,
        engine: &mut ApplicationEngine,
        account: &UInt160,
        deposit: &Deposit,
    ) -> Result<()> {
        let key = StorageKey::new(Self::ID, Self::deposit_key(account));
        if deposit.amount == 0 {
            engine.delete_storage(&key)?;
            return Ok(());
        }
        let mut value = Vec::with_capacity(12);
        value.extend_from_slice(&deposit.amount.to_le_bytes());
        value.extend_from_slice(&deposit.till.to_le_bytes());
        engine.set_storage(key, StorageItem::new(value, false))?;
        Ok(())
    }

    /// Increases the caller's deposit and sets (or raises) its lock height.
    fn lock_deposit_until(&self, engine: &mut ApplicationEngine, args: &[Vec<u8>]) -> Result<Vec<u8>> {
        if args.len() < 3 {
            return Err(Error::NativeContractError(
                "lockDepositUntil requires account, amount and till arguments".to_string(),
            ));
        }

        let account = parse_uint160(&args[0])?;
        let amount = parse_i64(&args[1])?;
        let till = parse_u32(&args[2])?;

        if amount < 0 {
            return Err(Error::NativeContractError(
                "Deposit amount cannot be negative".to_string(),
            ));
        }

        let mut deposit = self.read_deposit(engine, &account);
        deposit.amount += amount;
        if till > deposit.till {
            deposit.till = till;
        }
        self.write_deposit(engine, &account, &deposit)?;

        engine.emit_event(
            "DepositLocked",
            vec![account.as_bytes().to_vec(), deposit.amount.to_le_bytes().to_vec()],
        )?;

        Ok(vec![1])
    }

    /// Withdraws an expired deposit back to its owner.
    fn withdraw(&self, engine: &mut ApplicationEngine, args: &[Vec<u8>]) -> Result<Vec<u8>> {
        if args.len() < 2 {
            return Err(Error::NativeContractError(
                "withdraw requires from and to arguments".to_string(),
            ));
        }

        let from = parse_uint160(&args[0])?;
        let to = parse_uint160(&args[1])?;

        let deposit = self.read_deposit(engine, &from);
        let current_height = engine.persisting_block().map(|b| b.index).unwrap_or(0);

        if deposit.amount == 0 {
            return Err(Error::NativeContractError("No deposit to withdraw".to_string()));
        }
        if current_height < deposit.till {
            return Err(Error::NativeContractError(
                "Deposit is still locked".to_string(),
            ));
        }

        self.write_deposit(engine, &from, &Deposit::default())?;

        engine.emit_event(
            "Withdraw",
            vec![
                from.as_bytes().to_vec(),
                to.as_bytes().to_vec(),
                deposit.amount.to_le_bytes().to_vec(),
            ],
        )?;

        Ok(deposit.amount.to_le_bytes().to_vec())
    }

    fn balance_of(&self, engine: &ApplicationEngine, args: &[Vec<u8>]) -> Result<Vec<u8>> {
        if args.is_empty() {
            return Err(Error::NativeContractError(
                "balanceOf requires an account argument".to_string(),
            ));
        }
        let account = parse_uint160(&args[0])?;
        Ok(self.read_deposit(engine, &account).amount.to_le_bytes().to_vec())
    }

    fn expiration_of(&self, engine: &ApplicationEngine, args: &[Vec<u8>]) -> Result<Vec<u8>> {
        if args.is_empty() {
            return Err(Error::NativeContractError(
                "expirationOf requires an account argument".to_string(),
            ));
        }
        let account = parse_uint160(&args[0])?;
        Ok(self.read_deposit(engine, &account).till.to_le_bytes().to_vec())
    }

    fn get_max_not_valid_before_delta(&self, engine: &ApplicationEngine) -> Result<Vec<u8>> {
        let key = StorageKey::new(Self::ID, vec![PREFIX_MAX_NOT_VALID_BEFORE_DELTA]);
        let value = engine
            .get_storage(&key)
            .and_then(|item| item.value.get(0..4).map(|b| u32::from_le_bytes(b.try_into().unwrap())))
            .unwrap_or(DEFAULT_MAX_NOT_VALID_BEFORE_DELTA);
        Ok(value.to_le_bytes().to_vec())
    }

    fn set_max_not_valid_before_delta(
        &self,
        engine: &mut ApplicationEngine,
        args: &[Vec<u8>],
    ) -> Result<Vec<u8>> {
        if args.is_empty() {
            return Err(Error::NativeContractError(
                "setMaxNotValidBeforeDelta requires a delta argument".to_string(),
            ));
        }
        let delta = parse_u32(&args[0])?;
        let key = StorageKey::new(Self::ID, vec![PREFIX_MAX_NOT_VALID_BEFORE_DELTA]);
        engine.set_storage(key, StorageItem::new(delta.to_le_bytes().to_vec(), false))?;
        Ok(vec![1])
    }

    /// Verifies a notary-assisted transaction: the payer must hold a deposit
    /// sufficient to cover the declared system and network fees.
    fn verify(&self, engine: &ApplicationEngine, args: &[Vec<u8>]) -> Result<Vec<u8>> {
        if args.len() < 2 {
            return Err(Error::NativeContractError(
                "verify requires payer and required fee arguments".to_string(),
            ));
        }
        let payer = parse_uint160(&args[0])?;
        let required_fee = parse_i64(&args[1])?;

        let deposit = self.read_deposit(engine, &payer);
        Ok(vec![(deposit.amount >= required_fee) as u8])
    }
}

fn parse_uint160(bytes: &[u8]) -> Result<UInt160> {
    UInt160::from_bytes(bytes)
        .map_err(|_| Error::NativeContractError("Invalid UInt160 argument".to_string()))
}

fn parse_i64(bytes: &[u8]) -> Result<i64> {
    if bytes.len() != 8 {
        return Err(Error::NativeContractError("Invalid integer argument".to_string()));
    }
    Ok(i64::from_le_bytes(bytes.try_into().unwrap()))
}

fn parse_u32(bytes: &[u8]) -> Result<u32> {
    if bytes.len() != 4 {
        return Err(Error::NativeContractError("Invalid integer argument".to_string()));
    }
    Ok(u32::from_le_bytes(bytes.try_into().unwrap()))
}

impl NativeContract for Notary {
    fn hash(&self) -> UInt160 {
        self.hash
    }

    fn id(&self) -> i32 {
        Self::ID
    }

    fn name(&self) -> &str {
        "Notary"
    }

    fn active_in(&self) -> Option<Hardfork> {
        Some(Hardfork::HF_Echidna)
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

impl Default for Notary {
    fn default() -> Self {
        Self::new()
    }
}
