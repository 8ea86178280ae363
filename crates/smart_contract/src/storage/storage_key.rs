//! Storage key implementation for smart contract storage.

use crate::{Error, Result};
use neo_config::MAX_SCRIPT_SIZE;
use neo_io::Serializable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a key in the smart contract storage system.
///
/// The on-disk layout is `contract_id` (4 bytes, little-endian signed) followed
/// by the contract-defined key bytes: native contracts and deployed contracts
/// alike are addressed by their small integer ID, never by their 20-byte script
/// hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct StorageKey {
    /// The contract ID that owns this storage key.
    pub contract_id: i32,

    /// The key data.
    pub key: Vec<u8>,
}

impl StorageKey {
    /// Creates a new storage key.
    pub fn new(contract_id: i32, key: Vec<u8>) -> Self {
        Self { contract_id, key }
    }

    /// Creates a storage key from a contract ID and string key.
    pub fn from_string(contract_id: i32, key: &str) -> Self {
        Self::new(contract_id, key.as_bytes().to_vec())
    }

    /// Creates a storage key from a contract ID and integer key.
    pub fn from_int(contract_id: i32, key: i32) -> Self {
        Self::new(contract_id, key.to_le_bytes().to_vec())
    }

    /// Gets the size of the storage key in bytes.
    pub fn size(&self) -> usize {
        4 + // contract id
        self.key.len() // key data
    }

    /// Converts the key to a hex string.
    pub fn to_hex_string(&self) -> String {
        hex::encode(&self.key)
    }

    /// Creates a storage key from a hex string.
    pub fn from_hex_string(contract_id: i32, hex: &str) -> Result<Self> {
        let key = hex::decode(hex)
            .map_err(|e| Error::StorageError(format!("Invalid hex string: {}", e)))?;
        Ok(Self::new(contract_id, key))
    }

    /// Checks if this key has a specific prefix.
    pub fn has_prefix(&self, prefix: &[u8]) -> bool {
        self.key.starts_with(prefix)
    }

    /// Creates a new key with an additional suffix.
    pub fn with_suffix(&self, suffix: &[u8]) -> Self {
        let mut new_key = self.key.clone();
        new_key.extend_from_slice(suffix);
        Self::new(self.contract_id, new_key)
    }

    /// Creates a new key with an additional prefix.
    pub fn with_prefix(&self, prefix: &[u8]) -> Self {
        let mut new_key = prefix.to_vec();
        new_key.extend_from_slice(&self.key);
        Self::new(self.contract_id, new_key)
    }

    /// Gets the key as a string if it's valid UTF-8.
    pub fn as_string(&self) -> Option<String> {
        String::from_utf8(self.key.clone()).ok()
    }

    /// Gets the key as an integer if it's 4 bytes.
    pub fn as_int(&self) -> Option<i32> {
        if self.key.len() == 4 {
            Some(i32::from_le_bytes([
                self.key[0],
                self.key[1],
                self.key[2],
                self.key[3],
            ]))
        } else {
            None
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.contract_id, self.to_hex_string())
    }
}

impl Serializable for StorageKey {
    fn size(&self) -> usize {
        4 + // contract id
        1 + // key length prefix
        self.key.len() // key bytes
    }

    fn serialize(&self, writer: &mut neo_io::BinaryWriter) -> neo_io::Result<()> {
        writer.write_bytes(&self.contract_id.to_le_bytes())?;
        writer.write_var_bytes(&self.key)?;
        Ok(())
    }

    fn deserialize(reader: &mut neo_io::MemoryReader) -> neo_io::Result<Self> {
        let id_bytes = reader.read_bytes(4)?;
        let contract_id = i32::from_le_bytes(
            id_bytes
                .as_slice()
                .try_into()
                .map_err(|_| neo_io::Error::InvalidData("invalid contract id".to_string()))?,
        );
        let key = reader.read_var_bytes(MAX_SCRIPT_SIZE)?;

        Ok(StorageKey { contract_id, key })
    }
}

impl From<(i32, Vec<u8>)> for StorageKey {
    fn from((contract_id, key): (i32, Vec<u8>)) -> Self {
        Self::new(contract_id, key)
    }
}

impl From<(i32, &str)> for StorageKey {
    fn from((contract_id, key): (i32, &str)) -> Self {
        Self::from_string(contract_id, key)
    }
}

impl From<(i32, i32)> for StorageKey {
    fn from((contract_id, key): (i32, i32)) -> Self {
        Self::from_int(contract_id, key)
    }
}
