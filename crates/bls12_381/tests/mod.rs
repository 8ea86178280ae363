//! BLS12-381 C# Compatibility Test Suite
//!
//! This module contains comprehensive tests that ensure full compatibility
//! with the C# Neo.Cryptography.BLS12_381 implementation.

mod aggregation_tests;
mod keys_tests;
mod performance_tests;
mod serialization_tests;
mod signature_tests;
mod validation_tests;
