//! Extensions C# Compatibility Test Suite
//!
//! This module contains comprehensive tests that ensure full compatibility
//! with the C# Neo.Extensions implementation.

mod collections_tests;
mod encoding_tests;
mod error_handling_tests;
mod plugin_tests;
mod utilities_tests;
