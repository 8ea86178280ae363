//! Binary Reader C# Compatibility Tests
//!
//! These tests ensure full compatibility with C# Neo's BinaryReader functionality.
//! Tests are based on the C# Neo.IO.BinaryReader test suite.

use neo_io::{BinaryReader, Error, MemoryReader, Result};

#[cfg(test)]
mod binary_reader_tests {
    use super::*;

    /// Test reading basic integer types (matches C# BinaryReader.ReadInt32 exactly)
    #[test]
    fn test_read_int32_compatibility() {
        // Test data matching C# test cases
        let test_cases = vec![
            (vec![0x00, 0x00, 0x00, 0x00], 0i32),
            (vec![0xFF, 0xFF, 0xFF, 0xFF], -1i32),
            (vec![0x01, 0x00, 0x00, 0x00], 1i32),
            (vec![0xFF, 0xFF, 0xFF, 0x7F], i32::MAX),
            (vec![0x00, 0x00, 0x00, 0x80], i32::MIN),
            (vec![0x39, 0x30, 0x00, 0x00], 12345i32),
        ];

        for (bytes, expected) in test_cases {
            let mut reader = MemoryReader::new(&bytes);
            let result = reader.read_i32().unwrap();
            assert_eq!(
                result, expected,
                "Failed to read i32 from bytes: {:?}",
                bytes
            );
        }
    }

    /// Test reading unsigned integers (matches C# BinaryReader.ReadUInt32 exactly)
    #[test]
    fn test_read_uint32_compatibility() {
        let test_cases = vec![
            (vec![0x00, 0x00, 0x00, 0x00], 0u32),
            (vec![0xFF, 0xFF, 0xFF, 0xFF], u32::MAX),
            (vec![0x01, 0x00, 0x00, 0x00], 1u32),
            (vec![0x39, 0x30, 0x00, 0x00], 12345u32),
        ];

        for (bytes, expected) in test_cases {
            let mut reader = MemoryReader::new(&bytes);
            let result = reader.read_u32().unwrap();
            assert_eq!(
                result, expected,
                "Failed to read u32 from bytes: {:?}",
                bytes
            );
        }
    }

    /// Test reading 64-bit integers (matches C# BinaryReader.ReadInt64 exactly)
    #[test]
    fn test_read_int64_compatibility() {
        let test_cases = vec![
            (vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], 0i64),
            (vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], -1i64),
            (vec![0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], 1i64),
            (
                vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F],
                i64::MAX,
            ),
            (
                vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80],
                i64::MIN,
            ),
        ];

        for (bytes, expected) in test_cases {
            let mut reader = MemoryReader::new(&bytes);
            let result = reader.read_i64().unwrap();
            assert_eq!(
                result, expected,
                "Failed to read i64 from bytes: {:?}",
                bytes
            );
        }
    }

    /// Test reading bytes (matches C# BinaryReader.ReadBytes exactly)
    #[test]
    fn test_read_bytes_compatibility() {
        let test_data = vec![0x01, 0x02, 0x03, 0x04, 0x05];
        let mut reader = MemoryReader::new(&test_data);

        // Read exact number of bytes
        let result = reader.read_bytes(3).unwrap();
        assert_eq!(result, vec![0x01, 0x02, 0x03]);

        // Read remaining bytes
        let result = reader.read_bytes(2).unwrap();
        assert_eq!(result, vec![0x04, 0x05]);

        // Attempting to read beyond end should error
        assert!(reader.read_bytes(1).is_err());
    }

    /// Test reading variable-length integers (matches C# BinaryReader.ReadVarInt exactly)
    #[test]
    fn test_read_var_int_compatibility() {
        // Test cases from C# Neo implementation
        let test_cases = vec![
            (vec![0x00], 0u64),
            (vec![0x01], 1u64),
            (vec![0xFC], 252u64),
            (vec![0xFD, 0xFD, 0x00], 253u64),
            (vec![0xFD, 0xFF, 0xFF], 65535u64),
            (vec![0xFE, 0x00, 0x00, 0x01, 0x00], 65536u64),
            (vec![0xFE, 0xFF, 0xFF, 0xFF, 0xFF], 4294967295u64),
            (
                vec![0xFF, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
                4294967296u64,
            ),
        ];

        for (bytes, expected) in test_cases {
            let mut reader = MemoryReader::new(&bytes);
            let result = reader.read_var_int(u64::MAX).unwrap();
            assert_eq!(
                result, expected,
                "Failed to read var_int from bytes: {:?}",
                bytes
            );
        }
    }

    /// Test reading variable-length strings (matches C# BinaryReader.ReadVarString exactly)
    #[test]
    fn test_read_var_string_compatibility() {
        // Test cases from C# Neo implementation
        let test_cases = vec![
            (vec![0x00], ""),
            // Short strings
            (vec![0x05, 0x48, 0x65, 0x6C, 0x6C, 0x6F], "Hello"),
            (vec![0x03, 0x4E, 0x65, 0x6F], "Neo"),
            (vec![0x06, 0xE2, 0x9C, 0x93, 0x4E, 0x65, 0x6F], "✓Neo"),
        ];

        for (bytes, expected) in test_cases {
            let mut reader = MemoryReader::new(&bytes);
            let result = reader.read_var_string(1000).unwrap();
            assert_eq!(
                result, expected,
                "Failed to read var_string from bytes: {:?}",
                bytes
            );
        }
    }

    /// Test reading boolean values (matches C# BinaryReader.ReadBoolean exactly)
    #[test]
    fn test_read_boolean_compatibility() {
        let test_cases = vec![
            (vec![0x00], false),
            (vec![0x01], true),
            (vec![0xFF], true), // Any non-zero value is true in C# Neo
        ];

        for (bytes, expected) in test_cases {
            let mut reader = MemoryReader::new(&bytes);
            let result = reader.read_boolean().unwrap();
            assert_eq!(
                result, expected,
                "Failed to read boolean from bytes: {:?}",
                bytes
            );
        }
    }

    /// Test error handling for insufficient data (matches C# behavior exactly)
    #[test]
    fn test_error_handling_compatibility() {
        // Test reading beyond buffer end
        let mut reader = MemoryReader::new(&[0x01, 0x02]);

        // This should succeed
        assert!(reader.read_u16().is_ok());

        // This should fail
        assert!(reader.read_u32().is_err());

        // Test var_int with incomplete data
        let mut reader = MemoryReader::new(&[0xFD, 0x01]); // Incomplete 2-byte var_int
        assert!(reader.read_var_int(u64::MAX).is_err());
    }

    /// Test reading arrays of data (matches C# BinaryReader array operations exactly)
    #[test]
    fn test_read_array_compatibility() {
        // Test reading multiple consecutive values
        let data = vec![
            0x01, 0x00, 0x00, 0x00, // int32: 1
            0x02, 0x00, 0x00, 0x00, // int32: 2
            0x03, 0x00, 0x00, 0x00, // int32: 3
        ];

        let mut reader = MemoryReader::new(&data);

        let val1 = reader.read_i32().unwrap();
        let val2 = reader.read_i32().unwrap();
        let val3 = reader.read_i32().unwrap();

        assert_eq!(val1, 1);
        assert_eq!(val2, 2);
        assert_eq!(val3, 3);
    }

    /// Test seeking and position tracking (matches C# BinaryReader behavior exactly)
    #[test]
    fn test_position_tracking_compatibility() {
        let data = vec![0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let mut reader = MemoryReader::new(&data);

        // Initial position should be 0
        assert_eq!(reader.position(), 0);

        // Read 2 bytes
        let _ = reader.read_u16().unwrap();
        assert_eq!(reader.position(), 2);

        // Read 4 bytes
        let _ = reader.read_u32().unwrap();
        assert_eq!(reader.position(), 6);

        // Read remaining 2 bytes
        let _ = reader.read_u16().unwrap();
        assert_eq!(reader.position(), 8);
    }

    /// Test reading floating point numbers (matches C# BinaryReader float operations exactly)
    #[test]
    fn test_read_float_compatibility() {
        // Test f32
        let f32_data = 1.23f32.to_le_bytes();
        let mut reader = MemoryReader::new(&f32_data);
        let result = reader.read_f32().unwrap();
        assert!((result - 1.23f32).abs() < f32::EPSILON);

        // Test f64
        let f64_data = 1.23456789f64.to_le_bytes();
        let mut reader = MemoryReader::new(&f64_data);
        let result = reader.read_f64().unwrap();
        assert!((result - 1.23456789f64).abs() < f64::EPSILON);
    }
}
