//! `OctetString` type for variable-length byte sequences.
//!
//! Octet strings back the opaque byte-valued RAN parameter elements (PLMN
//! identity, SST, SD). Once installed in a parameter tree they are never
//! mutated, so the type only exposes constructors and read accessors.

use std::fmt;

/// A variable-length sequence of octets (bytes).
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct OctetString {
    data: Vec<u8>,
}

impl OctetString {
    /// Creates a new empty `OctetString`.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an `OctetString` from a `Vec<u8>`.
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Creates an `OctetString` from a byte slice.
    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Creates an `OctetString` from an ASCII string.
    ///
    /// The E2SM-RC slice identifiers (SST, SD) and the PLMN identity are
    /// carried as fixed-format ASCII text in this schema.
    pub fn from_ascii(ascii: &str) -> Self {
        Self {
            data: ascii.as_bytes().to_vec(),
        }
    }

    /// Returns the underlying bytes as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of octets.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the string contains no octets.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes self and returns the underlying `Vec<u8>`.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Returns the octets as an uppercase hex string.
    pub fn to_hex_string(&self) -> String {
        self.data.iter().map(|b| format!("{b:02X}")).collect()
    }
}

impl fmt::Debug for OctetString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OctetString({})", self.to_hex_string())
    }
}

impl fmt::Display for OctetString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl From<Vec<u8>> for OctetString {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl From<&[u8]> for OctetString {
    fn from(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl AsRef<[u8]> for OctetString {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_empty() {
        let os = OctetString::new();
        assert!(os.is_empty());
        assert_eq!(os.len(), 0);
    }

    #[test]
    fn test_from_ascii() {
        let os = OctetString::from_ascii("00101");
        assert_eq!(os.as_slice(), b"00101");
        assert_eq!(os.len(), 5);
    }

    #[test]
    fn test_from_slice_owns_data() {
        let buf = vec![0x12, 0x34];
        let os = OctetString::from_slice(&buf);
        drop(buf);
        assert_eq!(os.as_slice(), &[0x12, 0x34]);
    }

    #[test]
    fn test_hex_formatting() {
        let os = OctetString::from_vec(vec![0xDE, 0xAD]);
        assert_eq!(os.to_hex_string(), "DEAD");
        assert_eq!(format!("{os:?}"), "OctetString(DEAD)");
    }
}
