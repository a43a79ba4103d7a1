//! Storage key abstraction for typed entity keys.

/// Trait for types that can be used as primary keys in the entity store.
///
/// Implementors serialize themselves to the byte representation used by the
/// storage backend. String-backed id newtypes use their UTF-8 bytes, which
/// keeps keys readable in debugging tools.
pub trait StorageKey: Clone + Send + Sync + 'static {
    /// Serialize this key to bytes for storage.
    fn storage_key(&self) -> Vec<u8>;

    /// Deserialize this key from stored bytes.
    fn from_storage_key(bytes: &[u8]) -> Result<Self, String>
    where
        Self: Sized;
}

impl StorageKey for String {
    fn storage_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn from_storage_key(bytes: &[u8]) -> Result<Self, String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| format!("Invalid UTF-8 in key: {}", e))
    }
}

impl StorageKey for i64 {
    fn storage_key(&self) -> Vec<u8> {
        // Big-endian so lexicographic ordering matches numeric ordering
        self.to_be_bytes().to_vec()
    }

    fn from_storage_key(bytes: &[u8]) -> Result<Self, String> {
        let arr: [u8; 8] = bytes
            .try_into()
            .map_err(|_| format!("Expected 8 bytes for i64 key, got {}", bytes.len()))?;
        Ok(i64::from_be_bytes(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_key_round_trip() {
        let key = "page_abc123".to_string();
        let bytes = key.storage_key();
        assert_eq!(String::from_storage_key(&bytes).unwrap(), key);
    }

    #[test]
    fn i64_key_preserves_order() {
        let a = 5i64.storage_key();
        let b = 100i64.storage_key();
        assert!(a < b);
    }
}
