//! Block digests.
//!
//! A digest is the Blake3 hash of a block's canonical bytes, prefixed with a
//! domain separation tag. It is reproducible across runs and platforms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain separation prefix for block digests.
pub const DIGEST_DOMAIN: &[u8] = b"ticket-ledger/block-digest/v0";

/// Rendering of the genesis back-link, which is a sentinel rather than a digest.
pub const GENESIS_LINK: &str = "0";

/// A 32-byte block digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockDigest(pub [u8; 32]);

impl BlockDigest {
    /// Hash canonical block bytes under [`DIGEST_DOMAIN`].
    pub fn hash(canonical: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DIGEST_DOMAIN);
        hasher.update(canonical);
        Self(*hasher.finalize().as_bytes())
    }

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Full lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The zero digest. Never produced by [`BlockDigest::hash`] in practice.
    pub const ZERO: Self = Self([0u8; 32]);
}

/// Render an optional back-link, using [`GENESIS_LINK`] for `None`.
pub fn link_to_string(link: Option<&BlockDigest>) -> String {
    match link {
        Some(digest) => digest.to_hex(),
        None => GENESIS_LINK.to_string(),
    }
}

impl fmt::Debug for BlockDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockDigest({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for BlockDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for BlockDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for BlockDigest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for BlockDigest {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = slice.try_into()?;
        Ok(Self(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let h1 = BlockDigest::hash(b"block bytes");
        let h2 = BlockDigest::hash(b"block bytes");
        assert_eq!(h1, h2);
        assert_ne!(h1, BlockDigest::hash(b"block bytez"));
    }

    #[test]
    fn test_hash_is_domain_separated() {
        let plain = BlockDigest(*blake3::hash(b"block bytes").as_bytes());
        assert_ne!(BlockDigest::hash(b"block bytes"), plain);
    }

    #[test]
    fn test_hex_roundtrip() {
        let digest = BlockDigest::from_bytes([0x42; 32]);
        let recovered = BlockDigest::from_hex(&digest.to_hex()).unwrap();
        assert_eq!(digest, recovered);
    }

    #[test]
    fn test_from_hex_rejects_short_input() {
        assert!(BlockDigest::from_hex("abcd").is_err());
    }

    #[test]
    fn test_display_is_short_hex() {
        let digest = BlockDigest::from_bytes([0xab; 32]);
        assert_eq!(format!("{}", digest), "abababababababab");
        assert!(format!("{:?}", digest).starts_with("BlockDigest("));
    }

    #[test]
    fn test_genesis_link_rendering() {
        assert_eq!(link_to_string(None), "0");
        let digest = BlockDigest::from_bytes([0x01; 32]);
        assert_eq!(link_to_string(Some(&digest)), digest.to_hex());
    }
}
