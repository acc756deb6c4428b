use {
    crate::error::Error,
    bs58,
    solana_sdk::pubkey::Pubkey as SolanaPublicKey,
    std::{
        convert::{TryFrom, TryInto},
        fmt,
        str::FromStr,
    },
};

/// Represents a ed25519 public key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PublicKey::LEN]);

impl PublicKey {
    /// Byte length of a public key.
    pub const LEN: usize = 32;

    /// Returns a public key from the provided slice.
    pub fn new(slice: &[u8]) -> Result<PublicKey, Error> {
        PublicKey::try_from(slice)
    }

    /// Returns a public key from a base58-encoded string.
    pub fn from_base58(address: &str) -> Result<PublicKey, Error> {
        let decoded = bs58::decode(address)
            .into_vec()
            .map_err(|e| Error::InvalidAddress(format!("{}: {}", address, e)))?;

        PublicKey::try_from(decoded.as_slice())
    }

    /// Returns the raw bytes of the public key.
    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Returns the public key as a base58-encoded string.
    pub fn to_base58(self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Returns the public key as a solana public key object.
    pub fn to_solana_key(self) -> SolanaPublicKey {
        SolanaPublicKey::new_from_array(self.0)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; PublicKey::LEN] = slice.try_into().map_err(|_| {
            Error::InvalidAddress(format!(
                "expected a {} byte public key, received {} bytes",
                PublicKey::LEN,
                slice.len()
            ))
        })?;

        Ok(PublicKey(bytes))
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PublicKey::from_base58(s)
    }
}

impl From<[u8; PublicKey::LEN]> for PublicKey {
    fn from(bytes: [u8; PublicKey::LEN]) -> Self {
        PublicKey(bytes)
    }
}

impl From<SolanaPublicKey> for PublicKey {
    fn from(key: SolanaPublicKey) -> Self {
        PublicKey(key.to_bytes())
    }
}

impl From<PublicKey> for SolanaPublicKey {
    fn from(key: PublicKey) -> Self {
        key.to_solana_key()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}
