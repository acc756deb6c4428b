use {
    crate::{error::Error, key::public::PublicKey},
    ed25519_compact::*,
    solana_sdk::signer::keypair::Keypair as SolanaKeypair,
    std::{fmt, fs, path::Path},
    tracing::debug,
};

/// Represents a ed25519 private key.
#[derive(Copy, Clone)]
pub struct PrivateKey {
    keypair: KeyPair,
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &PrivateKey) -> bool {
        self.secret_key() == other.secret_key()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key())
            .finish()
    }
}

impl PrivateKey {
    /// Byte length of a keypair file's contents.
    pub const KEYPAIR_LEN: usize = 64;

    /// Returns a private key from a randomly generated seed.
    pub fn rand() -> PrivateKey {
        let seed = Seed::generate();
        let keypair = KeyPair::from_seed(seed);

        PrivateKey { keypair }
    }

    /// Returns a private key from the 64 bytes of a keypair, where the first
    /// 32 bytes are the secret seed and the remaining 32 bytes are the public key.
    ///
    /// The public half must match the key derived from the seed.
    pub fn from_bytes(bytes: &[u8]) -> Result<PrivateKey, Error> {
        if bytes.len() != Self::KEYPAIR_LEN {
            return Err(Error::InvalidKeypair(format!(
                "expected {} bytes, received {}",
                Self::KEYPAIR_LEN,
                bytes.len()
            )));
        }

        let seed = Seed::from_slice(&bytes[..32])
            .map_err(|e| Error::InvalidKeypair(format!("bad seed: {:?}", e)))?;
        let keypair = KeyPair::from_seed(seed);

        if keypair.pk[..] != bytes[32..] {
            return Err(Error::InvalidKeypair(
                "public key does not match secret seed".to_string(),
            ));
        }

        Ok(PrivateKey { keypair })
    }

    /// Loads a keypair file as written by `solana-keygen`: a JSON array of 64 bytes.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<PrivateKey, Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::KeypairNotFound(path.to_path_buf()));
        }

        debug!(path = %path.display(), "loading keypair");
        let contents = fs::read_to_string(path)?;
        let bytes: Vec<u8> = serde_json::from_str(&contents)?;

        PrivateKey::from_bytes(&bytes)
    }

    /// Returns the keypair as a JSON array, the format `solana-keygen` writes.
    pub fn to_json(&self) -> String {
        let bytes = self.secret_key();
        serde_json::Value::from(bytes.to_vec()).to_string()
    }

    /// Returns the public key corresponding to this private key.
    pub fn public_key(self) -> PublicKey {
        PublicKey::from(*self.keypair.pk)
    }

    /// Returns the raw bytes of the secret key, where the first 32 bytes are
    /// the secret seed and the remaining 32 bytes are the public key.
    pub fn secret_key(&self) -> [u8; 64] {
        *self.keypair.sk
    }

    /// Returns the seed as a base58-encoded string.
    pub fn to_base58(self) -> String {
        let seed = self.keypair.sk.seed();

        bs58::encode(seed.as_ref()).into_string()
    }

    /// Returns the key as a solana keypair for signing.
    pub fn to_solana_keypair(&self) -> Result<SolanaKeypair, Error> {
        SolanaKeypair::from_bytes(&self.secret_key())
            .map_err(|e| Error::InvalidKeypair(e.to_string()))
    }
}

/// Loads a keypair from a JSON keypair file.
pub fn load_keypair<P: AsRef<Path>>(path: P) -> Result<PrivateKey, Error> {
    PrivateKey::from_json_file(path)
}
