//! # Simulated Kyber KEM with shared-secret visualization data
//!
//! This crate walks through the shape of a post-quantum key encapsulation
//! exchange (key generation, encapsulation, decapsulation) and derives
//! chart-ready statistics from the resulting shared secret: Shannon entropy,
//! an 8x8 nibble heatmap, a size comparison, 3D byte triplets and a nibble
//! frequency table.
//!
//! **This is not a real KEM.** Keys and ciphertexts are random bytes with no
//! mathematical structure and the shared secret is `H(message || public_key)`.
//! Anyone holding the message and the public key can derive it; decapsulation
//! ignores both the secret key and the ciphertext.
//!
//! ## Example
//! ```rust
//! use kemviz::{params::Demo, KemVizError, SimulatedKem};
//!
//! fn main() -> Result<(), KemVizError> {
//!     let kem = SimulatedKem::<Demo>::new();
//!     let keypair = kem.generate_keypair()?;
//!     let (ct, ss1) = kem.encapsulate(keypair.public_key(), "hello")?;
//!     let ss2 = kem.decapsulate(&ct, keypair.secret_key(), "hello", keypair.public_key());
//!
//!     assert_eq!(ss1, ss2);
//!     Ok(())
//! }
//! ```
use std::fmt;
use std::marker::PhantomData;

use rand::RngCore;
use serde::{Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

pub mod algorithm;
pub mod analysis;
pub mod config;
pub mod crypto;
pub mod error;
pub mod params;
pub mod session;

pub use analysis::Analysis;
pub use config::DemoConfig;
pub use crypto::hash::DigestAlgorithm;
pub use error::KemVizError;
pub use session::{Exchange, Session};

use params::{Demo, KemParams};

#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PublicKey {
    bytes: Vec<u8>,
}

#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    bytes: Vec<u8>,
}

/// Lowercase hex encoding of a 256-bit digest.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SharedSecret(String);

impl PublicKey {
    pub fn from_bytes<P: KemParams>(bytes: Vec<u8>) -> Result<Self, KemVizError> {
        if bytes.len() != P::PK_SIZE {
            return Err(KemVizError::KeyLengthError {
                expected: P::PK_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(PublicKey { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl SecretKey {
    pub fn from_bytes<P: KemParams>(bytes: Vec<u8>) -> Result<Self, KemVizError> {
        if bytes.len() != P::SK_SIZE {
            return Err(KemVizError::KeyLengthError {
                expected: P::SK_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(SecretKey { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl Ciphertext {
    pub fn from_bytes<P: KemParams>(bytes: Vec<u8>) -> Result<Self, KemVizError> {
        if bytes.len() != P::CT_SIZE {
            return Err(KemVizError::CiphertextLengthError {
                expected: P::CT_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Ciphertext { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl SharedSecret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the hex string in bytes (always 64 for a 256-bit digest).
    pub fn byte_len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl Serialize for Ciphertext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// A public/secret key pair. Regenerating replaces both halves at once.
#[derive(Debug)]
pub struct KeyPair {
    public_key: PublicKey,
    secret_key: SecretKey,
}

impl KeyPair {
    pub fn new(public_key: PublicKey, secret_key: SecretKey) -> Self {
        KeyPair { public_key, secret_key }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Rebuilds a key pair from the hex printed by a previous key generation,
    /// checking both halves against the sizes of `P`.
    pub fn from_hex<P: KemParams>(public_key: &str, secret_key: &str) -> Result<Self, KemVizError> {
        let public_key = PublicKey::from_bytes::<P>(hex::decode(public_key.trim())?)?;
        let secret_key = SecretKey::from_bytes::<P>(hex::decode(secret_key.trim())?)?;
        Ok(KeyPair::new(public_key, secret_key))
    }
}

pub struct SimulatedKem<P: KemParams> {
    digest: DigestAlgorithm,
    _phantom: PhantomData<P>,
}

impl<P: KemParams> Default for SimulatedKem<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: KemParams> SimulatedKem<P> {
    pub fn new() -> Self {
        SimulatedKem {
            digest: DigestAlgorithm::default(),
            _phantom: PhantomData,
        }
    }

    pub fn with_digest(digest: DigestAlgorithm) -> Self {
        SimulatedKem {
            digest,
            _phantom: PhantomData,
        }
    }

    pub fn digest(&self) -> DigestAlgorithm {
        self.digest
    }

    pub fn generate_keypair(&self) -> Result<KeyPair, KemVizError> {
        algorithm::generate_keypair::<P>()
    }

    pub fn generate_keypair_with_rng(&self, rng: &mut dyn RngCore) -> KeyPair {
        algorithm::generate_keypair_with_rng::<P>(rng)
    }

    pub fn encapsulate(&self, pk: &PublicKey, message: &str) -> Result<(Ciphertext, SharedSecret), KemVizError> {
        algorithm::encapsulate::<P>(self.digest, pk, message)
    }

    pub fn encapsulate_with_rng(
        &self,
        pk: &PublicKey,
        message: &str,
        rng: &mut dyn RngCore,
    ) -> Result<(Ciphertext, SharedSecret), KemVizError> {
        algorithm::encapsulate_with_rng::<P>(self.digest, pk, message, rng)
    }

    pub fn decapsulate(&self, ct: &Ciphertext, sk: &SecretKey, message: &str, pk: &PublicKey) -> SharedSecret {
        algorithm::decapsulate(self.digest, ct, sk, message, pk)
    }

    pub fn derive_shared_secret(&self, message: &str, pk: &PublicKey) -> SharedSecret {
        algorithm::derive_shared_secret(self.digest, message, pk)
    }
}

/// Generates a 32-byte/32-byte key pair from the operating system's RNG.
pub fn generate_keypair() -> Result<KeyPair, KemVizError> {
    SimulatedKem::<Demo>::new().generate_keypair()
}

/// Returns a fresh 64-byte random ciphertext and `SHA-256(message || pk)`.
pub fn encapsulate(pk: &PublicKey, message: &str) -> Result<(Ciphertext, SharedSecret), KemVizError> {
    SimulatedKem::<Demo>::new().encapsulate(pk, message)
}

pub fn decapsulate(ct: &Ciphertext, sk: &SecretKey, message: &str, pk: &PublicKey) -> SharedSecret {
    SimulatedKem::<Demo>::new().decapsulate(ct, sk, message, pk)
}

pub fn derive_shared_secret(message: &str, pk: &PublicKey) -> SharedSecret {
    algorithm::derive_shared_secret(DigestAlgorithm::Sha256, message, pk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Kyber512Sized;

    #[test]
    fn demo_key_exchange() {
        let keypair = generate_keypair().expect("Keypair generation failed");
        let (ciphertext, shared_secret_bob) = encapsulate(keypair.public_key(), "hello").expect("Encapsulation failed");
        let shared_secret_alice = decapsulate(&ciphertext, keypair.secret_key(), "hello", keypair.public_key());

        assert_eq!(shared_secret_alice, shared_secret_bob, "Shared secrets do not match!");
        assert_eq!(ciphertext.len(), 64);
        assert_eq!(shared_secret_alice.byte_len(), 64);
    }

    #[test]
    fn from_bytes_validates_lengths() {
        assert!(PublicKey::from_bytes::<Demo>(vec![0u8; 32]).is_ok());
        assert!(matches!(
            SecretKey::from_bytes::<Demo>(vec![0u8; 16]),
            Err(KemVizError::KeyLengthError { expected: 32, actual: 16 })
        ));
        assert!(matches!(
            Ciphertext::from_bytes::<Kyber512Sized>(vec![0u8; 64]),
            Err(KemVizError::CiphertextLengthError { expected: 768, actual: 64 })
        ));
    }

    #[test]
    fn keys_render_as_lowercase_hex() {
        let pk = PublicKey::from_bytes::<Demo>(vec![0xab; 32]).expect("valid key");
        assert_eq!(pk.to_hex(), "ab".repeat(32));
        assert_eq!(serde_json::to_string(&pk).expect("serialize"), format!("\"{}\"", "ab".repeat(32)));
    }

    #[test]
    fn derive_matches_sha256_of_concatenation() {
        let pk = PublicKey::from_bytes::<Demo>(vec![0u8; 32]).expect("valid key");
        let expected = crypto::hash::digest_hex(DigestAlgorithm::Sha256, &[b"hello".as_slice(), &[0u8; 32]]);
        assert_eq!(derive_shared_secret("hello", &pk).as_str(), expected);
    }

    #[test]
    fn from_hex_rejects_bad_hex() {
        let err = KeyPair::from_hex::<Demo>(&"zz".repeat(32), &"00".repeat(32)).unwrap_err();
        assert!(matches!(err, KemVizError::InvalidHex(_)));

        let err = KeyPair::from_hex::<Demo>(&"00".repeat(32), "abc").unwrap_err();
        assert!(matches!(err, KemVizError::InvalidHex(_)));
    }

    #[test]
    fn from_hex_checks_parameter_sizes() {
        let err = KeyPair::from_hex::<Demo>(&"00".repeat(31), &"00".repeat(32)).unwrap_err();
        assert!(matches!(err, KemVizError::KeyLengthError { expected: 32, actual: 31 }));

        let err = KeyPair::from_hex::<Demo>(&"00".repeat(32), &"00".repeat(800)).unwrap_err();
        assert!(matches!(err, KemVizError::KeyLengthError { expected: 32, actual: 800 }));

        let keypair = KeyPair::from_hex::<Kyber512Sized>(&"00".repeat(800), &"11".repeat(1632))
            .expect("Kyber512-sized key pair");
        assert_eq!(keypair.public_key().len(), 800);
        assert_eq!(keypair.secret_key().len(), 1632);

        let err = KeyPair::from_hex::<Kyber512Sized>(&"00".repeat(32), &"11".repeat(1632)).unwrap_err();
        assert!(matches!(err, KemVizError::KeyLengthError { expected: 800, actual: 32 }));
    }

    #[test]
    fn hex_round_trip_reproduces_secret() {
        let kem = SimulatedKem::<Demo>::new();
        let original = kem.generate_keypair().expect("Keypair generation failed");
        let restored = KeyPair::from_hex::<Demo>(&original.public_key().to_hex(), &original.secret_key().to_hex())
            .expect("hex from keygen parses");

        assert_eq!(restored.public_key(), original.public_key());
        assert_eq!(restored.secret_key().as_bytes(), original.secret_key().as_bytes());

        let (_, before) = kem.encapsulate(original.public_key(), "hello").expect("Encapsulation failed");
        let (ct, after) = kem.encapsulate(restored.public_key(), "hello").expect("Encapsulation failed");
        assert_eq!(before, after);
        assert_eq!(kem.decapsulate(&ct, restored.secret_key(), "hello", restored.public_key()), before);
    }
}
