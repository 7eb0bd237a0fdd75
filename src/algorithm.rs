use log::{debug, error, info};
use rand::RngCore;

use crate::crypto::hash::{digest_hex, DigestAlgorithm};
use crate::crypto::rand::{generate_random_bytes, random_bytes_from};
use crate::error::KemVizError;
use crate::params::KemParams;
use crate::{Ciphertext, KeyPair, PublicKey, SecretKey, SharedSecret};

pub fn generate_keypair<P: KemParams>() -> Result<KeyPair, KemVizError> {
    debug!("GENERATE KEYPAIR Parameters: set={}, PK_SIZE={}, SK_SIZE={}", P::NAME, P::PK_SIZE, P::SK_SIZE);
    let pk = generate_random_bytes(P::PK_SIZE)?;
    let sk = generate_random_bytes(P::SK_SIZE)?;
    info!("Generated {} key pair", P::NAME);
    Ok(KeyPair::new(PublicKey::from_bytes::<P>(pk)?, SecretKey::from_bytes::<P>(sk)?))
}

pub fn generate_keypair_with_rng<P: KemParams>(rng: &mut dyn RngCore) -> KeyPair {
    debug!("GENERATE KEYPAIR Parameters: set={}, PK_SIZE={}, SK_SIZE={}", P::NAME, P::PK_SIZE, P::SK_SIZE);
    let public_key = PublicKey {
        bytes: random_bytes_from(rng, P::PK_SIZE),
    };
    let secret_key = SecretKey {
        bytes: random_bytes_from(rng, P::SK_SIZE),
    };
    KeyPair::new(public_key, secret_key)
}

/// Hashes `message || public_key`. Pure: identical inputs give identical output.
pub fn derive_shared_secret(digest: DigestAlgorithm, message: &str, public_key: &PublicKey) -> SharedSecret {
    SharedSecret(digest_hex(digest, &[message.as_bytes(), public_key.as_bytes()]))
}

pub fn encapsulate<P: KemParams>(
    digest: DigestAlgorithm,
    public_key: &PublicKey,
    message: &str,
) -> Result<(Ciphertext, SharedSecret), KemVizError> {
    check_public_key::<P>(public_key)?;
    let ciphertext = Ciphertext {
        bytes: generate_random_bytes(P::CT_SIZE)?,
    };
    let shared_secret = derive_shared_secret(digest, message, public_key);
    debug!("Encapsulated {} bytes of ciphertext, message length {}", ciphertext.len(), message.len());
    Ok((ciphertext, shared_secret))
}

pub fn encapsulate_with_rng<P: KemParams>(
    digest: DigestAlgorithm,
    public_key: &PublicKey,
    message: &str,
    rng: &mut dyn RngCore,
) -> Result<(Ciphertext, SharedSecret), KemVizError> {
    check_public_key::<P>(public_key)?;
    let ciphertext = Ciphertext {
        bytes: random_bytes_from(rng, P::CT_SIZE),
    };
    let shared_secret = derive_shared_secret(digest, message, public_key);
    debug!("Encapsulated {} bytes of ciphertext, message length {}", ciphertext.len(), message.len());
    Ok((ciphertext, shared_secret))
}

/// The simulated scheme ignores both the ciphertext and the secret key: the
/// receiver recomputes the secret from the message and the public key. This is
/// not a real KEM.
pub fn decapsulate(
    digest: DigestAlgorithm,
    _ciphertext: &Ciphertext,
    _secret_key: &SecretKey,
    message: &str,
    public_key: &PublicKey,
) -> SharedSecret {
    derive_shared_secret(digest, message, public_key)
}

fn check_public_key<P: KemParams>(public_key: &PublicKey) -> Result<(), KemVizError> {
    if public_key.len() != P::PK_SIZE {
        error!(
            "Encapsulation failed: invalid public key length, expected {}, got {}",
            P::PK_SIZE,
            public_key.len()
        );
        return Err(KemVizError::KeyLengthError {
            expected: P::PK_SIZE,
            actual: public_key.len(),
        });
    }
    Ok(())
}
