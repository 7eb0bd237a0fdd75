//! Session-scoped key pair storage and the per-message exchange pipeline.
//!
//! The session is owned by whatever drives the demo (a CLI, a UI). Nothing in
//! the crate keeps global state: the key pair lives here until it is replaced.

use log::{debug, info, warn};
use rand::RngCore;
use serde::Serialize;

use crate::analysis::{analyze, Analysis};
use crate::error::KemVizError;
use crate::params::KemParams;
use crate::{Ciphertext, DigestAlgorithm, KeyPair, PublicKey, SharedSecret, SimulatedKem};

/// Result of one encapsulate/decapsulate round for a message.
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub public_key: PublicKey,
    pub ciphertext: Ciphertext,
    pub sender_secret: SharedSecret,
    pub receiver_secret: SharedSecret,
    pub secrets_match: bool,
    pub analysis: Analysis,
}

impl Exchange {
    /// First `chars` hex characters of the ciphertext followed by `...`.
    pub fn ciphertext_preview(&self, chars: usize) -> String {
        let hex = self.ciphertext.to_hex();
        let end = chars.min(hex.len());
        format!("{}...", &hex[..end])
    }
}

pub struct Session<P: KemParams> {
    kem: SimulatedKem<P>,
    keypair: Option<KeyPair>,
}

impl<P: KemParams> Default for Session<P> {
    fn default() -> Self {
        Self::new(DigestAlgorithm::default())
    }
}

impl<P: KemParams> Session<P> {
    pub fn new(digest: DigestAlgorithm) -> Self {
        Session {
            kem: SimulatedKem::with_digest(digest),
            keypair: None,
        }
    }

    /// Starts a session around an existing key pair.
    pub fn with_keypair(digest: DigestAlgorithm, keypair: KeyPair) -> Self {
        Session {
            kem: SimulatedKem::with_digest(digest),
            keypair: Some(keypair),
        }
    }

    pub fn kem(&self) -> &SimulatedKem<P> {
        &self.kem
    }

    pub fn keypair(&self) -> Option<&KeyPair> {
        self.keypair.as_ref()
    }

    /// Replaces the current key pair with a fresh one from the OS RNG.
    pub fn generate_keys(&mut self) -> Result<&KeyPair, KemVizError> {
        let keypair = self.kem.generate_keypair()?;
        Ok(self.keypair.insert(keypair))
    }

    pub fn generate_keys_with_rng(&mut self, rng: &mut dyn RngCore) -> &KeyPair {
        let keypair = self.kem.generate_keypair_with_rng(rng);
        self.keypair.insert(keypair)
    }

    /// Runs encapsulation, decapsulation and analysis for `message`.
    ///
    /// An empty message is "no message yet" and yields `Ok(None)`. Exchanging
    /// before any key pair exists is a caller error.
    pub fn exchange(&self, message: &str) -> Result<Option<Exchange>, KemVizError> {
        self.run_exchange(message, |kem, pk| kem.encapsulate(pk, message))
    }

    pub fn exchange_with_rng(&self, message: &str, rng: &mut dyn RngCore) -> Result<Option<Exchange>, KemVizError> {
        self.run_exchange(message, |kem, pk| kem.encapsulate_with_rng(pk, message, rng))
    }

    fn run_exchange<F>(&self, message: &str, encapsulate: F) -> Result<Option<Exchange>, KemVizError>
    where
        F: FnOnce(&SimulatedKem<P>, &PublicKey) -> Result<(Ciphertext, SharedSecret), KemVizError>,
    {
        if message.is_empty() {
            debug!("Empty message, skipping exchange");
            return Ok(None);
        }
        let keypair = self.keypair.as_ref().ok_or_else(|| {
            warn!("Exchange requested before key generation");
            KemVizError::MissingKeyPair
        })?;

        let (ciphertext, sender_secret) = encapsulate(&self.kem, keypair.public_key())?;
        let receiver_secret = self.kem.decapsulate(&ciphertext, keypair.secret_key(), message, keypair.public_key());
        let secrets_match = sender_secret == receiver_secret;
        if secrets_match {
            info!("Shared secrets match ({} digest)", self.kem.digest().name());
        } else {
            warn!("Shared secrets do not match");
        }

        let analysis = analyze(sender_secret.as_str(), ciphertext.len())?;
        debug!("Shared secret entropy: {} bits/char", analysis.entropy);

        Ok(Some(Exchange {
            public_key: keypair.public_key().clone(),
            ciphertext,
            sender_secret,
            receiver_secret,
            secrets_match,
            analysis,
        }))
    }
}
