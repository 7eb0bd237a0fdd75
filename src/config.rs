//! Demo configuration, loaded from TOML.
//!
//! ```toml
//! digest = "sha3-256"
//! parameter_set = "kyber512-sized"
//! ciphertext_preview_chars = 32
//! log_filter = "debug"
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::crypto::hash::DigestAlgorithm;
use crate::error::KemVizError;

/// Hex characters of ciphertext shown before truncation.
pub const DEFAULT_CIPHERTEXT_PREVIEW_CHARS: usize = 64;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Buffer shapes the demo can run with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterSet {
    /// 32-byte keys, 64-byte ciphertext.
    #[default]
    Demo,
    /// Kyber512 key and ciphertext sizes.
    #[serde(rename = "kyber512-sized")]
    Kyber512Sized,
}

impl FromStr for ParameterSet {
    type Err = KemVizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "kyber512-sized" | "kyber512" => Ok(Self::Kyber512Sized),
            _ => Err(KemVizError::UnknownOption {
                kind: "parameter set",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Digest used to derive the shared secret.
    pub digest: DigestAlgorithm,
    pub parameter_set: ParameterSet,
    pub ciphertext_preview_chars: usize,
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            digest: DigestAlgorithm::Sha256,
            parameter_set: ParameterSet::Demo,
            ciphertext_preview_chars: DEFAULT_CIPHERTEXT_PREVIEW_CHARS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, KemVizError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, KemVizError> {
        let path = path.as_ref();
        debug!("Loading demo config from {}", path.display());
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn with_digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }

    pub fn with_parameter_set(mut self, parameter_set: ParameterSet) -> Self {
        self.parameter_set = parameter_set;
        self
    }
}
