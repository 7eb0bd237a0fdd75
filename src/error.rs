use thiserror::Error;

/// Errors produced by the simulated KEM, the analyzer and the config loader.
#[derive(Debug, Error)]
pub enum KemVizError {
    #[error("Invalid key length: expected {expected}, got {actual}")]
    KeyLengthError { expected: usize, actual: usize },
    #[error("Invalid ciphertext length: expected {expected}, got {actual}")]
    CiphertextLengthError { expected: usize, actual: usize },
    #[error("No key pair has been generated for this session")]
    MissingKeyPair,
    #[error("Invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit { position: usize, found: char },
    #[error("Insufficient data: need {needed} hex digits, got {actual}")]
    InsufficientData { needed: usize, actual: usize },
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Unknown {kind}: {value:?}")]
    UnknownOption { kind: &'static str, value: String },
    #[error("Random number generation failed: {0}")]
    RandomError(String),
    #[error("Configuration error: {0}")]
    ConfigError(#[from] toml::de::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
