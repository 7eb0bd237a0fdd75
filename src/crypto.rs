pub mod hash {
    use std::str::FromStr;

    use serde::{Deserialize, Serialize};
    use sha2::Sha256;
    use sha3::{Digest, Sha3_256};

    /// 256-bit digest used to derive shared secrets.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum DigestAlgorithm {
        #[default]
        Sha256,
        #[serde(rename = "sha3-256")]
        Sha3_256,
    }

    impl DigestAlgorithm {
        pub fn name(&self) -> &'static str {
            match self {
                Self::Sha256 => "sha256",
                Self::Sha3_256 => "sha3-256",
            }
        }
    }

    impl FromStr for DigestAlgorithm {
        type Err = crate::error::KemVizError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.to_ascii_lowercase().as_str() {
                "sha256" | "sha-256" => Ok(Self::Sha256),
                "sha3-256" | "sha3_256" => Ok(Self::Sha3_256),
                _ => Err(crate::error::KemVizError::UnknownOption {
                    kind: "digest",
                    value: s.to_string(),
                }),
            }
        }
    }

    /// Hashes the concatenation of `parts` and returns the lowercase hex digest.
    pub fn digest_hex(algorithm: DigestAlgorithm, parts: &[&[u8]]) -> String {
        match algorithm {
            DigestAlgorithm::Sha256 => hex::encode(digest_parts::<Sha256>(parts)),
            DigestAlgorithm::Sha3_256 => hex::encode(digest_parts::<Sha3_256>(parts)),
        }
    }

    fn digest_parts<D: Digest>(parts: &[&[u8]]) -> Vec<u8> {
        let mut hasher = D::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize().to_vec()
    }
}

pub mod rand {
    use crate::error::KemVizError;
    use ::rand::{rngs::OsRng, RngCore, TryRngCore};
    use log::error;

    pub fn generate_random_bytes(len: usize) -> Result<Vec<u8>, KemVizError> {
        let mut bytes = vec![0u8; len];
        OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
            error!("Random bytes generation failed: {}", e);
            KemVizError::RandomError(format!("Failed to generate random bytes: {}", e))
        })?;
        Ok(bytes)
    }

    pub fn random_bytes_from(rng: &mut dyn RngCore, len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        rng.fill_bytes(&mut bytes);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::hash::{digest_hex, DigestAlgorithm};

    #[test]
    fn sha256_matches_known_vector() {
        assert_eq!(
            digest_hex(DigestAlgorithm::Sha256, &[b"abc"]),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha3_256_matches_known_vector() {
        assert_eq!(
            digest_hex(DigestAlgorithm::Sha3_256, &[b"abc"]),
            "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
        );
    }

    #[test]
    fn digest_names_parse_back() {
        for algorithm in [DigestAlgorithm::Sha256, DigestAlgorithm::Sha3_256] {
            assert_eq!(algorithm.name().parse::<DigestAlgorithm>().expect("known name"), algorithm);
        }
        assert_eq!("SHA3_256".parse::<DigestAlgorithm>().expect("case-insensitive"), DigestAlgorithm::Sha3_256);
        assert!("md5".parse::<DigestAlgorithm>().is_err());
    }

    #[test]
    fn parts_are_concatenated() {
        let split = digest_hex(DigestAlgorithm::Sha256, &[b"ab", b"c"]);
        let joined = digest_hex(DigestAlgorithm::Sha256, &[b"abc"]);
        assert_eq!(split, joined);
    }

    #[test]
    fn random_bytes_have_requested_length() {
        let bytes = super::rand::generate_random_bytes(48).expect("OS randomness unavailable");
        assert_eq!(bytes.len(), 48);
    }
}
