use serde::Serialize;

use super::nibble;
use crate::error::KemVizError;

/// Hex characters sampled for the scatter view (30 bytes, 10 triplets).
pub const TRIPLET_SAMPLE_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteTriplet {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

/// Groups the leading hex pairs of `secret` into `(x, y, z)` byte coordinates.
///
/// Only complete pairs within the first 60 characters count, and a trailing
/// group of fewer than three bytes is dropped.
pub fn byte_triplets(secret: &str) -> Result<Vec<ByteTriplet>, KemVizError> {
    let sample: Vec<char> = secret.chars().take(TRIPLET_SAMPLE_CHARS).collect();
    let bytes = sample
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| -> Result<u8, KemVizError> {
            let high = nibble(2 * i, pair[0])?;
            let low = nibble(2 * i + 1, pair[1])?;
            Ok(high << 4 | low)
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let triplets = bytes
        .chunks_exact(3)
        .map(|b| ByteTriplet {
            x: b[0],
            y: b[1],
            z: b[2],
        })
        .collect();
    Ok(triplets)
}
