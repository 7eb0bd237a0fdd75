//! Chart-ready statistics over a hex-encoded shared secret.
//!
//! Every function here is pure. The views mirror what a front end renders:
//! an entropy bar, an 8x8 heatmap, a ciphertext/secret size pie, a 3D scatter
//! of byte triplets and a nibble frequency bar chart.

use serde::Serialize;

use crate::error::KemVizError;

pub mod entropy;
pub mod frequency;
pub mod heatmap;
pub mod sizes;
pub mod triplets;

pub use entropy::shannon_entropy;
pub use frequency::{nibble_frequencies, FrequencyEntry, FrequencyTable};
pub use heatmap::{heatmap_grid, HeatmapGrid, GRID_SIDE};
pub use sizes::SizeComparison;
pub use triplets::{byte_triplets, ByteTriplet, TRIPLET_SAMPLE_CHARS};

/// Number of leading hex digits sampled by the heatmap and frequency views.
pub const NIBBLE_SAMPLE: usize = 64;

/// All five views of one shared secret.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub entropy: f64,
    pub heatmap: HeatmapGrid,
    pub sizes: SizeComparison,
    pub triplets: Vec<ByteTriplet>,
    pub frequencies: FrequencyTable,
}

/// Builds every view for `secret`, using `ciphertext_len` for the size comparison.
pub fn analyze(secret: &str, ciphertext_len: usize) -> Result<Analysis, KemVizError> {
    Ok(Analysis {
        entropy: shannon_entropy(secret),
        heatmap: heatmap_grid(secret)?,
        sizes: SizeComparison::new(ciphertext_len, secret.len()),
        triplets: byte_triplets(secret)?,
        frequencies: nibble_frequencies(secret)?,
    })
}

/// Parses the first `count` characters of `secret` as nibbles.
pub(crate) fn leading_nibbles(secret: &str, count: usize) -> Result<Vec<u8>, KemVizError> {
    let available = secret.chars().count();
    if available < count {
        return Err(KemVizError::InsufficientData {
            needed: count,
            actual: available,
        });
    }
    secret.chars().take(count).enumerate().map(|(position, c)| nibble(position, c)).collect()
}

pub(crate) fn nibble(position: usize, c: char) -> Result<u8, KemVizError> {
    c.to_digit(16).map(|d| d as u8).ok_or(KemVizError::InvalidHexDigit { position, found: c })
}
