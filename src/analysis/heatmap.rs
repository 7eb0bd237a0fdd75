use serde::Serialize;

use super::{leading_nibbles, NIBBLE_SAMPLE};
use crate::error::KemVizError;

pub const GRID_SIDE: usize = 8;

/// 8x8 grid of nibble values in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeatmapGrid {
    cells: [[u8; GRID_SIDE]; GRID_SIDE],
}

impl HeatmapGrid {
    pub fn rows(&self) -> &[[u8; GRID_SIDE]; GRID_SIDE] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn flatten(&self) -> Vec<u8> {
        self.cells.iter().flatten().copied().collect()
    }
}

/// Lays the first 64 hex digits of `secret` out as an 8x8 grid.
pub fn heatmap_grid(secret: &str) -> Result<HeatmapGrid, KemVizError> {
    let nibbles = leading_nibbles(secret, NIBBLE_SAMPLE)?;
    let mut cells = [[0u8; GRID_SIDE]; GRID_SIDE];
    for (row, chunk) in cells.iter_mut().zip(nibbles.chunks_exact(GRID_SIDE)) {
        row.copy_from_slice(chunk);
    }
    Ok(HeatmapGrid { cells })
}
