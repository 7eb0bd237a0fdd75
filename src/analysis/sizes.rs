use serde::Serialize;

pub const CIPHERTEXT_LABEL: &str = "Ciphertext";
pub const SHARED_SECRET_LABEL: &str = "Shared Secret";

/// Byte lengths of the ciphertext and of the hex shared-secret string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeComparison {
    pub ciphertext_bytes: usize,
    pub shared_secret_bytes: usize,
}

impl SizeComparison {
    pub fn new(ciphertext_bytes: usize, shared_secret_bytes: usize) -> Self {
        SizeComparison { ciphertext_bytes, shared_secret_bytes }
    }

    /// `(label, magnitude)` pairs in display order.
    pub fn labeled(&self) -> [(&'static str, usize); 2] {
        [(CIPHERTEXT_LABEL, self.ciphertext_bytes), (SHARED_SECRET_LABEL, self.shared_secret_bytes)]
    }

    /// Percentage share of each side, rounded to one decimal. Both are 0 when
    /// the two sizes are 0.
    pub fn percentages(&self) -> (f64, f64) {
        let total = (self.ciphertext_bytes + self.shared_secret_bytes) as f64;
        if total == 0.0 {
            return (0.0, 0.0);
        }
        let share = |part: usize| (part as f64 / total * 1000.0).round() / 10.0;
        (share(self.ciphertext_bytes), share(self.shared_secret_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_sizes_split_evenly() {
        let sizes = SizeComparison::new(64, 64);
        assert_eq!(sizes.percentages(), (50.0, 50.0));
        assert_eq!(sizes.labeled(), [("Ciphertext", 64), ("Shared Secret", 64)]);
    }

    #[test]
    fn kyber512_sized_ciphertext_dominates() {
        let sizes = SizeComparison::new(768, 64);
        assert_eq!(sizes.percentages(), (92.3, 7.7));
    }

    #[test]
    fn empty_sizes_do_not_divide_by_zero() {
        assert_eq!(SizeComparison::new(0, 0).percentages(), (0.0, 0.0));
    }
}
