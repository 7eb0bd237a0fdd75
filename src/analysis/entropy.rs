use std::collections::BTreeMap;

/// Shannon entropy of `data` in bits per character, rounded to two decimals.
///
/// An empty string has no distribution; it reports `0.0`.
pub fn shannon_entropy(data: &str) -> f64 {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for c in data.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    let total: usize = counts.values().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let bits = counts.values().fold(0.0, |acc, &count| {
        let p = count as f64 / total;
        acc - p * p.log2()
    });
    round_to_hundredths(bits)
}

fn round_to_hundredths(value: f64) -> f64 {
    // normalizes -0.0 from a single-symbol input
    (value * 100.0).round() / 100.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_zero() {
        let entropy = shannon_entropy("");
        assert_eq!(entropy, 0.0);
        assert!(!entropy.is_nan());
    }

    #[test]
    fn single_symbol_is_zero() {
        assert_eq!(shannon_entropy("aaaaaaaa"), 0.0);
        assert!(shannon_entropy("aaaaaaaa").is_sign_positive());
    }

    #[test]
    fn uniform_hex_alphabet_is_four_bits() {
        let uniform = "0123456789abcdef".repeat(4);
        assert_eq!(shannon_entropy(&uniform), 4.0);
    }

    #[test]
    fn two_equal_symbols_is_one_bit() {
        assert_eq!(shannon_entropy("abababab"), 1.0);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let secret = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";
        let first = shannon_entropy(secret).to_bits();
        for _ in 0..32 {
            assert_eq!(shannon_entropy(secret).to_bits(), first);
        }
        let reversed: String = secret.chars().rev().collect();
        assert_eq!(shannon_entropy(&reversed).to_bits(), first);
    }

    #[test]
    fn result_is_rounded() {
        // counts 3:1 -> 0.8112781...
        assert_eq!(shannon_entropy("aaab"), 0.81);
    }
}
