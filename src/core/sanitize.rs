// src/core/sanitize.rs

/// Comparison key for product names: surrounding whitespace trimmed, case folded.
/// Inner whitespace is kept as-is.
pub fn fold_name(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_trims_and_lowercases() {
        assert_eq!(fold_name("  Hyaluron-Filler Night Cream \n"), "hyaluron-filler night cream");
        assert_eq!(fold_name("\tÀCIDO Hialurónico"), "àcido hialurónico");
    }

    #[test]
    fn inner_whitespace_is_significant() {
        assert_eq!(fold_name("UreaRepair PLUS"), fold_name(" urearepair plus\t"));
        assert_ne!(fold_name("Urea Repair"), fold_name("Urea  Repair"));
    }
}
