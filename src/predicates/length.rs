//! Length predicate - checks password minimum length.

/// Checks that the password has at least `threshold` characters.
///
/// Length is counted in characters, not bytes.
pub fn min_size(password: &str, threshold: usize) -> bool {
    password.chars().count() >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_size_long_enough() {
        assert!(min_size("aaaAAaaBccD", 4));
        assert!(min_size("461ada616", 4));
    }

    #[test]
    fn test_min_size_exactly_minimum() {
        assert!(min_size("aaa", 3));
    }

    #[test]
    fn test_min_size_too_short() {
        assert!(!min_size("", 4));
        assert!(!min_size("Short1!", 8));
    }

    #[test]
    fn test_min_size_zero_threshold() {
        assert!(min_size("", 0));
    }

    #[test]
    fn test_min_size_counts_characters_not_bytes() {
        // 4 characters, 8 bytes
        assert!(!min_size("éééé", 5));
        assert!(min_size("éééé", 4));
    }
}
