//! Pattern predicate - detects adjacent repeated characters.

/// Returns `true` if two consecutive characters are identical.
pub fn has_adjacent_repeat(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(2).any(|w| w[0] == w[1])
}

/// Passes when no character is immediately followed by itself.
///
/// The threshold is accepted for a uniform signature and ignored.
pub fn no_repeated(password: &str, _threshold: usize) -> bool {
    !has_adjacent_repeat(password)
}
