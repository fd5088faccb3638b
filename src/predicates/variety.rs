//! Character variety predicates - uppercase, lowercase, digits, special chars.

/// Symbols counted by the `minSpecialChars` rule.
pub const SPECIAL_CHARS: [char; 17] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '+', '/', '{', '}', '[', ']',
];

pub fn count_uppercase(password: &str) -> usize {
    password.chars().filter(|c| c.is_ascii_uppercase()).count()
}

pub fn count_lowercase(password: &str) -> usize {
    password.chars().filter(|c| c.is_ascii_lowercase()).count()
}

pub fn count_digits(password: &str) -> usize {
    password.chars().filter(|c| c.is_ascii_digit()).count()
}

pub fn count_special(password: &str) -> usize {
    password.chars().filter(|c| SPECIAL_CHARS.contains(c)).count()
}

pub fn min_uppercase(password: &str, threshold: usize) -> bool {
    count_uppercase(password) >= threshold
}

pub fn min_lowercase(password: &str, threshold: usize) -> bool {
    count_lowercase(password) >= threshold
}

pub fn min_digit(password: &str, threshold: usize) -> bool {
    count_digits(password) >= threshold
}

pub fn min_special_chars(password: &str, threshold: usize) -> bool {
    count_special(password) >= threshold
}
