//! Rule predicates
//!
//! Each predicate checks one rule against a password and a threshold.

mod length;
mod pattern;
mod variety;

pub use length::min_size;
pub use pattern::{has_adjacent_repeat, no_repeated};
pub use variety::{
    count_digits, count_lowercase, count_special, count_uppercase, min_digit, min_lowercase,
    min_special_chars, min_uppercase, SPECIAL_CHARS,
};

use crate::rules::RuleName;

/// Signature shared by all predicates.
/// - `true` - the password satisfies the rule
/// - `false` - the rule failed
pub type Predicate = fn(&str, usize) -> bool;

/// Returns the predicate implementing `rule`.
pub fn predicate_for(rule: RuleName) -> Predicate {
    match rule {
        RuleName::MinSize => min_size,
        RuleName::MinUppercase => min_uppercase,
        RuleName::MinLowercase => min_lowercase,
        RuleName::MinDigit => min_digit,
        RuleName::MinSpecialChars => min_special_chars,
        RuleName::NoRepeted => no_repeated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_has_a_predicate() {
        // A zero threshold passes every counting rule, and "ab" has no repeats.
        for rule in RuleName::ALL {
            assert!(predicate_for(rule)("ab", 0), "{rule} failed on trivial input");
        }
    }

    #[test]
    fn test_dispatch_targets_the_right_predicate() {
        assert!(!predicate_for(RuleName::MinSize)("abc", 4));
        assert!(!predicate_for(RuleName::MinUppercase)("abc", 1));
        assert!(!predicate_for(RuleName::MinLowercase)("ABC", 1));
        assert!(!predicate_for(RuleName::MinDigit)("abc", 1));
        assert!(!predicate_for(RuleName::MinSpecialChars)("abc", 1));
        assert!(!predicate_for(RuleName::NoRepeted)("abbc", 0));
    }
}
