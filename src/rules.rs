//! Rule normalization - turns raw `{rule, value}` pairs into validated rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("the value {value} of the rule '{rule}' is invalid. Negative values are not accepted")]
    NegativeThreshold { rule: String, value: i64 },
    #[error(
        "the rule '{rule}' is invalid. List of accepted rules: [{}]",
        accepted_rules().join(" ")
    )]
    UnknownRule { rule: String },
}

/// The closed set of rules a password can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    MinSize,
    MinUppercase,
    MinLowercase,
    MinDigit,
    MinSpecialChars,
    NoRepeted,
}

impl RuleName {
    /// Every recognized rule, in the order they are advertised to callers.
    pub const ALL: [RuleName; 6] = [
        RuleName::MinSize,
        RuleName::MinUppercase,
        RuleName::MinLowercase,
        RuleName::MinDigit,
        RuleName::MinSpecialChars,
        RuleName::NoRepeted,
    ];

    /// Wire name of the rule.
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleName::MinSize => "minSize",
            RuleName::MinUppercase => "minUppercase",
            RuleName::MinLowercase => "minLowercase",
            RuleName::MinDigit => "minDigit",
            RuleName::MinSpecialChars => "minSpecialChars",
            RuleName::NoRepeted => "noRepeted",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| RuleError::UnknownRule { rule: s.to_string() })
    }
}

/// Names of all accepted rules.
pub fn accepted_rules() -> Vec<&'static str> {
    RuleName::ALL.iter().map(|rule| rule.as_str()).collect()
}

/// A rule as received from the caller. Nothing about it is trusted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    #[serde(rename = "rule")]
    pub name: String,
    pub value: i64,
}

impl RuleSpec {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A rule whose name is recognized and whose threshold is non-negative.
///
/// Only [`normalize_rules`] builds these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRule {
    name: RuleName,
    threshold: usize,
}

impl ValidatedRule {
    pub fn name(&self) -> RuleName {
        self.name
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

/// Validates raw rules, preserving their order and any duplicates.
///
/// The threshold sign is checked before the name, so an entry that is both
/// negative and unknown reports [`RuleError::NegativeThreshold`].
///
/// # Errors
///
/// Returns the error for the first offending entry; nothing is returned for
/// the entries before it.
pub fn normalize_rules(raw: &[RuleSpec]) -> Result<Vec<ValidatedRule>, RuleError> {
    raw.iter().map(normalize_rule).collect()
}

fn normalize_rule(spec: &RuleSpec) -> Result<ValidatedRule, RuleError> {
    if spec.value < 0 {
        #[cfg(feature = "tracing")]
        tracing::debug!(rule = %spec.name, value = spec.value, "rejected negative rule value");
        return Err(RuleError::NegativeThreshold {
            rule: spec.name.clone(),
            value: spec.value,
        });
    }

    let name = spec.name.parse::<RuleName>().inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::debug!(rule = %spec.name, "rejected unknown rule");
    })?;

    Ok(ValidatedRule {
        name,
        // Only reachable on targets where usize is narrower than i64.
        threshold: usize::try_from(spec.value).unwrap_or(usize::MAX),
    })
}
