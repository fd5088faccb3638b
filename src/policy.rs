//! Default rule policy
//!
//! Loads a rule list from a JSON file once and keeps it for callers that do
//! not send their own rules.

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::{evaluate_rules, Verification};
use crate::rules::{normalize_rules, RuleError, RuleSpec, ValidatedRule};

static DEFAULT_POLICY: RwLock<Option<Vec<ValidatedRule>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Policy file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read policy file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Policy file is empty")]
    EmptyFile,
    #[error("Failed to parse policy file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Policy file contains an invalid rule: {0}")]
    InvalidRule(#[from] RuleError),
}

/// Returns the policy file path.
///
/// Priority:
/// 1. Environment variable `PWD_RULES_PATH`
/// 2. Default path `./assets/rules.json`
pub fn get_policy_path() -> PathBuf {
    std::env::var("PWD_RULES_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/rules.json"))
}

/// Initializes the default policy from the configured file.
///
/// The file holds a JSON array of `{"rule": <name>, "value": <integer>}`
/// objects. Set `PWD_RULES_PATH` to override the location.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty or not a valid rule array
/// - Any rule is unknown or has a negative value
pub fn init_policy() -> Result<usize, PolicyError> {
    let path = get_policy_path();
    init_policy_from_path(&path)
}

/// Initializes the default policy from a specific file path.
///
/// Does nothing if a policy is already installed; returns the number of
/// rules in the installed policy either way.
pub fn init_policy_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, PolicyError> {
    {
        let guard = DEFAULT_POLICY.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(rules) = guard.as_ref() {
            return Ok(rules.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Policy initialization FAILED: FileNotFound {:?}", path);
        return Err(PolicyError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Policy initialization FAILED: Empty file {:?}", path);
        return Err(PolicyError::EmptyFile);
    }

    let raw: Vec<RuleSpec> = serde_json::from_str(&content)?;
    let rules = normalize_rules(&raw)?;

    let count = rules.len();
    {
        let mut guard = DEFAULT_POLICY.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(rules);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Policy initialized: {} rules from {:?}", count, path);

    Ok(count)
}

/// Returns a copy of the installed policy, or `None` before initialization.
pub fn get_policy() -> Option<Vec<ValidatedRule>> {
    let guard = DEFAULT_POLICY.read().unwrap_or_else(PoisonError::into_inner);
    guard.clone()
}

/// Verifies a password against the installed policy.
///
/// Returns `None` if no policy has been initialized.
pub fn verify_with_policy(password: &SecretString) -> Option<Verification> {
    let guard = DEFAULT_POLICY.read().unwrap_or_else(PoisonError::into_inner);
    guard
        .as_ref()
        .map(|rules| evaluate_rules(password.expose_secret(), rules))
}

#[cfg(test)]
pub fn reset_policy_for_testing() {
    let mut guard = DEFAULT_POLICY.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
