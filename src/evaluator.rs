//! Password rule evaluator - main verification logic.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::predicates::predicate_for;
use crate::rules::{normalize_rules, RuleError, RuleSpec, ValidatedRule};

/// Delay before an async verification starts, so that rapid successive
/// requests can cancel the previous one.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Outcome of checking a password against a rule list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// `true` when every rule passed.
    pub verify: bool,
    /// Names of the failed rules, in rule-list order.
    #[serde(rename = "noMatch")]
    pub no_match: Vec<String>,
}

/// Evaluates every rule against the password and collects the failures.
///
/// All rules are evaluated, even after one has failed.
pub fn evaluate_rules(password: &str, rules: &[ValidatedRule]) -> Verification {
    let no_match: Vec<String> = rules
        .iter()
        .filter(|rule| !predicate_for(rule.name())(password, rule.threshold()))
        .map(|rule| rule.name().as_str().to_string())
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rules = rules.len(),
        failed = no_match.len(),
        "password rules evaluated"
    );

    Verification {
        verify: no_match.is_empty(),
        no_match,
    }
}

/// Verifies a password against caller-supplied rules.
///
/// # Arguments
/// * `password` - The password to verify
/// * `rules` - Raw rules as decoded from the request
///
/// # Errors
/// Returns a [`RuleError`] if any rule is unknown or has a negative value.
/// No rule is evaluated in that case.
pub fn verify(password: &SecretString, rules: &[RuleSpec]) -> Result<Verification, RuleError> {
    let validated = normalize_rules(rules)?;
    Ok(evaluate_rules(password.expose_secret(), &validated))
}

/// Async version that sends the verification result via channel.
///
/// Waits for [`DEBOUNCE`] first; if `token` is cancelled meanwhile nothing
/// is sent.
#[cfg(feature = "async")]
pub async fn verify_tx(
    password: &SecretString,
    rules: &[RuleSpec],
    token: CancellationToken,
    tx: mpsc::Sender<Result<Verification, RuleError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("verification is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("verification cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let result = verify(password, rules);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verification result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let rules = vec![RuleSpec::new("minSize", 4), RuleSpec::new("minDigit", 1)];

        verify_tx(&secret("TestPass"), &rules, token, tx).await;

        let result = rx.recv().await.expect("Should receive verification");
        let verification = result.expect("Rules should be valid");
        assert!(!verification.verify);
        assert_eq!(verification.no_match, vec!["minDigit"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_tx_sends_rule_error() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let rules = vec![RuleSpec::new("minSize", -4)];

        verify_tx(&secret("TestPass"), &rules, token, tx).await;

        let result = rx.recv().await.expect("Should receive verification");
        assert!(matches!(result, Err(RuleError::NegativeThreshold { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_tx_cancelled_before_start() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        verify_tx(&secret("TestPass"), &[RuleSpec::new("minSize", 4)], token, tx).await;

        // Sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_tx_cancelled_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let canceller = token.clone();

        let cancel_task = async move {
            tokio::time::sleep(DEBOUNCE / 2).await;
            canceller.cancel();
        };
        let rules = vec![RuleSpec::new("minSize", 4)];
        let pwd = secret("TestPass");

        tokio::join!(verify_tx(&pwd, &rules, token, tx), cancel_task);

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must not panic
        verify_tx(
            &secret("TestPass"),
            &[RuleSpec::new("minSize", 4)],
            CancellationToken::new(),
            tx,
        )
        .await;
    }
}
