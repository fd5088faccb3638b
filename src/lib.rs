//! Password rule validation library
//!
//! This library checks a password against a caller-supplied list of rules
//! and reports which of them failed.
//!
//! # Features
//!
//! - `async` (default): Enables debounced verification with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_RULES_PATH`: Custom path to the default rule policy
//!   (default: `./assets/rules.json`)
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{verify, RuleSpec};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("TesteSenhaFortee!123&".to_string().into());
//! let rules = vec![
//!     RuleSpec::new("minSize", 8),
//!     RuleSpec::new("noRepeted", 0),
//!     RuleSpec::new("minDigit", 4),
//! ];
//!
//! let verification = verify(&password, &rules).expect("Rules are valid");
//! assert!(!verification.verify);
//! assert_eq!(verification.no_match, vec!["noRepeted", "minDigit"]);
//! ```

// Internal modules
mod evaluator;
mod policy;
mod rules;

pub mod predicates;

// Public API
pub use evaluator::{evaluate_rules, verify, Verification};
pub use policy::{
    get_policy, get_policy_path, init_policy, init_policy_from_path, verify_with_policy,
    PolicyError,
};
pub use rules::{accepted_rules, normalize_rules, RuleError, RuleName, RuleSpec, ValidatedRule};

#[cfg(feature = "async")]
pub use evaluator::{verify_tx, DEBOUNCE};
