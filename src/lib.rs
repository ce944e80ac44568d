//! Password change validation library
//!
//! This library checks a password change form against a configurable
//! password policy: length bounds, character class minimums, forbidden
//! characters, and username/reuse checks. Every rule is evaluated on each
//! call so a UI can update one hint per rule and enable or disable its
//! submit control.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_CONFIG`: Custom path to the YAML config file
//!   (default: `./config.yaml`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{load_settings, evaluate_form, EvaluationInput};
//!
//! // Load the policy (call once at startup)
//! let settings = load_settings().expect("Failed to load policy config");
//! let policy = settings.active_policy();
//!
//! // Evaluate the form on every input change
//! let input = EvaluationInput::new("bob", "old-secret", "Passw0rd!", "Passw0rd!");
//! let verdict = evaluate_form(policy, &input);
//!
//! println!("Submit enabled: {}", verdict.submit_enabled);
//! if let Some(policy) = policy {
//!     for (rule, hint) in verdict.visible_hints(policy) {
//!         println!("{}: {}", rule, hint);
//!     }
//! }
//! ```

// Internal modules
mod config;
mod evaluator;
mod hints;
mod input;
mod result;
mod rules;
mod submission;

// Public API
pub use config::{
    get_config_path, load_settings, load_settings_from_path, ConfigError, PolicyConfig,
    PolicySection, PolicySettings, DEFAULT_SPECIALS,
};
pub use evaluator::{evaluate, evaluate_form};
pub use input::EvaluationInput;
pub use result::{EvaluationResult, FormVerdict};
pub use rules::{count_specials, forbidden_characters, Rule, RuleCheck};
pub use submission::{check_submission, SubmissionError};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_form_tx, DEBOUNCE};
