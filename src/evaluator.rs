//! Policy evaluator - runs every rule and combines the outcomes.

use crate::config::PolicyConfig;
use crate::input::EvaluationInput;
use crate::result::{EvaluationResult, FormVerdict};
use crate::rules::{forbidden_characters, Rule};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// Delay before an input change is evaluated, so bursts of keystrokes collapse into one run.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates the new password against the policy.
///
/// # Arguments
/// * `config` - The policy, `None` when no policy is configured
/// * `input` - The current form values
///
/// # Returns
/// An `EvaluationResult` with one outcome per rule. Every rule runs, even
/// after a failure, so every hint can be updated.
pub fn evaluate(config: Option<&PolicyConfig>, input: &EvaluationInput) -> EvaluationResult {
    let Some(config) = config else {
        return EvaluationResult::bypassed();
    };

    let mut outcomes = [true; Rule::COUNT];
    let mut fulfilled = true;

    for rule in Rule::ALL {
        let satisfied = rule.check()(config, input);
        if !satisfied {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password policy rule not satisfied: {}", rule);
        }
        outcomes[rule.index()] = satisfied;
        fulfilled = satisfied && fulfilled;
    }

    EvaluationResult {
        outcomes,
        forbidden_characters: forbidden_characters(config, input.new_password()),
        fulfilled,
        policy_configured: true,
    }
}

/// Evaluates the whole form: policy, required fields and confirmation.
///
/// The submit control is enabled only when username, old password and
/// confirmation are filled in, the confirmation matches, and the policy
/// (if any) is fulfilled.
pub fn evaluate_form(config: Option<&PolicyConfig>, input: &EvaluationInput) -> FormVerdict {
    let policy = evaluate(config, input);

    let confirmation_empty = input.confirmation().is_empty();
    let confirmation_mismatch =
        !confirmation_empty && input.new_password() != input.confirmation();

    let submit_enabled = policy.fulfilled
        && !input.username().is_empty()
        && !input.old_password().is_empty()
        && !confirmation_empty
        && !confirmation_mismatch;

    FormVerdict {
        policy,
        confirmation_mismatch,
        submit_enabled,
    }
}

/// Async version that waits out the debounce delay and sends the verdict via channel.
///
/// Nothing is sent when `token` is cancelled before the delay elapses, which
/// is how a newer input change supersedes this one.
#[cfg(feature = "async")]
pub async fn evaluate_form_tx(
    config: Option<&PolicyConfig>,
    input: &EvaluationInput,
    token: CancellationToken,
    tx: mpsc::Sender<FormVerdict>,
) {
    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("form evaluation superseded, skipping");
        return;
    }

    let verdict = evaluate_form(config, input);

    if let Err(e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send form verdict: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(new_password: &str) -> EvaluationInput {
        EvaluationInput::new("bob", "OldPassw0rd", new_password, new_password)
    }

    fn strict_config() -> PolicyConfig {
        PolicyConfig {
            min_length: 8,
            max_length: 16,
            min_lowers: 1,
            min_uppers: 1,
            min_digits: 1,
            min_specials: 1,
            specials: "!@#".to_string(),
            forbid_others: true,
            forbid_username: true,
            forbid_reuse: true,
        }
    }

    #[test]
    fn test_evaluate_scenario_all_rules_pass() {
        let config = PolicyConfig {
            min_length: 8,
            min_digits: 1,
            min_uppers: 1,
            ..PolicyConfig::default()
        };
        let result = evaluate(Some(&config), &input("Passw0rd"));
        assert!(result.is_satisfied(Rule::MinLength));
        assert!(result.is_satisfied(Rule::MinDigits));
        assert!(result.is_satisfied(Rule::MinUppers));
        assert!(result.fulfilled);
        assert!(result.policy_configured);
    }

    #[test]
    fn test_evaluate_scenario_too_short() {
        let config = PolicyConfig {
            min_length: 8,
            ..PolicyConfig::default()
        };
        let result = evaluate(Some(&config), &input("short"));
        assert!(!result.is_satisfied(Rule::MinLength));
        assert!(!result.fulfilled);
        assert_eq!(result.unsatisfied(), vec![Rule::MinLength]);
    }

    #[test]
    fn test_evaluate_runs_every_rule() {
        let config = strict_config();
        let result = evaluate(Some(&config), &input("bob€"));
        assert_eq!(
            result.unsatisfied(),
            vec![
                Rule::MinLength,
                Rule::MinUppers,
                Rule::MinDigits,
                Rule::MinSpecials,
                Rule::ForbidOthers,
                Rule::ForbidUsername,
            ]
        );
        assert_eq!(result.forbidden_characters, "€");
    }

    #[test]
    fn test_evaluate_strict_policy_pass() {
        let config = strict_config();
        let result = evaluate(Some(&config), &input("Tr0ub4dor!"));
        assert!(result.fulfilled, "unsatisfied: {:?}", result.unsatisfied());
        assert!(result.forbidden_characters.is_empty());
    }

    #[test]
    fn test_evaluate_reuse_detected() {
        let config = strict_config();
        let input = EvaluationInput::new("bob", "Tr0ub4dor!", "Tr0ub4dor!", "Tr0ub4dor!");
        let result = evaluate(Some(&config), &input);
        assert_eq!(result.unsatisfied(), vec![Rule::ForbidReuse]);
    }

    #[test]
    fn test_evaluate_forbidden_characters_without_forbid_others() {
        let config = PolicyConfig {
            specials: "!@#".to_string(),
            ..PolicyConfig::default()
        };
        let result = evaluate(Some(&config), &input("ab!@#çd"));
        assert!(result.is_satisfied(Rule::ForbidOthers));
        assert_eq!(result.forbidden_characters, "ç");
        assert!(result.fulfilled);
    }

    #[test]
    fn test_evaluate_without_policy() {
        let result = evaluate(None, &input("x"));
        assert!(result.fulfilled);
        assert!(!result.policy_configured);
        assert!(result.iter().all(|(_, satisfied)| satisfied));
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let config = strict_config();
        let input = input("pass word");
        let first = evaluate(Some(&config), &input);
        let second = evaluate(Some(&config), &input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_form_without_policy() {
        let verdict = evaluate_form(None, &EvaluationInput::new("bob", "old", "x", "x"));
        assert!(verdict.submit_enabled);
        assert!(!verdict.confirmation_mismatch);
    }

    #[test]
    fn test_evaluate_form_mismatch() {
        let config = PolicyConfig::default();
        let input = EvaluationInput::new("bob", "old", "abc", "abd");
        for config in [None, Some(&config)] {
            let verdict = evaluate_form(config, &input);
            assert!(verdict.confirmation_mismatch);
            assert!(!verdict.submit_enabled);
        }
    }

    #[test]
    fn test_evaluate_form_empty_confirmation_is_not_mismatch() {
        let verdict = evaluate_form(None, &EvaluationInput::new("bob", "old", "abc", ""));
        assert!(!verdict.confirmation_mismatch);
        assert!(!verdict.submit_enabled);
    }

    #[test]
    fn test_evaluate_form_requires_fields() {
        let missing_username = EvaluationInput::new("", "old", "abc", "abc");
        let missing_old = EvaluationInput::new("bob", "", "abc", "abc");
        assert!(!evaluate_form(None, &missing_username).submit_enabled);
        assert!(!evaluate_form(None, &missing_old).submit_enabled);
    }

    #[test]
    fn test_evaluate_form_fulfilled_policy_enables_submit() {
        let config = strict_config();
        let verdict = evaluate_form(Some(&config), &input("Tr0ub4dor!"));
        assert!(verdict.policy.policy_configured);
        assert!(verdict.policy.fulfilled);
        assert!(!verdict.confirmation_mismatch);
        assert!(verdict.submit_enabled);
        assert!(verdict.visible_hints(&config).is_empty());
    }

    #[test]
    fn test_evaluate_form_fulfilled_policy_still_requires_fields() {
        let config = strict_config();
        let missing_old = EvaluationInput::new("bob", "", "Tr0ub4dor!", "Tr0ub4dor!");
        let verdict = evaluate_form(Some(&config), &missing_old);
        assert!(verdict.policy.fulfilled);
        assert!(!verdict.submit_enabled);

        let missing_confirmation = EvaluationInput::new("bob", "OldPassw0rd", "Tr0ub4dor!", "");
        let verdict = evaluate_form(Some(&config), &missing_confirmation);
        assert!(verdict.policy.fulfilled);
        assert!(!verdict.confirmation_mismatch);
        assert!(!verdict.submit_enabled);
    }

    #[test]
    fn test_evaluate_form_policy_failure_disables_submit() {
        let config = PolicyConfig {
            min_length: 8,
            ..PolicyConfig::default()
        };
        let verdict = evaluate_form(Some(&config), &input("short"));
        assert!(!verdict.confirmation_mismatch);
        assert!(!verdict.submit_enabled);
        assert_eq!(
            verdict.visible_hints(&config),
            vec![(Rule::MinLength, "At least 8 characters".to_string())]
        );
    }
}
