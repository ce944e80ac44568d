//! Evaluation results handed to the UI layer.

use crate::config::PolicyConfig;
use crate::rules::Rule;

/// Per-rule outcome of one policy evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub(crate) outcomes: [bool; Rule::COUNT],
    /// Distinct offending characters in first-seen order, empty without a policy.
    pub forbidden_characters: String,
    /// Logical AND of every rule outcome.
    pub fulfilled: bool,
    /// `false` when no policy was configured and every rule was bypassed.
    pub policy_configured: bool,
}

impl EvaluationResult {
    /// Result used when no policy is configured.
    pub(crate) fn bypassed() -> Self {
        Self {
            outcomes: [true; Rule::COUNT],
            forbidden_characters: String::new(),
            fulfilled: true,
            policy_configured: false,
        }
    }

    pub fn is_satisfied(&self, rule: Rule) -> bool {
        self.outcomes[rule.index()]
    }

    /// Iterates over `(rule, satisfied)` in rule order.
    pub fn iter(&self) -> impl Iterator<Item = (Rule, bool)> + '_ {
        Rule::ALL
            .into_iter()
            .map(move |rule| (rule, self.is_satisfied(rule)))
    }

    pub fn unsatisfied(&self) -> Vec<Rule> {
        self.iter()
            .filter(|(_, satisfied)| !satisfied)
            .map(|(rule, _)| rule)
            .collect()
    }
}

/// Form-level verdict: policy outcome plus the required-field and confirmation checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormVerdict {
    pub policy: EvaluationResult,
    /// The confirmation is filled in but differs from the new password.
    pub confirmation_mismatch: bool,
    /// Whether the submit control should be enabled.
    pub submit_enabled: bool,
}

impl FormVerdict {
    /// Hints to display, one per unsatisfied rule.
    ///
    /// The `forbid_others` hint also names the offending characters.
    pub fn visible_hints(&self, config: &PolicyConfig) -> Vec<(Rule, String)> {
        self.policy
            .unsatisfied()
            .into_iter()
            .map(|rule| {
                let mut hint = rule.hint(config);
                if rule == Rule::ForbidOthers && !self.policy.forbidden_characters.is_empty() {
                    hint.push_str(&format!(" (found: {})", self.policy.forbidden_characters));
                }
                (rule, hint)
            })
            .collect()
    }
}
