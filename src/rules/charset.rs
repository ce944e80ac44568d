//! Charset rule - rejects characters outside letters, digits and the special set.

use crate::config::PolicyConfig;
use crate::input::EvaluationInput;

/// Collects the distinct characters of `password` that are neither ASCII
/// letters, ASCII digits nor configured specials, in order of first appearance.
///
/// Computed regardless of `forbid_others` so it can always be displayed.
pub fn forbidden_characters(config: &PolicyConfig, password: &str) -> String {
    let mut forbidden = String::new();
    for c in password.chars() {
        if c.is_ascii_alphanumeric() || config.specials.contains(c) || forbidden.contains(c) {
            continue;
        }
        forbidden.push(c);
    }
    forbidden
}

pub fn forbid_others_rule(config: &PolicyConfig, input: &EvaluationInput) -> bool {
    !config.forbid_others || forbidden_characters(config, input.new_password()).is_empty()
}
