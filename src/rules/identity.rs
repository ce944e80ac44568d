//! Identity rules - the new password must not contain the username or repeat the old password.

use crate::config::PolicyConfig;
use crate::input::EvaluationInput;

/// Satisfied unless the trimmed username occurs in the new password, ignoring case.
///
/// A blank username never violates the rule.
pub fn forbid_username_rule(config: &PolicyConfig, input: &EvaluationInput) -> bool {
    if !config.forbid_username {
        return true;
    }

    let username = input.username().trim();
    if username.is_empty() {
        return true;
    }

    !input
        .new_password()
        .to_lowercase()
        .contains(&username.to_lowercase())
}

/// Satisfied unless the new password is non-empty and equal to the old one.
pub fn forbid_reuse_rule(config: &PolicyConfig, input: &EvaluationInput) -> bool {
    !config.forbid_reuse
        || input.new_password().is_empty()
        || input.new_password() != input.old_password()
}
