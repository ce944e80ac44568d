//! Length rules - minimum and maximum password length.

use crate::config::PolicyConfig;
use crate::input::EvaluationInput;

fn password_length(input: &EvaluationInput) -> usize {
    input.new_password().chars().count()
}

/// Satisfied when the new password has at least `min_length` characters.
pub fn min_length_rule(config: &PolicyConfig, input: &EvaluationInput) -> bool {
    config.min_length == 0 || password_length(input) >= config.min_length
}

/// Satisfied when the new password has at most `max_length` characters.
pub fn max_length_rule(config: &PolicyConfig, input: &EvaluationInput) -> bool {
    config.max_length == 0 || password_length(input) <= config.max_length
}
