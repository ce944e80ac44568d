//! Character class rules - lowercase, uppercase, digits and special characters.

use crate::config::PolicyConfig;
use crate::input::EvaluationInput;

fn count_matching(password: &str, predicate: impl Fn(&char) -> bool) -> usize {
    password.chars().filter(predicate).count()
}

/// Counts the characters of `password` that belong to the configured special set.
pub fn count_specials(config: &PolicyConfig, password: &str) -> usize {
    count_matching(password, |c| config.specials.contains(*c))
}

pub fn min_lowers_rule(config: &PolicyConfig, input: &EvaluationInput) -> bool {
    config.min_lowers == 0
        || count_matching(input.new_password(), char::is_ascii_lowercase) >= config.min_lowers
}

pub fn min_uppers_rule(config: &PolicyConfig, input: &EvaluationInput) -> bool {
    config.min_uppers == 0
        || count_matching(input.new_password(), char::is_ascii_uppercase) >= config.min_uppers
}

pub fn min_digits_rule(config: &PolicyConfig, input: &EvaluationInput) -> bool {
    config.min_digits == 0
        || count_matching(input.new_password(), char::is_ascii_digit) >= config.min_digits
}

/// Satisfied when the new password holds at least `min_specials` special characters.
///
/// An empty special set disables the rule even when `min_specials` is set.
pub fn min_specials_rule(config: &PolicyConfig, input: &EvaluationInput) -> bool {
    config.min_specials == 0
        || config.specials.is_empty()
        || count_specials(config, input.new_password()) >= config.min_specials
}
