//! Hint text shown next to the form while a rule is not satisfied.

use crate::config::PolicyConfig;
use crate::rules::Rule;

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

impl Rule {
    /// Describes what the rule demands under `config`.
    pub fn hint(self, config: &PolicyConfig) -> String {
        match self {
            Rule::MinLength => format!(
                "At least {}",
                plural(config.min_length, "character", "characters")
            ),
            Rule::MaxLength => format!(
                "At most {}",
                plural(config.max_length, "character", "characters")
            ),
            Rule::MinLowers => format!(
                "At least {}",
                plural(config.min_lowers, "lowercase letter", "lowercase letters")
            ),
            Rule::MinUppers => format!(
                "At least {}",
                plural(config.min_uppers, "uppercase letter", "uppercase letters")
            ),
            Rule::MinDigits => format!(
                "At least {}",
                plural(config.min_digits, "digit", "digits")
            ),
            Rule::MinSpecials => format!(
                "At least {} out of: {}",
                plural(config.min_specials, "special character", "special characters"),
                config.specials
            ),
            Rule::ForbidOthers => {
                "Only letters, digits and the listed special characters are allowed".to_string()
            }
            Rule::ForbidUsername => "Must not contain the username".to_string(),
            Rule::ForbidReuse => "Must differ from the current password".to_string(),
        }
    }
}
