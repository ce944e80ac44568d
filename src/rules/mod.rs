//! Password policy rules
//!
//! Each rule is an independent predicate over the form input. A rule whose
//! governing threshold or flag is unset is always satisfied.

mod charset;
mod classes;
mod identity;
mod length;

pub use charset::{forbid_others_rule, forbidden_characters};
pub use classes::{
    count_specials, min_digits_rule, min_lowers_rule, min_specials_rule, min_uppers_rule,
};
pub use identity::{forbid_reuse_rule, forbid_username_rule};
pub use length::{max_length_rule, min_length_rule};

use std::fmt;

use crate::config::PolicyConfig;
use crate::input::EvaluationInput;

/// Signature shared by every rule predicate.
/// - `true` - Rule satisfied (or disabled)
/// - `false` - Rule violated
pub type RuleCheck = fn(&PolicyConfig, &EvaluationInput) -> bool;

/// The closed set of policy rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    MinLength,
    MaxLength,
    MinLowers,
    MinUppers,
    MinDigits,
    MinSpecials,
    ForbidOthers,
    ForbidUsername,
    ForbidReuse,
}

impl Rule {
    pub const COUNT: usize = 9;

    pub const ALL: [Rule; Rule::COUNT] = [
        Rule::MinLength,
        Rule::MaxLength,
        Rule::MinLowers,
        Rule::MinUppers,
        Rule::MinDigits,
        Rule::MinSpecials,
        Rule::ForbidOthers,
        Rule::ForbidUsername,
        Rule::ForbidReuse,
    ];

    /// Rule identifier, also used to key the hint shown for it.
    pub fn name(self) -> &'static str {
        match self {
            Rule::MinLength => "min_length",
            Rule::MaxLength => "max_length",
            Rule::MinLowers => "min_lowers",
            Rule::MinUppers => "min_uppers",
            Rule::MinDigits => "min_digits",
            Rule::MinSpecials => "min_specials",
            Rule::ForbidOthers => "forbid_others",
            Rule::ForbidUsername => "forbid_username",
            Rule::ForbidReuse => "forbid_reuse",
        }
    }

    pub fn check(self) -> RuleCheck {
        match self {
            Rule::MinLength => min_length_rule,
            Rule::MaxLength => max_length_rule,
            Rule::MinLowers => min_lowers_rule,
            Rule::MinUppers => min_uppers_rule,
            Rule::MinDigits => min_digits_rule,
            Rule::MinSpecials => min_specials_rule,
            Rule::ForbidOthers => forbid_others_rule,
            Rule::ForbidUsername => forbid_username_rule,
            Rule::ForbidReuse => forbid_reuse_rule,
        }
    }

    /// Position of the rule in [`Rule::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
