//! Submission gate - the final check before a password change is carried out.

use thiserror::Error;

use crate::config::PolicyConfig;
use crate::evaluator::evaluate;
use crate::input::EvaluationInput;
use crate::rules::Rule;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("The new password and its confirmation don't match.")]
    ConfirmationMismatch,
    #[error("The requirements on password strength are not fulfilled. Please choose another password.")]
    PolicyViolation { unsatisfied: Vec<Rule> },
}

/// Checks a submitted form.
///
/// Does not trust the client side verdict: required fields, confirmation and
/// policy are checked again, in that order.
///
/// # Errors
///
/// Returns the first failed check.
pub fn check_submission(
    config: Option<&PolicyConfig>,
    input: &EvaluationInput,
) -> Result<(), SubmissionError> {
    let required = [
        ("username", input.username()),
        ("old_password", input.old_password()),
        ("confirm_password", input.confirmation()),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(SubmissionError::MissingField(*field));
    }

    if input.new_password() != input.confirmation() {
        return Err(SubmissionError::ConfirmationMismatch);
    }

    let result = evaluate(config, input);
    if !result.fulfilled {
        #[cfg(feature = "tracing")]
        tracing::info!(
            "Rejected password change for {}: {} policy rule(s) unsatisfied",
            input.username(),
            result.unsatisfied().len()
        );
        return Err(SubmissionError::PolicyViolation {
            unsatisfied: result.unsatisfied(),
        });
    }

    Ok(())
}
