//! Form input - the four values read from the password change form.

use secrecy::{ExposeSecret, SecretString};

/// Snapshot of the password change form at the moment of evaluation.
///
/// Password fields are kept as [`SecretString`] so they never show up in
/// `Debug` output. Nothing is retained between evaluations.
#[derive(Debug)]
pub struct EvaluationInput {
    username: String,
    old_password: SecretString,
    new_password: SecretString,
    confirmation: SecretString,
}

impl EvaluationInput {
    pub fn new(
        username: impl Into<String>,
        old_password: impl Into<String>,
        new_password: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            old_password: secret(old_password.into()),
            new_password: secret(new_password.into()),
            confirmation: secret(confirmation.into()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn old_password(&self) -> &str {
        self.old_password.expose_secret()
    }

    pub fn new_password(&self) -> &str {
        self.new_password.expose_secret()
    }

    pub fn confirmation(&self) -> &str {
        self.confirmation.expose_secret()
    }
}

fn secret(value: String) -> SecretString {
    SecretString::new(value.into())
}
