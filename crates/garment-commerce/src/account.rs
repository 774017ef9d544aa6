//! Simulated sign-in.
//!
//! There is no account backend. Any well-formed email and non-empty password
//! produce a [`UserRecord`], which the presentation layer stores with the
//! session.

use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Sign-in form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the form: both fields filled, email shaped like `local@domain.tld`.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(CommerceError::MissingCredentials);
        }
        if !is_valid_email(&self.email) {
            return Err(CommerceError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Validate and produce the signed-in user.
    pub fn sign_in(&self) -> Result<UserRecord, CommerceError> {
        self.validate()?;
        Ok(UserRecord::from_email(&self.email))
    }
}

/// One `@`, no whitespace, and a dot inside the domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The signed-in shopper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub email: String,
    /// Display name: the part of the email before `@`.
    pub name: String,
}

impl UserRecord {
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            email: email.to_string(),
            name,
        }
    }
}
