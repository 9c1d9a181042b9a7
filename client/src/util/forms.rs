//! Input validation for the auth forms.
//!
//! Validation failures are returned per field so pages can render each
//! message inline next to its input. They never abort the page.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;

pub const MIN_PASSWORD_LEN: usize = 6;

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";

/// Field name to message, one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field`; the first message per field wins.
    pub fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Trimmed, validated login credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Validate the login form. The password is not trimmed.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginInput, FieldErrors> {
    let mut errors = FieldErrors::new();
    let email = check_email(email, &mut errors);

    if password.is_empty() {
        errors.insert("password", PASSWORD_REQUIRED);
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password", PASSWORD_TOO_SHORT);
    }

    if errors.is_empty() {
        Ok(LoginInput { email, password: password.to_owned() })
    } else {
        Err(errors)
    }
}

/// Validate the forgot-password form, returning the trimmed email.
///
/// # Errors
///
/// Returns the per-field messages when the email is missing or malformed.
pub fn validate_forgot_password_input(email: &str) -> Result<String, FieldErrors> {
    let mut errors = FieldErrors::new();
    let email = check_email(email, &mut errors);
    if errors.is_empty() { Ok(email) } else { Err(errors) }
}

fn check_email(raw: &str, errors: &mut FieldErrors) -> String {
    let email = raw.trim();
    if email.is_empty() {
        errors.insert("email", EMAIL_REQUIRED);
    } else if !is_plausible_email(email) {
        errors.insert("email", EMAIL_INVALID);
    }
    email.to_owned()
}

/// One `@`, a non-empty local part, and a dotted domain without whitespace.
#[must_use]
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}
