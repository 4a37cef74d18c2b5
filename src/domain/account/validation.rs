//! Account input validation

use thiserror::Error;
use validator::ValidateEmail;

/// Errors that can occur during account validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountValidationError {
    #[error("'{0}' cannot be empty")]
    EmptyField(&'static str),

    #[error("Email address has invalid syntax")]
    InvalidEmail,

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("Password must contain at least one lowercase letter")]
    PasswordMissingLowercase,

    #[error("Password must contain at least one uppercase letter")]
    PasswordMissingUppercase,

    #[error("Password must contain at least one digit")]
    PasswordMissingDigit,

    #[error("Password must contain at least one symbol")]
    PasswordMissingSymbol,
}

const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate that a required field is present and non-empty
pub fn validate_required(field: &'static str, value: &str) -> Result<(), AccountValidationError> {
    if value.is_empty() {
        return Err(AccountValidationError::EmptyField(field));
    }

    Ok(())
}

/// Validate email syntax
pub fn validate_email_syntax(email: &str) -> Result<(), AccountValidationError> {
    if !email.validate_email() {
        return Err(AccountValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a password against the strength policy
///
/// Rules:
/// - Minimum 8 characters
/// - At least one lowercase letter
/// - At least one uppercase letter
/// - At least one digit
/// - At least one symbol
pub fn validate_password_strength(password: &str) -> Result<(), AccountValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AccountValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(AccountValidationError::PasswordMissingLowercase);
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(AccountValidationError::PasswordMissingUppercase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AccountValidationError::PasswordMissingDigit);
    }

    if !password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        return Err(AccountValidationError::PasswordMissingSymbol);
    }

    Ok(())
}
