use thiserror::Error;

/// Core domain errors for account operations
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Please add all fields: '{field}' is missing")]
    MissingField { field: String },

    #[error("Email not valid: '{email}'")]
    InvalidEmail { email: String },

    #[error("Password not strong enough: {message}")]
    WeakPassword { message: String },

    #[error("An account already exists for '{email}'")]
    AccountExists { email: String },

    /// Wording matches what login surfaces to users.
    #[error("Incorrect email")]
    AccountNotFound,

    #[error("Incorrect password")]
    InvalidCredentials,

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl AccountError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
            email: email.into(),
        }
    }

    pub fn weak_password(message: impl Into<String>) -> Self {
        Self::WeakPassword {
            message: message.into(),
        }
    }

    pub fn account_exists(email: impl Into<String>) -> Self {
        Self::AccountExists {
            email: email.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_error() {
        let error = AccountError::missing_field("email");
        assert_eq!(
            error.to_string(),
            "Please add all fields: 'email' is missing"
        );
    }

    #[test]
    fn test_account_exists_error() {
        let error = AccountError::account_exists("ann@example.com");
        assert_eq!(
            error.to_string(),
            "An account already exists for 'ann@example.com'"
        );
    }

    #[test]
    fn test_login_errors_keep_user_facing_wording() {
        assert_eq!(AccountError::AccountNotFound.to_string(), "Incorrect email");
        assert_eq!(
            AccountError::InvalidCredentials.to_string(),
            "Incorrect password"
        );
    }

    #[test]
    fn test_storage_error() {
        let error = AccountError::storage("connection refused");
        assert_eq!(error.to_string(), "Storage error: connection refused");
    }
}
