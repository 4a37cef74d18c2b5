//! Credential service for account signup and login

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::account::{
    validate_email_syntax, validate_password_strength, validate_required,
};
use crate::domain::{Account, AccountError, AccountRepository, NewAccount};

use super::password::PasswordHasher;

/// Request for creating a new account
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub gender: String,
    pub date_of_birth: Option<NaiveDate>,
    pub membership_status: String,
}

/// Service for account registration and authentication
///
/// Holds its collaborators by dependency injection; construct one per
/// process and share it, there is no global registry.
#[derive(Debug)]
pub struct CredentialService<R: AccountRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: AccountRepository, H: PasswordHasher> CredentialService<R, H> {
    /// Create a new credential service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new account
    ///
    /// Validation short-circuits on the first failure: required fields,
    /// email syntax, password strength, then the duplicate check.
    pub async fn signup(&self, request: SignupRequest) -> Result<Account, AccountError> {
        let date_of_birth = validate_signup_input(&request)?;

        // The store's unique constraint is the real guard against a
        // concurrent signup race; this check gives a clean error on the
        // common path.
        if self.repository.email_exists(&request.email).await? {
            return Err(AccountError::account_exists(&request.email));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let record = NewAccount {
            name: request.name,
            email: request.email,
            password_hash,
            phone_number: request.phone_number,
            gender: request.gender,
            date_of_birth,
            membership_status: request.membership_status,
        };

        let account = self.repository.create(record).await?;

        info!(id = %account.id(), email = %account.email(), "Account created");

        Ok(account)
    }

    /// Authenticate against a stored account
    ///
    /// Never modifies the account; a single lookup and hash comparison.
    pub async fn login(&self, email: &str, password: &str) -> Result<Account, AccountError> {
        require("email", email)?;
        require("password", password)?;

        let account = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        if !self.hasher.verify(password, account.password_hash()) {
            debug!(email = %email, "Password mismatch");
            return Err(AccountError::InvalidCredentials);
        }

        Ok(account)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), AccountError> {
    validate_required(field, value).map_err(|_| AccountError::missing_field(field))
}

fn validate_signup_input(request: &SignupRequest) -> Result<NaiveDate, AccountError> {
    require("name", &request.name)?;
    require("email", &request.email)?;
    require("password", &request.password)?;
    require("phone_number", &request.phone_number)?;
    require("gender", &request.gender)?;
    let date_of_birth = request
        .date_of_birth
        .ok_or_else(|| AccountError::missing_field("date_of_birth"))?;
    require("membership_status", &request.membership_status)?;

    validate_email_syntax(&request.email)
        .map_err(|_| AccountError::invalid_email(&request.email))?;

    validate_password_strength(&request.password)
        .map_err(|e| AccountError::weak_password(e.to_string()))?;

    Ok(date_of_birth)
}
