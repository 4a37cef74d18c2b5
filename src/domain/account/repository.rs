//! Account repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Account, NewAccount};
use crate::domain::AccountError;

/// Repository trait for account storage
///
/// Implementations must enforce email uniqueness on `create`; the
/// service's pre-check cannot close the window between check and write.
#[async_trait]
pub trait AccountRepository: Send + Sync + Debug {
    /// Find an account by its email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;

    /// Persist a new account, assigning its identifier and timestamps
    async fn create(&self, record: NewAccount) -> Result<Account, AccountError>;

    /// Check whether an account exists for an email
    async fn email_exists(&self, email: &str) -> Result<bool, AccountError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
