//! In-memory account repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{Account, AccountError, AccountId, AccountRepository, NewAccount};

/// In-memory implementation of AccountRepository, keyed by email
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(email).cloned())
    }

    async fn create(&self, record: NewAccount) -> Result<Account, AccountError> {
        // Uniqueness check and insert happen under one write lock, so
        // concurrent signups cannot both pass the check.
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&record.email) {
            return Err(AccountError::account_exists(&record.email));
        }

        let account = Account::new(AccountId::generate(), record);
        accounts.insert(account.email().to_string(), account.clone());

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn test_record(email: &str) -> NewAccount {
        NewAccount {
            name: "Ann".to_string(),
            email: email.to_string(),
            password_hash: "hashed_password".to_string(),
            phone_number: "555-0100".to_string(),
            gender: "f".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            membership_status: "gold".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let repo = InMemoryAccountRepository::new();

        let account = repo.create(test_record("ann@example.com")).await.unwrap();

        assert_eq!(account.email(), "ann@example.com");
        assert_eq!(account.created_at(), account.updated_at());
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let repo = InMemoryAccountRepository::new();
        let created = repo.create(test_record("ann@example.com")).await.unwrap();

        let found = repo.find_by_email("ann@example.com").await.unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().id(), created.id());

        let missing = repo.find_by_email("bob@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryAccountRepository::new();

        repo.create(test_record("ann@example.com")).await.unwrap();

        let result = repo.create(test_record("ann@example.com")).await;
        assert!(matches!(result, Err(AccountError::AccountExists { .. })));
    }

    #[tokio::test]
    async fn test_distinct_ids() {
        let repo = InMemoryAccountRepository::new();

        let first = repo.create(test_record("ann@example.com")).await.unwrap();
        let second = repo.create(test_record("bob@example.com")).await.unwrap();

        assert_ne!(first.id(), second.id());
    }

    #[tokio::test]
    async fn test_email_exists() {
        let repo = InMemoryAccountRepository::new();

        assert!(!repo.email_exists("ann@example.com").await.unwrap());

        repo.create(test_record("ann@example.com")).await.unwrap();

        assert!(repo.email_exists("ann@example.com").await.unwrap());
    }
}
