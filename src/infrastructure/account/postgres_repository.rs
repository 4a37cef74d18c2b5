//! PostgreSQL account repository implementation

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::{Account, AccountError, AccountId, AccountRepository, NewAccount};

/// Schema for the accounts table
///
/// The unique constraint on email is the source of truth for account
/// uniqueness under concurrent signups.
const ACCOUNTS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    phone_number TEXT NOT NULL,
    gender TEXT NOT NULL,
    date_of_birth DATE NOT NULL,
    membership_status TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)
"#;

/// PostgreSQL implementation of AccountRepository
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the accounts table if it does not exist
    pub async fn migrate(&self) -> Result<(), AccountError> {
        sqlx::query(ACCOUNTS_SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AccountError::storage(format!("Failed to create accounts table: {}", e))
            })?;

        Ok(())
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, phone_number, gender,
                   date_of_birth, membership_status, created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::storage(format!("Failed to find account: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_account(&row))),
            None => Ok(None),
        }
    }

    async fn create(&self, record: NewAccount) -> Result<Account, AccountError> {
        let id = AccountId::generate();

        let row = sqlx::query(
            r#"
            INSERT INTO accounts (id, name, email, password_hash, phone_number,
                                  gender, date_of_birth, membership_status,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
            RETURNING created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.password_hash)
        .bind(&record.phone_number)
        .bind(&record.gender)
        .bind(record.date_of_birth)
        .bind(&record.membership_status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if is_unique_violation(&msg) {
                AccountError::account_exists(&record.email)
            } else {
                AccountError::storage(format!("Failed to create account: {}", e))
            }
        })?;

        let created_at: DateTime<Utc> = row.get("created_at");
        let updated_at: DateTime<Utc> = row.get("updated_at");

        Ok(Account::from_parts(id, record, created_at, updated_at))
    }
}

fn is_unique_violation(message: &str) -> bool {
    message.contains("duplicate key") || message.contains("unique constraint")
}

fn row_to_account(row: &sqlx::postgres::PgRow) -> Account {
    let id: Uuid = row.get("id");
    let date_of_birth: NaiveDate = row.get("date_of_birth");
    let created_at: DateTime<Utc> = row.get("created_at");
    let updated_at: DateTime<Utc> = row.get("updated_at");

    let record = NewAccount {
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        phone_number: row.get("phone_number"),
        gender: row.get("gender"),
        date_of_birth,
        membership_status: row.get("membership_status"),
    };

    Account::from_parts(AccountId::from(id), record, created_at, updated_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_detection() {
        assert!(is_unique_violation(
            "error returned from database: duplicate key value violates unique constraint \"accounts_email_key\""
        ));
        assert!(!is_unique_violation("connection refused"));
    }

    #[test]
    fn test_schema_enforces_email_uniqueness() {
        assert!(ACCOUNTS_SCHEMA.contains("email TEXT NOT NULL UNIQUE"));
    }
}
