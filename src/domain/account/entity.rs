//! Account entity and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account identifier, assigned by the store on create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID value
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Insert record for a new account
///
/// The password is already hashed by the time one of these exists; the
/// store assigns the identifier and timestamps on create.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub membership_status: String,
}

/// Persisted account record
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Unique identifier for the account
    id: AccountId,
    name: String,
    /// Globally unique across all accounts
    email: String,
    /// Bcrypt hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    phone_number: String,
    gender: String,
    date_of_birth: NaiveDate,
    membership_status: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Account {
    /// Create an account with fresh timestamps
    pub fn new(id: AccountId, record: NewAccount) -> Self {
        let now = Utc::now();
        Self::from_parts(id, record, now, now)
    }

    /// Rebuild an account from stored parts
    pub fn from_parts(
        id: AccountId,
        record: NewAccount,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: record.name,
            email: record.email,
            password_hash: record.password_hash,
            phone_number: record.phone_number,
            gender: record.gender,
            date_of_birth: record.date_of_birth,
            membership_status: record.membership_status,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn membership_status(&self) -> &str {
        &self.membership_status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
