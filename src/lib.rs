//! Member account credential service
//!
//! A minimal user-account data model for a web application: the
//! `Account` entity plus two operations, `signup` and `login`, layered
//! over a pluggable account store. Signup validates input, enforces
//! account uniqueness by email, and stores passwords only as bcrypt
//! hashes; login verifies a password against the stored hash.

pub mod domain;
pub mod infrastructure;

pub use domain::{Account, AccountError, AccountId, AccountRepository, NewAccount};
pub use infrastructure::account::{
    BcryptHasher, CredentialService, InMemoryAccountRepository, PasswordHasher,
    PostgresAccountRepository, SignupRequest,
};
