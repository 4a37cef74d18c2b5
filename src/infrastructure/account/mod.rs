//! Account infrastructure module
//!
//! Implementations behind the account domain ports: bcrypt password
//! hashing, an in-memory store, a PostgreSQL store, and the credential
//! service that ties them together.

mod password;
mod postgres_repository;
mod repository;
mod service;

pub use password::{BcryptHasher, PasswordHasher, HASH_COST};
pub use postgres_repository::PostgresAccountRepository;
pub use repository::InMemoryAccountRepository;
pub use service::{CredentialService, SignupRequest};
