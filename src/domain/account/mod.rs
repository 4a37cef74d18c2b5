//! Account domain
//!
//! Domain types for the account data model: the persisted entity, input
//! validation, and the storage port the credential service talks to.

mod entity;
mod repository;
mod validation;

pub use entity::{Account, AccountId, NewAccount};
pub use repository::AccountRepository;
pub use validation::{
    validate_email_syntax, validate_password_strength, validate_required, AccountValidationError,
};

#[cfg(test)]
pub use repository::mock::MockAccountRepository;
