//! Error types for the prototype registry
//!
//! Every mutating registry operation returns `RegistryResult`. Lookups
//! never fail.

use crate::item::ItemId;

/// Errors raised while mutating the registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unable to register item definitions after server started, consider using a mod")]
    RegistrationLocked,

    #[error("can not create item prototypes after server started, consider using a mod")]
    CreationLocked,

    #[error("item id {0:?} already taken")]
    IdTaken(ItemId),

    #[error("item name '{0}' already taken")]
    NameTaken(String),

    #[error("prototype id {definition:?} does not match registration id {requested:?}")]
    IdMismatch { requested: ItemId, definition: ItemId },
}

impl RegistryError {
    /// The registry was locked when a mutation was attempted
    pub fn is_locked_violation(&self) -> bool {
        matches!(
            self,
            RegistryError::RegistrationLocked | RegistryError::CreationLocked
        )
    }

    /// The id or name was already registered
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, RegistryError::IdTaken(_) | RegistryError::NameTaken(_))
    }
}

/// Type alias for Results of registry mutations
pub type RegistryResult<T> = Result<T, RegistryError>;
