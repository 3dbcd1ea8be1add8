//! Item & Block Prototypes
//!
//! Catalog of immutable item/block definitions, keyed by numeric id and
//! by namespaced name. Data lives in `registry_data`, transformations in
//! `registry_operations`; `PrototypeRegistry` is the handle the rest of
//! the server holds.

pub mod builtin;
mod item_id;
pub mod prototype_data;
pub mod registry;
pub mod registry_data;
pub mod registry_operations;
mod stack;

pub use builtin::{BuiltinPrototype, AIR_NAME, BUILTIN_PROTOTYPES};
pub use item_id::ItemId;
pub use prototype_data::{
    BlockBehavior, ItemPrototype, PrototypeDefinition, PrototypeKind, DEFAULT_MAX_STACK,
};
pub use registry::{
    create_shared_registry, freeze_shared_registry, PrototypeRegistry, SharedPrototypeRegistry,
};
pub use registry_data::CatalogEntry;
pub use stack::ItemStack;
