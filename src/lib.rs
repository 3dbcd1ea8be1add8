// Cloudland prototype registry
//
// Catalog of item and block prototypes for the Cloudland server.
// - item: prototype data, registry data + operations, the registry handle
// - bootstrap: built-ins -> content packs -> lock
// - config: TOML bootstrap settings
//
// Build one registry at startup with `bootstrap_registry`, then hand the
// returned `Arc<PrototypeRegistry>` to every subsystem that needs lookups.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod item;

pub use bootstrap::{bootstrap_registry, ContentPack};
pub use config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use item::{
    create_shared_registry, freeze_shared_registry, BlockBehavior, CatalogEntry, ItemId,
    ItemPrototype, ItemStack, PrototypeDefinition, PrototypeKind, PrototypeRegistry,
    SharedPrototypeRegistry, AIR_NAME, DEFAULT_MAX_STACK,
};
