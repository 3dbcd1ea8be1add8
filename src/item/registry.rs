use super::registry_data::{CatalogEntry, PrototypeRegistryData};
use super::registry_operations as ops;
use super::{BlockBehavior, ItemId, ItemPrototype, ItemStack, PrototypeDefinition};
use crate::error::RegistryResult;
use parking_lot::RwLock;
use std::sync::Arc;

/// Catalog of every item and block prototype known to the server.
///
/// Lifecycle is `new -> setup -> locked`. During setup built-ins and
/// content packs register definitions; once locked the registry is
/// read-only for the rest of the process and can be shared freely.
#[derive(Debug, Default)]
pub struct PrototypeRegistry {
    data: PrototypeRegistryData,
}

impl PrototypeRegistry {
    /// Create an empty registry in the setup phase
    pub fn new() -> Self {
        Self {
            data: ops::create_registry_data(),
        }
    }

    /// Create a registry with the built-ins already registered
    pub fn with_builtins() -> RegistryResult<Self> {
        let mut registry = Self::new();
        registry.initialize_builtins()?;
        Ok(registry)
    }

    pub fn initialize_builtins(&mut self) -> RegistryResult<()> {
        ops::initialize_builtins(&mut self.data)
    }

    pub fn lock(&mut self) {
        ops::lock(&mut self.data)
    }

    pub fn is_locked(&self) -> bool {
        self.data.locked
    }

    pub fn is_initiated(&self) -> bool {
        self.data.initiated
    }

    pub fn register(
        &mut self,
        id: ItemId,
        name: &str,
        definition: PrototypeDefinition,
    ) -> RegistryResult<()> {
        ops::register(&mut self.data, id, name, definition)
    }

    pub fn create_simple_item(&self, id: ItemId, max_stack: u32) -> RegistryResult<PrototypeDefinition> {
        ops::create_simple_item(&self.data, id, max_stack)
    }

    pub fn create_item(
        &self,
        id: ItemId,
        max_stack: u32,
        binary_meta_required: bool,
    ) -> RegistryResult<PrototypeDefinition> {
        ops::create_item(&self.data, id, max_stack, binary_meta_required)
    }

    pub fn create_simple_block(
        &self,
        id: ItemId,
        behavior: Arc<dyn BlockBehavior>,
        max_stack: u32,
    ) -> RegistryResult<PrototypeDefinition> {
        ops::create_simple_block(&self.data, id, behavior, max_stack)
    }

    pub fn create_block_prototype(
        &self,
        id: ItemId,
        behavior: Arc<dyn BlockBehavior>,
        max_stack: u32,
        binary_meta_required: bool,
    ) -> RegistryResult<PrototypeDefinition> {
        ops::create_block_prototype(&self.data, id, behavior, max_stack, binary_meta_required)
    }

    pub fn get_by_id(&self, id: ItemId) -> Option<&Arc<ItemPrototype>> {
        ops::get_by_id(&self.data, id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Arc<ItemPrototype>> {
        ops::get_by_name(&self.data, name)
    }

    pub fn get_by_item(&self, item: &ItemStack) -> Option<&Arc<ItemPrototype>> {
        ops::get_by_item(&self.data, item)
    }

    /// Registered name of `id`, or `cloudland:air` when unknown
    pub fn id_to_name(&self, id: ItemId) -> &str {
        ops::id_to_name(&self.data, id)
    }

    /// Registered id of `name`, or the air id when unknown
    pub fn name_to_id(&self, name: &str) -> ItemId {
        ops::name_to_id(&self.data, name)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        ops::is_registered(&self.data, id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        ops::is_name_registered(&self.data, name)
    }

    pub fn len(&self) -> usize {
        self.data.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.by_id.is_empty()
    }

    pub fn catalog(&self) -> Vec<CatalogEntry> {
        ops::catalog(&self.data)
    }

    pub fn can_be_merged_to(&self, candidate: &ItemPrototype, target: Option<&ItemPrototype>) -> bool {
        ops::can_be_merged_to(candidate, target)
    }

    pub fn new_item_instance(&self, prototype_id: ItemId, count: u32) -> ItemStack {
        ops::new_item_instance(prototype_id, count)
    }
}

/// Registry shared between threads during setup (Arc<RwLock<>>)
pub type SharedPrototypeRegistry = Arc<RwLock<PrototypeRegistry>>;

/// Create a shared registry for concurrent registration during setup
pub fn create_shared_registry() -> SharedPrototypeRegistry {
    Arc::new(RwLock::new(PrototypeRegistry::new()))
}

/// Lock the shared registry and hand it out as a lock-free read-only catalog.
///
/// Other clones of `shared` still see the locked registry through the
/// RwLock; the returned snapshot shares the same prototypes.
pub fn freeze_shared_registry(shared: &SharedPrototypeRegistry) -> Arc<PrototypeRegistry> {
    let mut guard = shared.write();
    guard.lock();
    let frozen = std::mem::take(&mut *guard);
    let frozen = Arc::new(frozen);
    *guard = PrototypeRegistry::clone_locked(&frozen);
    frozen
}

impl PrototypeRegistry {
    fn clone_locked(source: &PrototypeRegistry) -> PrototypeRegistry {
        let data = PrototypeRegistryData {
            by_id: source.data.by_id.clone(),
            by_name: source.data.by_name.clone(),
            id_to_name: source.data.id_to_name.clone(),
            name_to_id: source.data.name_to_id.clone(),
            initiated: source.data.initiated,
            locked: true,
        };
        PrototypeRegistry { data }
    }
}
