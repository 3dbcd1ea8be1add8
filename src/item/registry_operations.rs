//! Prototype Registry Operations - DOP Functions
//!
//! Take registry data, return results. No methods.
//! Mutations are all-or-nothing: every check runs before the first insert.

use super::builtin::{AIR_NAME, BUILTIN_PROTOTYPES};
use super::registry_data::{CatalogEntry, PrototypeRegistryData};
use super::{
    BlockBehavior, ItemId, ItemPrototype, ItemStack, PrototypeDefinition, PrototypeKind,
};
use crate::error::{RegistryError, RegistryResult};
use std::sync::Arc;

/// Create empty registry data in the setup phase
pub fn create_registry_data() -> PrototypeRegistryData {
    PrototypeRegistryData::default()
}

/// Register the built-in prototypes. No-op once it has succeeded.
pub fn initialize_builtins(data: &mut PrototypeRegistryData) -> RegistryResult<()> {
    if data.initiated {
        log::debug!("Built-in prototypes already initialized");
        return Ok(());
    }

    if data.locked {
        log::warn!("Refusing to initialize built-in prototypes on a locked registry");
        return Err(RegistryError::RegistrationLocked);
    }

    // Pre-check so a conflicting earlier registration leaves nothing half-done
    for builtin in &BUILTIN_PROTOTYPES {
        check_vacant(data, builtin.id, builtin.name)?;
    }

    for builtin in &BUILTIN_PROTOTYPES {
        let definition = create_simple_item(data, builtin.id, builtin.max_stack)?;
        register(data, builtin.id, builtin.name, definition)?;
    }

    data.initiated = true;
    log::info!(
        "Initialized {} built-in prototypes",
        BUILTIN_PROTOTYPES.len()
    );
    Ok(())
}

/// Freeze the registry. Idempotent and irreversible.
pub fn lock(data: &mut PrototypeRegistryData) {
    if data.locked {
        return;
    }
    data.locked = true;
    log::info!(
        "Prototype registry locked with {} prototypes",
        data.by_id.len()
    );
}

/// Insert a definition under `id` and `name` into all four tables
pub fn register(
    data: &mut PrototypeRegistryData,
    id: ItemId,
    name: &str,
    definition: PrototypeDefinition,
) -> RegistryResult<()> {
    if data.locked {
        log::warn!("Rejected registration of '{}' ({}): registry locked", name, id.0);
        return Err(RegistryError::RegistrationLocked);
    }
    check_vacant(data, id, name)?;
    if definition.id() != id {
        return Err(RegistryError::IdMismatch {
            requested: id,
            definition: definition.id(),
        });
    }

    let prototype = Arc::new(ItemPrototype::from_definition(name.to_string(), definition));
    data.by_id.insert(id, Arc::clone(&prototype));
    data.by_name.insert(name.to_string(), Arc::clone(&prototype));
    data.id_to_name.insert(id, name.to_string());
    data.name_to_id.insert(name.to_string(), id);

    log::debug!(
        "Registered prototype '{}' with ID {} (block: {}, max stack: {})",
        name,
        id.0,
        prototype.is_block(),
        prototype.max_stack()
    );
    Ok(())
}

fn check_vacant(data: &PrototypeRegistryData, id: ItemId, name: &str) -> RegistryResult<()> {
    if data.by_id.contains_key(&id) {
        log::warn!("Rejected registration of '{}': id {} already taken", name, id.0);
        return Err(RegistryError::IdTaken(id));
    }
    if data.by_name.contains_key(name) {
        log::warn!("Rejected registration of id {}: name '{}' already taken", id.0, name);
        return Err(RegistryError::NameTaken(name.to_string()));
    }
    Ok(())
}

fn ensure_unlocked(data: &PrototypeRegistryData) -> RegistryResult<()> {
    if data.locked {
        return Err(RegistryError::CreationLocked);
    }
    Ok(())
}

/// Create an item prototype that does NOT require binary metadata
pub fn create_simple_item(
    data: &PrototypeRegistryData,
    id: ItemId,
    max_stack: u32,
) -> RegistryResult<PrototypeDefinition> {
    ensure_unlocked(data)?;
    create_item(data, id, max_stack, false)
}

/// Create an item prototype
pub fn create_item(
    data: &PrototypeRegistryData,
    id: ItemId,
    max_stack: u32,
    binary_meta_required: bool,
) -> RegistryResult<PrototypeDefinition> {
    ensure_unlocked(data)?;
    Ok(PrototypeDefinition::new(
        id,
        PrototypeKind::Item,
        max_stack,
        binary_meta_required,
    ))
}

/// Create a block prototype that does NOT require binary metadata
pub fn create_simple_block(
    data: &PrototypeRegistryData,
    id: ItemId,
    behavior: Arc<dyn BlockBehavior>,
    max_stack: u32,
) -> RegistryResult<PrototypeDefinition> {
    ensure_unlocked(data)?;
    create_block_prototype(data, id, behavior, max_stack, false)
}

/// Create a block prototype
pub fn create_block_prototype(
    data: &PrototypeRegistryData,
    id: ItemId,
    behavior: Arc<dyn BlockBehavior>,
    max_stack: u32,
    binary_meta_required: bool,
) -> RegistryResult<PrototypeDefinition> {
    ensure_unlocked(data)?;
    Ok(PrototypeDefinition::new(
        id,
        PrototypeKind::Block(behavior),
        max_stack,
        binary_meta_required,
    ))
}

/// Get a prototype by its ID
pub fn get_by_id(data: &PrototypeRegistryData, id: ItemId) -> Option<&Arc<ItemPrototype>> {
    data.by_id.get(&id)
}

/// Get a prototype by its name
pub fn get_by_name<'a>(data: &'a PrototypeRegistryData, name: &str) -> Option<&'a Arc<ItemPrototype>> {
    data.by_name.get(name)
}

/// Get the prototype of an item stack
pub fn get_by_item<'a>(
    data: &'a PrototypeRegistryData,
    item: &ItemStack,
) -> Option<&'a Arc<ItemPrototype>> {
    get_by_id(data, item.id)
}

/// Convert an id to its name, degrading to air when unknown
pub fn id_to_name(data: &PrototypeRegistryData, id: ItemId) -> &str {
    data.id_to_name
        .get(&id)
        .map(String::as_str)
        .unwrap_or(AIR_NAME)
}

/// Convert a name to its id, degrading to air when unknown
pub fn name_to_id(data: &PrototypeRegistryData, name: &str) -> ItemId {
    data.name_to_id.get(name).copied().unwrap_or(ItemId::AIR)
}

/// Check if an id is registered
pub fn is_registered(data: &PrototypeRegistryData, id: ItemId) -> bool {
    data.by_id.contains_key(&id)
}

/// Check if a name is registered
pub fn is_name_registered(data: &PrototypeRegistryData, name: &str) -> bool {
    data.by_name.contains_key(name)
}

/// All id/name pairs ordered by id
pub fn catalog(data: &PrototypeRegistryData) -> Vec<CatalogEntry> {
    let mut entries: Vec<CatalogEntry> = data
        .id_to_name
        .iter()
        .map(|(id, name)| CatalogEntry {
            id: *id,
            name: name.clone(),
        })
        .collect();
    entries.sort_by_key(|entry| entry.id);
    entries
}

/// Whether a stack of `candidate` may merge into a stack of `target`
pub fn can_be_merged_to(candidate: &ItemPrototype, target: Option<&ItemPrototype>) -> bool {
    candidate.can_be_merged_to(target)
}

/// Build an item stack for a prototype id. `count` is not validated.
pub fn new_item_instance(prototype_id: ItemId, count: u32) -> ItemStack {
    ItemStack::new(prototype_id, count)
}
