//! Prototype Registry Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in registry_operations.rs

use super::{ItemId, ItemPrototype};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;

/// The four lookup tables plus lifecycle flags.
///
/// The tables are only ever written together by `register`.
#[derive(Debug, Default)]
pub struct PrototypeRegistryData {
    pub(crate) by_id: FxHashMap<ItemId, Arc<ItemPrototype>>,
    pub(crate) by_name: FxHashMap<String, Arc<ItemPrototype>>,
    pub(crate) id_to_name: FxHashMap<ItemId, String>,
    pub(crate) name_to_id: FxHashMap<String, ItemId>,
    /// Set once built-ins are in
    pub(crate) initiated: bool,
    /// Terminal: no registration or creation after this
    pub(crate) locked: bool,
}

/// One id/name pair of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: ItemId,
    pub name: String,
}
