//! Item stack value handed out by prototypes
//!
//! Only the prototype id and the count live here. Bounds on `count`
//! belong to inventory code, not to the registry.

use super::ItemId;
use serde::{Deserialize, Serialize};

/// A runtime stack of items of one prototype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    pub id: ItemId,
    pub count: u32,
}

impl ItemStack {
    pub fn new(id: ItemId, count: u32) -> Self {
        Self { id, count }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
