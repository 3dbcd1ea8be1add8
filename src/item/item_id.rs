use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable numeric identifier of an item or block prototype
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ItemId(pub u32);

impl Default for ItemId {
    fn default() -> Self {
        ItemId::AIR
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ItemId::AIR => write!(f, "Air"),
            ItemId::STONE => write!(f, "Stone"),
            ItemId::DIRT => write!(f, "Dirt"),
            ItemId::GRASS => write!(f, "Grass"),
            ItemId::SAND => write!(f, "Sand"),
            ItemId::WATER => write!(f, "Water"),
            ItemId::LOG => write!(f, "Log"),
            ItemId::LEAVES => write!(f, "Leaves"),
            _ => write!(f, "Item({})", self.0),
        }
    }
}

impl From<u32> for ItemId {
    fn from(raw: u32) -> Self {
        ItemId(raw)
    }
}

impl ItemId {
    pub const AIR: ItemId = ItemId(0);
    pub const STONE: ItemId = ItemId(1);
    pub const DIRT: ItemId = ItemId(2);
    pub const GRASS: ItemId = ItemId(3);
    pub const SAND: ItemId = ItemId(4);
    pub const WATER: ItemId = ItemId(5);
    pub const LOG: ItemId = ItemId(6);
    pub const LEAVES: ItemId = ItemId(7);

    /// Create a new ItemId from a raw u32 value
    pub const fn new(id: u32) -> Self {
        ItemId(id)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}
