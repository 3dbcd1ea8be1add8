//! Built-in prototypes shipped with the server
//!
//! Registered by `initialize_builtins` before any content pack runs.
//! All of them are plain items without block behavior.

use super::{ItemId, DEFAULT_MAX_STACK};

/// Name every unresolvable id falls back to
pub const AIR_NAME: &str = "cloudland:air";

/// A hard-coded prototype entry
#[derive(Debug, Clone, Copy)]
pub struct BuiltinPrototype {
    pub id: ItemId,
    pub name: &'static str,
    pub max_stack: u32,
}

pub const BUILTIN_PROTOTYPES: [BuiltinPrototype; 8] = [
    // Air never stacks
    BuiltinPrototype { id: ItemId::AIR, name: AIR_NAME, max_stack: 0 },
    BuiltinPrototype { id: ItemId::STONE, name: "cloudland:stone", max_stack: DEFAULT_MAX_STACK },
    BuiltinPrototype { id: ItemId::DIRT, name: "cloudland:dirt", max_stack: DEFAULT_MAX_STACK },
    BuiltinPrototype { id: ItemId::GRASS, name: "cloudland:grass", max_stack: DEFAULT_MAX_STACK },
    BuiltinPrototype { id: ItemId::SAND, name: "cloudland:sand", max_stack: DEFAULT_MAX_STACK },
    BuiltinPrototype { id: ItemId::WATER, name: "cloudland:water", max_stack: DEFAULT_MAX_STACK },
    BuiltinPrototype { id: ItemId::LOG, name: "cloudland:log", max_stack: DEFAULT_MAX_STACK },
    BuiltinPrototype { id: ItemId::LEAVES, name: "cloudland:leaves", max_stack: DEFAULT_MAX_STACK },
];
