//! Prototype Data
//!
//! Immutable definitions of item and block kinds. Fields are private and
//! set once at construction; callers only ever read them.

use super::{ItemId, ItemStack};
use std::fmt;
use std::sync::Arc;

/// Default number of units that fit in one stack
pub const DEFAULT_MAX_STACK: u32 = 16;

/// Handler governing how a block kind acts in the world.
///
/// Implementations live outside the registry; prototypes only hold a
/// shared reference to one.
pub trait BlockBehavior: fmt::Debug + Send + Sync {}

/// Item or block variant of a prototype
#[derive(Debug, Clone)]
pub enum PrototypeKind {
    Item,
    Block(Arc<dyn BlockBehavior>),
}

/// Unnamed prototype produced by the registry factories
#[derive(Debug, Clone)]
pub struct PrototypeDefinition {
    id: ItemId,
    kind: PrototypeKind,
    max_stack: u32,
    binary_meta_required: bool,
}

impl PrototypeDefinition {
    pub(crate) fn new(
        id: ItemId,
        kind: PrototypeKind,
        max_stack: u32,
        binary_meta_required: bool,
    ) -> Self {
        Self {
            id,
            kind,
            max_stack,
            binary_meta_required,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> &PrototypeKind {
        &self.kind
    }

    pub fn is_block(&self) -> bool {
        matches!(self.kind, PrototypeKind::Block(_))
    }

    pub fn max_stack(&self) -> u32 {
        self.max_stack
    }

    pub fn is_binary_meta_required(&self) -> bool {
        self.binary_meta_required
    }
}

/// A registered, named prototype
#[derive(Debug)]
pub struct ItemPrototype {
    name: String,
    definition: PrototypeDefinition,
}

impl ItemPrototype {
    pub(crate) fn from_definition(name: String, definition: PrototypeDefinition) -> Self {
        Self { name, definition }
    }

    pub fn id(&self) -> ItemId {
        self.definition.id
    }

    /// Namespaced name, e.g. `cloudland:stone`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_block(&self) -> bool {
        self.definition.is_block()
    }

    /// Behavior handler, present exactly when this is a block prototype
    pub fn block_behavior(&self) -> Option<&Arc<dyn BlockBehavior>> {
        match &self.definition.kind {
            PrototypeKind::Block(behavior) => Some(behavior),
            PrototypeKind::Item => None,
        }
    }

    pub fn max_stack(&self) -> u32 {
        self.definition.max_stack
    }

    pub fn is_binary_meta_required(&self) -> bool {
        self.definition.binary_meta_required
    }

    pub fn definition(&self) -> &PrototypeDefinition {
        &self.definition
    }

    /// Whether a stack of this prototype may merge into a stack of `target`.
    ///
    /// Only the id and the binary meta flag matter. Prototypes carrying
    /// binary meta never merge, not even with themselves.
    pub fn can_be_merged_to(&self, target: Option<&ItemPrototype>) -> bool {
        match target {
            Some(target) => target.id() == self.id() && !self.is_binary_meta_required(),
            None => false,
        }
    }

    pub fn new_item_instance(&self, count: u32) -> ItemStack {
        ItemStack::new(self.id(), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Inert;
    impl BlockBehavior for Inert {}

    fn prototype(id: u32, name: &str, binary_meta_required: bool) -> ItemPrototype {
        ItemPrototype::from_definition(
            name.to_string(),
            PrototypeDefinition::new(
                ItemId(id),
                PrototypeKind::Item,
                DEFAULT_MAX_STACK,
                binary_meta_required,
            ),
        )
    }

    #[test]
    fn test_merge_same_prototype() {
        let plain = prototype(1, "test:plain", false);
        assert!(plain.can_be_merged_to(Some(&plain)));
    }

    #[test]
    fn test_binary_meta_never_merges() {
        let tagged = prototype(1, "test:tagged", true);
        assert!(!tagged.can_be_merged_to(Some(&tagged)));
    }

    #[test]
    fn test_merge_requires_target() {
        let plain = prototype(1, "test:plain", false);
        assert!(!plain.can_be_merged_to(None));
    }

    #[test]
    fn test_merge_ignores_stack_size_and_name() {
        let a = prototype(9, "test:a", false);
        let b = ItemPrototype::from_definition(
            "test:b".to_string(),
            PrototypeDefinition::new(ItemId(9), PrototypeKind::Item, 64, false),
        );
        let c = prototype(10, "test:c", false);
        assert!(a.can_be_merged_to(Some(&b)));
        assert!(!a.can_be_merged_to(Some(&c)));
    }

    #[test]
    fn test_block_behavior_present_only_for_blocks() {
        let behavior: Arc<dyn BlockBehavior> = Arc::new(Inert);
        let block = ItemPrototype::from_definition(
            "test:block".to_string(),
            PrototypeDefinition::new(ItemId(2), PrototypeKind::Block(behavior), 8, false),
        );
        assert!(block.is_block());
        assert!(block.block_behavior().is_some());

        let item = prototype(3, "test:item", false);
        assert!(!item.is_block());
        assert!(item.block_behavior().is_none());
    }

    #[test]
    fn test_new_item_instance() {
        let item = prototype(5, "test:item", false);
        let stack = item.new_item_instance(200);
        assert_eq!(stack.id, ItemId(5));
        assert_eq!(stack.count, 200);
    }
}
