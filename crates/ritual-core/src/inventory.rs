//! Read-only views of the socles behind a ritual configuration.

use ritual_types::{ItemStack, RitualConfiguration};
use ritual_world::{ActorResolver, ParticipantActor};

/// Resolve every socle in `configuration` by position, in order.
///
/// Socles that no longer exist resolve to `None`.
pub fn resolve_socles<'w, W>(
    configuration: &RitualConfiguration,
    world: &'w W,
) -> Vec<Option<&'w dyn ParticipantActor>>
where
    W: ActorResolver + ?Sized,
{
    configuration
        .socles()
        .iter()
        .map(|entry| world.resolve(entry.position))
        .collect()
}

/// A snapshot of the content held by each socle of a configuration.
///
/// Slot `i` holds a copy of the stack on the `i`-th socle, or `None` when
/// that socle is gone or empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocleInventory {
    items: Vec<Option<ItemStack>>,
}

impl SocleInventory {
    /// Capture the current content of every socle in `configuration`.
    pub fn capture<W>(configuration: &RitualConfiguration, world: &W) -> Self
    where
        W: ActorResolver + ?Sized,
    {
        let items = resolve_socles(configuration, world)
            .into_iter()
            .map(|socle| {
                socle
                    .and_then(|actor| actor.content())
                    .filter(|stack| !stack.is_empty())
                    .cloned()
            })
            .collect();
        Self { items }
    }

    /// Number of slots (one per socle).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory has no slots.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The stack in slot `index`.
    pub fn get(&self, index: usize) -> Option<&ItemStack> {
        self.items.get(index).and_then(Option::as_ref)
    }

    /// Iterate over the non-empty stacks.
    pub fn stacks(&self) -> impl Iterator<Item = &ItemStack> {
        self.items.iter().flatten()
    }

    /// Whether every slot holds content.
    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(Option::is_some)
    }

    /// Total number of items across all slots.
    pub fn item_count(&self) -> u32 {
        self.stacks()
            .fold(0_u32, |total, stack| total.saturating_add(stack.count))
    }
}

#[cfg(test)]
mod tests {
    use ritual_types::{BlockPos, SocleType};
    use ritual_world::SocleWorld;

    use super::*;
    use crate::config::ScanConfig;
    use crate::examine::examine;

    #[test]
    fn capture_snapshots_contents_in_order() {
        let mut world = SocleWorld::new();
        let a = BlockPos::new(-3, 0, 0);
        let b = BlockPos::new(3, 0, 0);
        assert!(world.place_loaded_socle(a, SocleType::Humble, ItemStack::new("ember", 2)).is_ok());
        assert!(world.place_loaded_socle(b, SocleType::Humble, ItemStack::new("frost", 3)).is_ok());

        let config = examine(&world, BlockPos::ORIGIN, false, &ScanConfig::default());
        let inventory = SocleInventory::capture(&config, &world);

        assert_eq!(inventory.len(), 2);
        assert!(inventory.is_complete());
        assert_eq!(inventory.get(0).map(|s| s.item.as_str()), Some("ember"));
        assert_eq!(inventory.get(1).map(|s| s.item.as_str()), Some("frost"));
        assert_eq!(inventory.item_count(), 5);
    }

    #[test]
    fn missing_socles_leave_empty_slots() {
        let mut world = SocleWorld::new();
        let a = BlockPos::new(-3, 0, 0);
        let b = BlockPos::new(3, 0, 0);
        assert!(world.place_loaded_socle(a, SocleType::Humble, ItemStack::new("ember", 1)).is_ok());
        assert!(world.place_loaded_socle(b, SocleType::Humble, ItemStack::new("frost", 1)).is_ok());
        let config = examine(&world, BlockPos::ORIGIN, false, &ScanConfig::default());

        assert!(world.break_actor(b).is_some());
        let resolved = resolve_socles(&config, &world);
        assert_eq!(resolved.iter().filter(|s| s.is_some()).count(), 1);

        let inventory = SocleInventory::capture(&config, &world);
        assert_eq!(inventory.len(), 2);
        assert!(!inventory.is_complete());
        assert!(inventory.get(1).is_none());
        assert_eq!(inventory.stacks().count(), 1);
    }

    #[test]
    fn default_inventory_is_not_complete() {
        let inventory = SocleInventory::default();
        assert!(inventory.is_empty());
        assert!(!inventory.is_complete());
    }
}
