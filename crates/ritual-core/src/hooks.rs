//! Ritual hooks and change notification.
//!
//! A [`RitualCore`] delegates everything ritual-specific to a
//! [`RitualHooks`] strategy: whether a scanned configuration may start,
//! what happens every tick, and what the ritual produces when it ends.
//! The core reports state that must be persisted through a
//! [`ChangeNotifier`] supplied by the host.
//!
//! [`RitualCore`]: crate::scheduler::RitualCore

use ritual_types::RitualConfiguration;
use ritual_world::RitualWorld;

/// Per-ritual behaviour plugged into a ritual core.
pub trait RitualHooks {
    /// Called when a ritual is about to start.
    ///
    /// Returns `true` if the ritual may start with `configuration` given
    /// the current world state. The configuration is not yet shuffled.
    fn on_start(&mut self, configuration: &RitualConfiguration, world: &dyn RitualWorld) -> bool;

    /// Called once every tick while the ritual runs, with the tick index
    /// (0-based) being executed.
    fn on_tick(&mut self, tick: u32, world: &mut dyn RitualWorld);

    /// Called once when the ritual has finished, after the run state has
    /// been cleared.
    ///
    /// Returns `true` if persistent state was modified and the host must
    /// be notified.
    fn on_complete(&mut self, world: &mut dyn RitualWorld) -> bool;
}

impl<H: RitualHooks + ?Sized> RitualHooks for Box<H> {
    fn on_start(&mut self, configuration: &RitualConfiguration, world: &dyn RitualWorld) -> bool {
        (**self).on_start(configuration, world)
    }

    fn on_tick(&mut self, tick: u32, world: &mut dyn RitualWorld) {
        (**self).on_tick(tick, world);
    }

    fn on_complete(&mut self, world: &mut dyn RitualWorld) -> bool {
        (**self).on_complete(world)
    }
}

/// Host callback signalling that core state must be persisted or
/// replicated.
pub trait ChangeNotifier {
    /// Mark the owning core as changed.
    fn mark_changed(&mut self);
}

/// A notifier that ignores every change.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotifier;

impl ChangeNotifier for NoOpNotifier {
    fn mark_changed(&mut self) {}
}

/// A notifier that counts changes, for hosts that flush lazily.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCounter {
    count: u32,
}

impl ChangeCounter {
    /// Create a counter at zero.
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Number of changes recorded.
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Whether any change is pending.
    pub const fn is_dirty(&self) -> bool {
        self.count > 0
    }

    /// Reset after the host has flushed.
    pub const fn clear(&mut self) {
        self.count = 0;
    }
}

impl ChangeNotifier for ChangeCounter {
    fn mark_changed(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}
