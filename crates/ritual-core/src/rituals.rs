//! Concrete rituals.

use ritual_types::{BlockPos, ItemStack, RitualConfiguration};
use ritual_world::RitualWorld;
use tracing::{debug, info};

use crate::hooks::RitualHooks;
use crate::inventory::SocleInventory;

/// Fuses the content of every socle into the core.
///
/// The ritual only starts when the layout is stable enough and every socle
/// carries an ingredient. On completion it consumes whatever is still on
/// the socles; socles broken mid-ritual simply contribute nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct InfusionRitual {
    /// Minimum stability accepted at start.
    min_stability: f64,
    /// Socles taking part in the current ritual.
    socles: Vec<BlockPos>,
    /// Ticks observed during the current ritual.
    elapsed_ticks: u32,
    /// Stacks consumed by the last completed ritual.
    last_yield: Vec<ItemStack>,
    /// Number of completed rituals.
    completed: u32,
}

impl InfusionRitual {
    /// Create an infusion ritual that requires at least `min_stability`.
    pub const fn new(min_stability: f64) -> Self {
        Self {
            min_stability,
            socles: Vec::new(),
            elapsed_ticks: 0,
            last_yield: Vec::new(),
            completed: 0,
        }
    }

    /// Stacks consumed by the last completed ritual.
    pub fn last_yield(&self) -> &[ItemStack] {
        &self.last_yield
    }

    /// Number of rituals completed so far.
    pub const fn completed_rituals(&self) -> u32 {
        self.completed
    }

    /// Ticks observed during the current or last ritual.
    pub const fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }
}

impl RitualHooks for InfusionRitual {
    fn on_start(&mut self, configuration: &RitualConfiguration, world: &dyn RitualWorld) -> bool {
        if configuration.stability() < self.min_stability {
            debug!(
                stability = configuration.stability(),
                required = self.min_stability,
                "Infusion rejected: layout too unstable"
            );
            return false;
        }

        let inventory = SocleInventory::capture(configuration, world);
        if !inventory.is_complete() {
            debug!(
                socles = inventory.len(),
                loaded = inventory.stacks().count(),
                "Infusion rejected: socle without ingredient"
            );
            return false;
        }

        self.socles = configuration.socles().iter().map(|entry| entry.position).collect();
        self.elapsed_ticks = 0;
        true
    }

    fn on_tick(&mut self, _tick: u32, _world: &mut dyn RitualWorld) {
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
    }

    fn on_complete(&mut self, world: &mut dyn RitualWorld) -> bool {
        self.last_yield = std::mem::take(&mut self.socles)
            .into_iter()
            .filter_map(|position| world.resolve_mut(position).and_then(|socle| socle.take_content()))
            .collect();
        self.completed = self.completed.saturating_add(1);

        info!(
            consumed = self.last_yield.len(),
            ticks = self.elapsed_ticks,
            "Infusion finished"
        );
        !self.last_yield.is_empty()
    }
}
