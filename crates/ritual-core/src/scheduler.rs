//! The ritual scheduler: a tick-driven state machine owned by each core.
//!
//! A [`RitualCore`] is either idle or running exactly one ritual:
//!
//! - **Idle -> Running** via [`RitualCore::try_start`]: scan the socles
//!   around the ritual center, ask the hooks for permission, shuffle the
//!   socle order once with the injected random source, and start at tick 0.
//! - **Running -> Running** via [`RitualCore::tick`]: every
//!   `activation_interval` ticks the next socle in the shuffled order is
//!   resolved by position and told to start contributing; the per-tick
//!   hook runs unconditionally; the tick counter advances.
//! - **Running -> Idle** when the counter reaches the configuration
//!   length: the run state is cleared first, then the completion hook
//!   runs, or at any tick through [`RitualCore::abort`].
//!
//! Every transition notifies the host exactly once, so a run state
//! persisted on notification never outlives the ritual it describes.
//!
//! Socles that vanish between scan and activation are skipped silently.
//! The scheduler never blocks and never spawns; the host drives it with
//! one [`RitualCore::tick`] call per time step.

use rand::Rng;
use rand::seq::SliceRandom;
use ritual_types::{BlockPos, RitualConfiguration, StartOutcome};
use ritual_world::RitualWorld;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{RitualEngineConfig, ScanConfig};
use crate::examine;
use crate::hooks::{ChangeNotifier, RitualHooks};

/// Progress of a running ritual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveRitual {
    /// The scanned configuration, socles in their shuffled activation order.
    configuration: RitualConfiguration,
    /// Index of the next tick to execute.
    tick: u32,
    /// Index of the most recently activated socle.
    last_activated: Option<usize>,
}

impl ActiveRitual {
    /// The configuration being run.
    pub const fn configuration(&self) -> &RitualConfiguration {
        &self.configuration
    }

    /// Index of the next tick to execute.
    pub const fn tick(&self) -> u32 {
        self.tick
    }

    /// Index of the most recently activated socle, if any.
    pub const fn last_activated(&self) -> Option<usize> {
        self.last_activated
    }
}

/// Run state of a ritual core.
///
/// Serializable so the host can persist it when notified and hand it back
/// through [`RitualCore::restore`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RitualRunState {
    /// No ritual is active.
    #[default]
    Idle,
    /// A ritual is in progress.
    Running(ActiveRitual),
}

impl RitualRunState {
    /// Whether a ritual is in progress.
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }

    /// The active ritual, if any.
    pub const fn active(&self) -> Option<&ActiveRitual> {
        match self {
            Self::Idle => None,
            Self::Running(active) => Some(active),
        }
    }

    /// The active configuration, if any.
    pub fn configuration(&self) -> Option<&RitualConfiguration> {
        self.active().map(ActiveRitual::configuration)
    }

    /// Next tick to execute, or `-1` when idle.
    pub fn ritual_tick(&self) -> i64 {
        self.active().map_or(-1, |active| i64::from(active.tick))
    }

    /// Index of the last activated socle, or `-1` when idle or before the
    /// first activation.
    pub fn last_activated_index(&self) -> i64 {
        self.active()
            .and_then(|active| active.last_activated)
            .map_or(-1, |index| i64::try_from(index).unwrap_or(i64::MAX))
    }
}

/// What a single [`RitualCore::tick`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No ritual is running; nothing happened.
    Idle,
    /// The ritual executed `tick` and keeps running.
    Advanced {
        /// The tick index that was executed.
        tick: u32,
        /// Socle signalled to begin contributing during this tick.
        activated: Option<BlockPos>,
    },
    /// The ritual executed its final tick and the core is idle again.
    Completed {
        /// Whether the completion hook reported a state change.
        state_changed: bool,
        /// Socle signalled to begin contributing during this tick.
        activated: Option<BlockPos>,
    },
}

/// A ritual core: owns its run state and drives one ritual at a time.
#[derive(Debug)]
pub struct RitualCore<H> {
    /// Position of the core itself; activated socles channel toward it.
    position: BlockPos,
    /// Center the socle scan runs around.
    center: BlockPos,
    /// Scan and scoring parameters.
    scan: ScanConfig,
    /// Ticks between socle activations.
    activation_interval: u32,
    /// Ritual-specific behaviour.
    hooks: H,
    /// Current run state.
    state: RitualRunState,
}

impl<H: RitualHooks> RitualCore<H> {
    /// Create an idle core at `position`, scanning around its own position.
    pub fn new(position: BlockPos, hooks: H, config: &RitualEngineConfig) -> Self {
        Self {
            position,
            center: position,
            scan: config.scan.clone(),
            activation_interval: config.schedule.activation_interval,
            hooks,
            state: RitualRunState::Idle,
        }
    }

    /// Scan around `center` instead of the core's own position.
    #[must_use]
    pub const fn with_center(mut self, center: BlockPos) -> Self {
        self.center = center;
        self
    }

    /// Position of the core.
    pub const fn position(&self) -> BlockPos {
        self.position
    }

    /// Center of the socle scan.
    pub const fn ritual_center(&self) -> BlockPos {
        self.center
    }

    /// Current run state.
    pub const fn state(&self) -> &RitualRunState {
        &self.state
    }

    /// Whether a ritual is in progress.
    pub const fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// The ritual hooks.
    pub const fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Mutable access to the ritual hooks.
    pub const fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Scan the socles around this core's ritual center.
    pub fn examine(&self, world: &dyn RitualWorld, include_empty: bool) -> RitualConfiguration {
        examine::examine(world, self.center, include_empty, &self.scan)
    }

    /// Try to start a ritual.
    ///
    /// Returns [`StartOutcome::Rejected`] without scanning if a ritual is
    /// already running, [`StartOutcome::NoTarget`] if no socle holds
    /// content, and [`StartOutcome::Rejected`] if the start hook declines.
    /// Only [`StartOutcome::Started`] mutates the core, and it notifies the
    /// host so the new run state can be persisted.
    pub fn try_start<R>(
        &mut self,
        world: &dyn RitualWorld,
        rng: &mut R,
        notifier: &mut dyn ChangeNotifier,
    ) -> StartOutcome
    where
        R: Rng + ?Sized,
    {
        if let RitualRunState::Running(active) = &self.state {
            warn!(
                core = %self.position,
                tick = active.tick,
                "Ritual start requested while a ritual is already running"
            );
            return StartOutcome::Rejected;
        }

        let configuration = self.examine(world, false);
        if configuration.is_empty() {
            debug!(core = %self.position, center = %self.center, "No socles to target");
            return StartOutcome::NoTarget;
        }

        if !self.hooks.on_start(&configuration, world) {
            info!(
                core = %self.position,
                socles = configuration.len(),
                stability = configuration.stability(),
                "Ritual start declined"
            );
            return StartOutcome::Rejected;
        }

        let (stability, length, mut socles) = configuration.into_parts();
        socles.shuffle(rng);

        info!(
            core = %self.position,
            socles = socles.len(),
            stability,
            length,
            "Ritual started"
        );

        self.state = RitualRunState::Running(ActiveRitual {
            configuration: RitualConfiguration::new(stability, length, socles),
            tick: 0,
            last_activated: None,
        });
        notifier.mark_changed();
        StartOutcome::Started
    }

    /// Advance the running ritual by one tick.
    ///
    /// Does nothing and returns [`TickOutcome::Idle`] when no ritual is
    /// running. On the final tick the run state is cleared before the
    /// completion hook runs, and the host is notified once whatever the
    /// hook reports.
    pub fn tick(
        &mut self,
        world: &mut dyn RitualWorld,
        notifier: &mut dyn ChangeNotifier,
    ) -> TickOutcome {
        let RitualRunState::Running(active) = &mut self.state else {
            return TickOutcome::Idle;
        };

        let tick = active.tick;
        let mut activated = None;

        if is_activation_tick(tick, self.activation_interval) {
            let next = active
                .last_activated
                .map_or(0, |index| index.saturating_add(1));

            if let Some(entry) = active.configuration.socles().get(next) {
                active.last_activated = Some(next);
                let socle_pos = entry.position;

                if let Some(socle) = world.resolve_mut(socle_pos) {
                    socle.begin_contribution(self.position);
                    activated = Some(socle_pos);
                    debug!(core = %self.position, tick, index = next, socle = %socle_pos, "Socle activated");
                } else {
                    debug!(core = %self.position, tick, index = next, socle = %socle_pos, "Socle vanished, skipping");
                }
            }
        }

        self.hooks.on_tick(tick, world);

        active.tick = tick.saturating_add(1);
        if active.tick < active.configuration.length() {
            return TickOutcome::Advanced { tick, activated };
        }

        self.state = RitualRunState::Idle;
        let state_changed = self.hooks.on_complete(world);
        notifier.mark_changed();
        info!(core = %self.position, ticks = tick.saturating_add(1), state_changed, "Ritual completed");

        TickOutcome::Completed {
            state_changed,
            activated,
        }
    }

    /// Clear the run state without running any hook.
    ///
    /// Safe at any tick. Notifies the host if a ritual was running and
    /// returns the configuration of the aborted ritual.
    pub fn abort(&mut self, notifier: &mut dyn ChangeNotifier) -> Option<RitualConfiguration> {
        match std::mem::take(&mut self.state) {
            RitualRunState::Idle => None,
            RitualRunState::Running(active) => {
                info!(core = %self.position, tick = active.tick, "Ritual aborted");
                notifier.mark_changed();
                Some(active.configuration)
            }
        }
    }

    /// Reinstate a previously persisted run state.
    pub fn restore(&mut self, state: RitualRunState) {
        debug!(core = %self.position, running = state.is_running(), "Run state restored");
        self.state = state;
    }
}

/// Whether socle activation is due on `tick`. A zero interval never
/// activates.
fn is_activation_tick(tick: u32, interval: u32) -> bool {
    tick.checked_rem(interval).is_some_and(|remainder| remainder == 0)
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use ritual_types::{ItemStack, SocleType};
    use ritual_world::SocleWorld;

    use super::*;
    use crate::hooks::{ChangeCounter, NoOpNotifier};

    #[derive(Debug)]
    struct RecordingHooks {
        accept: bool,
        changed_on_complete: bool,
        starts: u32,
        ticks: Vec<u32>,
        completions: u32,
    }

    impl RecordingHooks {
        const fn new(accept: bool, changed_on_complete: bool) -> Self {
            Self {
                accept,
                changed_on_complete,
                starts: 0,
                ticks: Vec::new(),
                completions: 0,
            }
        }
    }

    impl RitualHooks for RecordingHooks {
        fn on_start(&mut self, _configuration: &RitualConfiguration, _world: &dyn RitualWorld) -> bool {
            self.starts += 1;
            self.accept
        }

        fn on_tick(&mut self, tick: u32, _world: &mut dyn RitualWorld) {
            self.ticks.push(tick);
        }

        fn on_complete(&mut self, _world: &mut dyn RitualWorld) -> bool {
            self.completions += 1;
            self.changed_on_complete
        }
    }

    const SQUARE: [BlockPos; 4] = [
        BlockPos::new(3, 0, 0),
        BlockPos::new(-3, 0, 0),
        BlockPos::new(0, 0, 3),
        BlockPos::new(0, 0, -3),
    ];

    fn square_world() -> SocleWorld {
        let mut world = SocleWorld::new();
        for pos in SQUARE {
            assert!(
                world
                    .place_loaded_socle(pos, SocleType::Humble, ItemStack::new("amethyst", 1))
                    .is_ok()
            );
        }
        world
    }

    fn make_core(accept: bool, changed: bool) -> RitualCore<RecordingHooks> {
        RitualCore::new(
            BlockPos::ORIGIN,
            RecordingHooks::new(accept, changed),
            &RitualEngineConfig::default(),
        )
    }

    fn started_core(world: &SocleWorld, notifier: &mut ChangeCounter) -> RitualCore<RecordingHooks> {
        let mut core = make_core(true, true);
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(core.try_start(world, &mut rng, notifier), StartOutcome::Started);
        core
    }

    #[test]
    fn no_socles_means_no_target() {
        let world = SocleWorld::new();
        let mut core = make_core(true, true);
        let mut notifier = ChangeCounter::new();
        let mut rng = SmallRng::seed_from_u64(1);

        assert_eq!(core.try_start(&world, &mut rng, &mut notifier), StartOutcome::NoTarget);
        assert_eq!(core.state(), &RitualRunState::Idle);
        assert_eq!(core.hooks().starts, 0);
        assert!(!notifier.is_dirty());
    }

    #[test]
    fn empty_socles_mean_no_target() {
        let mut world = SocleWorld::new();
        for pos in SQUARE {
            assert!(world.place_socle(pos, SocleType::Humble).is_ok());
        }
        let mut core = make_core(true, true);
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            core.try_start(&world, &mut rng, &mut NoOpNotifier),
            StartOutcome::NoTarget
        );
    }

    #[test]
    fn declined_start_is_rejected() {
        let world = square_world();
        let mut core = make_core(false, true);
        let mut notifier = ChangeCounter::new();
        let mut rng = SmallRng::seed_from_u64(1);

        assert_eq!(core.try_start(&world, &mut rng, &mut notifier), StartOutcome::Rejected);
        assert!(!core.is_running());
        assert_eq!(core.hooks().starts, 1);
        assert!(!notifier.is_dirty());
    }

    #[test]
    fn start_initializes_run_state() {
        let world = square_world();
        let mut notifier = ChangeCounter::new();
        let core = started_core(&world, &mut notifier);

        assert!(core.is_running());
        assert_eq!(core.state().ritual_tick(), 0);
        assert_eq!(core.state().last_activated_index(), -1);
        assert_eq!(core.state().configuration().map(RitualConfiguration::length), Some(60));
        assert_eq!(notifier.count(), 1);
    }

    #[test]
    fn start_shuffles_a_permutation_of_the_scan() {
        let world = square_world();
        let core = started_core(&world, &mut ChangeCounter::new());

        let mut shuffled: Vec<BlockPos> = core
            .state()
            .configuration()
            .map(|c| c.socles().iter().map(|e| e.position).collect())
            .unwrap();
        let mut scanned: Vec<BlockPos> = core
            .examine(&world, false)
            .socles()
            .iter()
            .map(|e| e.position)
            .collect();
        shuffled.sort();
        scanned.sort();
        assert_eq!(shuffled, scanned);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let world = square_world();
        let a = started_core(&world, &mut ChangeCounter::new());
        let b = started_core(&world, &mut ChangeCounter::new());
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn start_while_running_is_rejected_without_side_effects() {
        let mut world = square_world();
        let mut notifier = ChangeCounter::new();
        let mut core = started_core(&world, &mut notifier);
        for _ in 0..3 {
            core.tick(&mut world, &mut notifier);
        }
        let before = core.state().clone();

        let mut rng = SmallRng::seed_from_u64(99);
        assert_eq!(core.try_start(&world, &mut rng, &mut notifier), StartOutcome::Rejected);
        assert_eq!(core.state(), &before);
        assert_eq!(core.state().ritual_tick(), 3);
        assert_eq!(core.hooks().starts, 1);
        assert_eq!(notifier.count(), 1);
    }

    #[test]
    fn activation_advances_one_socle_every_five_ticks() {
        let mut world = square_world();
        let mut core = started_core(&world, &mut ChangeCounter::new());

        let mut previous = -1_i64;
        for executed in 0_i64..59 {
            let outcome = core.tick(&mut world, &mut NoOpNotifier);
            let index = core.state().last_activated_index();

            let expected = (executed / 5).min(3);
            assert_eq!(index, expected, "after tick {executed}");
            assert!(index >= previous);
            assert!(index - previous <= 1);
            if executed % 5 == 0 && executed < 20 {
                assert!(matches!(outcome, TickOutcome::Advanced { activated: Some(_), .. }));
            } else {
                assert!(matches!(outcome, TickOutcome::Advanced { activated: None, .. }));
            }
            previous = index;
        }
    }

    #[test]
    fn activated_socles_channel_toward_the_core() {
        let mut world = square_world();
        let mut core = started_core(&world, &mut ChangeCounter::new());

        let outcome = core.tick(&mut world, &mut NoOpNotifier);
        let TickOutcome::Advanced {
            tick: 0,
            activated: Some(first),
        } = outcome
        else {
            panic!("unexpected outcome {outcome:?}");
        };

        let extraction = world.socle(first).and_then(|s| s.extraction);
        assert_eq!(extraction.map(|e| e.target), Some(BlockPos::ORIGIN));
        assert_eq!(
            core.state()
                .configuration()
                .and_then(|c| c.socles().first())
                .map(|e| e.position),
            Some(first)
        );
    }

    #[test]
    fn completes_after_exactly_length_ticks() {
        let mut world = square_world();
        let mut notifier = ChangeCounter::new();
        let mut core = started_core(&world, &mut notifier);

        for _ in 0..59 {
            let outcome = core.tick(&mut world, &mut notifier);
            assert!(matches!(outcome, TickOutcome::Advanced { .. }));
        }
        assert!(core.is_running());

        let outcome = core.tick(&mut world, &mut notifier);
        assert!(matches!(outcome, TickOutcome::Completed { state_changed: true, .. }));
        assert_eq!(core.state(), &RitualRunState::Idle);
        assert_eq!(core.state().ritual_tick(), -1);
        assert_eq!(core.state().last_activated_index(), -1);
        assert!(core.state().configuration().is_none());
        assert_eq!(core.hooks().completions, 1);
        assert_eq!(core.hooks().ticks, (0..60).collect::<Vec<u32>>());
        assert_eq!(notifier.count(), 2);

        for _ in 0..10 {
            assert_eq!(core.tick(&mut world, &mut notifier), TickOutcome::Idle);
        }
        assert_eq!(core.hooks().completions, 1);
        assert_eq!(core.hooks().ticks.len(), 60);
    }

    #[test]
    fn completion_notifies_even_without_hook_changes() {
        let mut world = square_world();
        let mut notifier = ChangeCounter::new();
        let mut core = make_core(true, false);
        let mut rng = SmallRng::seed_from_u64(3);
        assert!(core.try_start(&world, &mut rng, &mut notifier).is_started());

        let mut completed = 0;
        for _ in 0..60 {
            if let TickOutcome::Completed { state_changed, .. } = core.tick(&mut world, &mut notifier) {
                assert!(!state_changed);
                completed += 1;
            }
        }
        assert_eq!(completed, 1);
        assert_eq!(notifier.count(), 2);
    }

    /// Host loop that snapshots the run state whenever the core reports a
    /// change, like a persisting host would.
    fn tick_and_persist(
        core: &mut RitualCore<RecordingHooks>,
        world: &mut SocleWorld,
        notifier: &mut ChangeCounter,
        persisted: &mut RitualRunState,
    ) {
        core.tick(world, notifier);
        if notifier.is_dirty() {
            *persisted = core.state().clone();
            notifier.clear();
        }
    }

    #[test]
    fn persisted_state_after_completion_cannot_complete_again() {
        let mut world = square_world();
        let mut notifier = ChangeCounter::new();
        let mut core = make_core(true, false);
        let mut rng = SmallRng::seed_from_u64(21);
        assert!(core.try_start(&world, &mut rng, &mut notifier).is_started());

        let mut persisted = core.state().clone();
        notifier.clear();
        for _ in 0..60 {
            tick_and_persist(&mut core, &mut world, &mut notifier, &mut persisted);
        }
        assert_eq!(core.hooks().completions, 1);
        assert_eq!(persisted, RitualRunState::Idle);

        let mut revived = make_core(true, false);
        revived.restore(persisted);
        for _ in 0..100 {
            assert_eq!(revived.tick(&mut world, &mut NoOpNotifier), TickOutcome::Idle);
        }
        assert_eq!(revived.hooks().completions, 0);
    }

    #[test]
    fn persisted_state_after_abort_is_idle() {
        let mut world = square_world();
        let mut notifier = ChangeCounter::new();
        let mut core = started_core(&world, &mut notifier);
        let mut persisted = core.state().clone();
        notifier.clear();
        for _ in 0..8 {
            tick_and_persist(&mut core, &mut world, &mut notifier, &mut persisted);
        }
        assert!(persisted.is_running());

        assert!(core.abort(&mut notifier).is_some());
        assert!(notifier.is_dirty());
        persisted = core.state().clone();

        let mut revived = make_core(true, true);
        revived.restore(persisted);
        assert!(!revived.is_running());
        assert_eq!(revived.tick(&mut world, &mut NoOpNotifier), TickOutcome::Idle);
    }

    #[test]
    fn vanished_socle_is_skipped_silently() {
        let mut world = square_world();
        let mut core = started_core(&world, &mut ChangeCounter::new());

        let order: Vec<BlockPos> = core
            .state()
            .configuration()
            .map(|c| c.socles().iter().map(|e| e.position).collect())
            .unwrap();
        let first = *order.first().unwrap();
        assert!(world.remove_socle(first).is_ok());

        let outcome = core.tick(&mut world, &mut NoOpNotifier);
        assert_eq!(outcome, TickOutcome::Advanced { tick: 0, activated: None });
        assert_eq!(core.state().last_activated_index(), 0);

        for _ in 1..5 {
            core.tick(&mut world, &mut NoOpNotifier);
        }
        let outcome = core.tick(&mut world, &mut NoOpNotifier);
        assert_eq!(
            outcome,
            TickOutcome::Advanced {
                tick: 5,
                activated: order.get(1).copied()
            }
        );
    }

    #[test]
    fn abort_clears_state_without_hooks() {
        let mut world = square_world();
        let mut notifier = ChangeCounter::new();
        let mut core = started_core(&world, &mut notifier);
        for _ in 0..12 {
            core.tick(&mut world, &mut notifier);
        }

        let aborted = core.abort(&mut notifier);
        assert_eq!(aborted.map(|c| c.len()), Some(4));
        assert!(!core.is_running());
        assert_eq!(core.hooks().completions, 0);
        assert_eq!(notifier.count(), 2);
        assert_eq!(core.tick(&mut world, &mut notifier), TickOutcome::Idle);
        assert!(core.abort(&mut notifier).is_none());
        assert_eq!(notifier.count(), 2);

        let mut rng = SmallRng::seed_from_u64(11);
        assert_eq!(core.try_start(&world, &mut rng, &mut notifier), StartOutcome::Started);
    }

    #[test]
    fn custom_center_moves_the_scan() {
        let mut world = SocleWorld::new();
        let far = BlockPos::new(40, 0, 40);
        for pos in SQUARE {
            let shifted = pos.offset(far.x, far.y, far.z);
            assert!(
                world
                    .place_loaded_socle(shifted, SocleType::Humble, ItemStack::new("amethyst", 1))
                    .is_ok()
            );
        }

        let mut rng = SmallRng::seed_from_u64(5);
        let mut at_origin = make_core(true, true);
        assert_eq!(
            at_origin.try_start(&world, &mut rng, &mut NoOpNotifier),
            StartOutcome::NoTarget
        );

        let mut centered = make_core(true, true).with_center(far);
        assert_eq!(centered.ritual_center(), far);
        assert_eq!(centered.position(), BlockPos::ORIGIN);
        assert_eq!(
            centered.try_start(&world, &mut rng, &mut NoOpNotifier),
            StartOutcome::Started
        );
    }

    #[test]
    fn run_state_survives_persistence() {
        let mut world = square_world();
        let mut core = started_core(&world, &mut ChangeCounter::new());
        for _ in 0..17 {
            core.tick(&mut world, &mut NoOpNotifier);
        }

        let json = serde_json::to_string(core.state()).unwrap();
        let restored: RitualRunState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.ritual_tick(), 17);
        assert_eq!(restored.last_activated_index(), 3);

        let mut revived = make_core(true, true);
        revived.restore(restored);
        let mut completions = 0;
        for _ in 0..43 {
            if matches!(revived.tick(&mut world, &mut NoOpNotifier), TickOutcome::Completed { .. }) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert!(!revived.is_running());
    }

    #[test]
    fn idle_state_serializes_with_tag() {
        let json = serde_json::to_value(RitualRunState::Idle).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "idle" }));
    }

    #[test]
    fn zero_interval_never_activates() {
        assert!(!is_activation_tick(0, 0));
        assert!(is_activation_tick(0, 5));
        assert!(is_activation_tick(10, 5));
        assert!(!is_activation_tick(11, 5));
    }
}
