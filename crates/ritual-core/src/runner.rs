//! Multi-core ritual runner.
//!
//! A [`RitualRunner`] owns every ritual core in a world, keyed by
//! [`CoreId`], and advances all of them by one tick per
//! [`RitualRunner::tick`] call. Each core keeps its own single-ritual
//! state machine; the runner only adds bookkeeping: a world tick counter,
//! ritual start timestamps, and per-tick summaries.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use ritual_types::{BlockPos, CoreId, RitualConfiguration, StartOutcome};
use ritual_world::RitualWorld;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::RitualEngineConfig;
use crate::hooks::{ChangeNotifier, RitualHooks};
use crate::scheduler::{RitualCore, TickOutcome};

/// A ritual core with type-erased hooks.
pub type DynRitualCore = RitualCore<Box<dyn RitualHooks>>;

/// Errors that can occur when addressing cores through the runner.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// No core is registered under the id.
    #[error("unknown ritual core: {0}")]
    UnknownCore(CoreId),

    /// A core is already registered at the position.
    #[error("a ritual core already exists at {0}")]
    DuplicatePosition(BlockPos),
}

/// Record of one completed ritual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRecord {
    /// The core that completed.
    pub core_id: CoreId,
    /// Position of that core.
    pub position: BlockPos,
    /// Runner tick on which the ritual finished.
    pub world_tick: u64,
    /// When the ritual was started through this runner, if it was.
    pub started_at: Option<DateTime<Utc>>,
    /// When the ritual finished.
    pub completed_at: DateTime<Utc>,
    /// Whether the completion hook reported a state change.
    pub state_changed: bool,
}

/// Summary of a single runner tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunnerTickSummary {
    /// The runner tick that was executed (1-based).
    pub tick: u64,
    /// Number of cores that executed a ritual tick.
    pub advanced: usize,
    /// Socles signalled this tick, per core.
    pub activations: Vec<(CoreId, BlockPos)>,
    /// Rituals that finished this tick.
    pub completions: Vec<CompletionRecord>,
}

/// Owns and drives every ritual core in a world.
pub struct RitualRunner {
    /// Configuration handed to newly registered cores.
    config: RitualEngineConfig,
    /// Registered cores.
    cores: BTreeMap<CoreId, DynRitualCore>,
    /// Start time of each running ritual started through the runner.
    started_at: BTreeMap<CoreId, DateTime<Utc>>,
    /// Number of runner ticks executed.
    tick: u64,
}

impl core::fmt::Debug for RitualRunner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RitualRunner")
            .field("cores", &self.cores.len())
            .field("running", &self.running_count())
            .field("tick", &self.tick)
            .finish()
    }
}

impl RitualRunner {
    /// Create an empty runner.
    pub const fn new(config: RitualEngineConfig) -> Self {
        Self {
            config,
            cores: BTreeMap::new(),
            started_at: BTreeMap::new(),
            tick: 0,
        }
    }

    /// Register a new core at `position`, optionally scanning around a
    /// different `center`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::DuplicatePosition`] if a core already sits at
    /// `position`.
    pub fn register(
        &mut self,
        position: BlockPos,
        center: Option<BlockPos>,
        hooks: Box<dyn RitualHooks>,
    ) -> Result<CoreId, RunnerError> {
        if self.cores.values().any(|core| core.position() == position) {
            return Err(RunnerError::DuplicatePosition(position));
        }

        let mut core = RitualCore::new(position, hooks, &self.config);
        if let Some(center) = center {
            core = core.with_center(center);
        }

        let id = CoreId::new();
        self.cores.insert(id, core);
        debug!(core_id = %id, %position, "Ritual core registered");
        Ok(id)
    }

    /// Remove a core, dropping any ritual it was running.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::UnknownCore`] if `id` is not registered.
    pub fn unregister(&mut self, id: CoreId) -> Result<DynRitualCore, RunnerError> {
        self.started_at.remove(&id);
        self.cores.remove(&id).ok_or(RunnerError::UnknownCore(id))
    }

    /// Get a registered core.
    pub fn core(&self, id: CoreId) -> Option<&DynRitualCore> {
        self.cores.get(&id)
    }

    /// Get a registered core mutably, e.g. to abort or restore it.
    pub fn core_mut(&mut self, id: CoreId) -> Option<&mut DynRitualCore> {
        self.cores.get_mut(&id)
    }

    /// Number of registered cores.
    pub fn core_count(&self) -> usize {
        self.cores.len()
    }

    /// Number of cores currently running a ritual.
    pub fn running_count(&self) -> usize {
        self.cores.values().filter(|core| core.is_running()).count()
    }

    /// Whether no core is running a ritual.
    pub fn is_idle(&self) -> bool {
        self.running_count() == 0
    }

    /// Number of runner ticks executed so far.
    pub const fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Ask the core `id` to start a ritual.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::UnknownCore`] if `id` is not registered.
    pub fn try_start<R>(
        &mut self,
        id: CoreId,
        world: &dyn RitualWorld,
        rng: &mut R,
        notifier: &mut dyn ChangeNotifier,
    ) -> Result<StartOutcome, RunnerError>
    where
        R: Rng + ?Sized,
    {
        let core = self.cores.get_mut(&id).ok_or(RunnerError::UnknownCore(id))?;
        let outcome = core.try_start(world, rng, notifier);
        if outcome.is_started() {
            self.started_at.insert(id, Utc::now());
        }
        Ok(outcome)
    }

    /// Abort the ritual running on core `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::UnknownCore`] if `id` is not registered.
    pub fn abort(
        &mut self,
        id: CoreId,
        notifier: &mut dyn ChangeNotifier,
    ) -> Result<Option<RitualConfiguration>, RunnerError> {
        let core = self.cores.get_mut(&id).ok_or(RunnerError::UnknownCore(id))?;
        self.started_at.remove(&id);
        Ok(core.abort(notifier))
    }

    /// Advance every core by one tick.
    ///
    /// A core found idle drops its start timestamp, so a core aborted or
    /// restored behind the runner's back never reports a stale one.
    pub fn tick(
        &mut self,
        world: &mut dyn RitualWorld,
        notifier: &mut dyn ChangeNotifier,
    ) -> RunnerTickSummary {
        self.tick = self.tick.saturating_add(1);
        let mut summary = RunnerTickSummary {
            tick: self.tick,
            ..RunnerTickSummary::default()
        };

        for (&id, core) in &mut self.cores {
            match core.tick(world, notifier) {
                TickOutcome::Idle => {
                    self.started_at.remove(&id);
                }
                TickOutcome::Advanced { activated, .. } => {
                    summary.advanced = summary.advanced.saturating_add(1);
                    if let Some(socle) = activated {
                        summary.activations.push((id, socle));
                    }
                }
                TickOutcome::Completed {
                    state_changed,
                    activated,
                } => {
                    summary.advanced = summary.advanced.saturating_add(1);
                    if let Some(socle) = activated {
                        summary.activations.push((id, socle));
                    }
                    summary.completions.push(CompletionRecord {
                        core_id: id,
                        position: core.position(),
                        world_tick: self.tick,
                        started_at: self.started_at.remove(&id),
                        completed_at: Utc::now(),
                        state_changed,
                    });
                }
            }
        }

        if !summary.completions.is_empty() {
            info!(
                tick = self.tick,
                completed = summary.completions.len(),
                still_running = summary.advanced.saturating_sub(summary.completions.len()),
                "Rituals completed"
            );
        }
        summary
    }
}
