//! Socle scanning, stability scoring, and the tick-driven ritual scheduler.
//!
//! A ritual core looks at the socles arranged around it, scores the layout
//! for stability, and then runs a fixed-length ritual one tick at a time,
//! activating one socle every few ticks until all of them contributed.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `ritual-config.yaml` into
//!   strongly-typed structs.
//! - [`examine`] -- The socle scan and stability scoring.
//! - [`hooks`] -- [`RitualHooks`] strategy trait and [`ChangeNotifier`].
//! - [`inventory`] -- Position-based socle resolution and
//!   [`SocleInventory`] snapshots.
//! - [`rituals`] -- Concrete rituals ([`InfusionRitual`]).
//! - [`runner`] -- [`RitualRunner`], driving many cores per world tick.
//! - [`scheduler`] -- [`RitualCore`], the per-core state machine.
//!
//! [`RitualHooks`]: hooks::RitualHooks
//! [`ChangeNotifier`]: hooks::ChangeNotifier
//! [`SocleInventory`]: inventory::SocleInventory
//! [`InfusionRitual`]: rituals::InfusionRitual
//! [`RitualRunner`]: runner::RitualRunner
//! [`RitualCore`]: scheduler::RitualCore

pub mod config;
pub mod examine;
pub mod hooks;
pub mod inventory;
pub mod rituals;
pub mod runner;
pub mod scheduler;

pub use config::{ConfigError, RitualEngineConfig};
pub use examine::examine;
pub use hooks::{ChangeCounter, ChangeNotifier, NoOpNotifier, RitualHooks};
pub use inventory::SocleInventory;
pub use rituals::InfusionRitual;
pub use runner::{RitualRunner, RunnerError, RunnerTickSummary};
pub use scheduler::{RitualCore, RitualRunState, TickOutcome};
