//! Shared type definitions for the ritual orchestration engine.
//!
//! This crate is the single source of truth for the data model used across
//! the workspace. Everything here is plain data: no world access, no
//! scheduling logic.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for ritual core identifiers
//! - [`enums`] -- Socle types and ritual start outcomes
//! - [`structs`] -- Positions, item stacks, socle entries, and the scanned
//!   ritual configuration

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{SocleType, StartOutcome};
pub use ids::CoreId;
pub use structs::{BlockPos, ItemStack, RitualConfiguration, SocleEntry};
