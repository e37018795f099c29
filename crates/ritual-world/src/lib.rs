//! Socle placement, spatial queries, and distance statistics for the ritual
//! engine.
//!
//! The ritual scanner and scheduler never own the socles they work with.
//! They see the world only through the narrow traits in [`access`], which
//! the embedding host implements. [`SocleWorld`] is the in-memory
//! implementation used by the engine binary and the test suites.
//!
//! # Modules
//!
//! - [`access`] -- [`SpatialIndex`], [`ActorResolver`], and
//!   [`ParticipantActor`]: the collaborator interfaces.
//! - [`error`] -- Error types for world mutations.
//! - [`geometry`] -- Euclidean distance, mean, and population standard
//!   deviation.
//! - [`socle`] -- [`SocleState`], the participant actor with held content
//!   and extraction progress.
//! - [`socle_world`] -- [`SocleWorld`], a marker index plus socle storage.
//!
//! [`SpatialIndex`]: access::SpatialIndex
//! [`ActorResolver`]: access::ActorResolver
//! [`ParticipantActor`]: access::ParticipantActor
//! [`SocleState`]: socle::SocleState
//! [`SocleWorld`]: socle_world::SocleWorld

pub mod access;
pub mod error;
pub mod geometry;
pub mod socle;
pub mod socle_world;

// Re-export primary types at crate root.
pub use access::{ActorResolver, ParticipantActor, RitualWorld, SpatialIndex};
pub use error::WorldError;
pub use socle::{Extraction, SocleState};
pub use socle_world::SocleWorld;
