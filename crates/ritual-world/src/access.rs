//! Collaborator interfaces between the ritual engine and its host world.
//!
//! The scanner reads socle markers through a [`SpatialIndex`] and resolves
//! the socles behind them through an [`ActorResolver`]. Resolution happens
//! by position every time: socles can be broken between ticks, so no
//! caller ever holds on to a [`ParticipantActor`] reference.

use ritual_types::{BlockPos, ItemStack, SocleType};

/// Marker lookup over the world.
pub trait SpatialIndex {
    /// Return the positions of all socle markers within `radius` blocks of
    /// `center`.
    ///
    /// When `same_elevation_only` is set, only markers whose `y` equals the
    /// center's are returned. The order must be stable for a given world
    /// state.
    fn query_markers(&self, center: BlockPos, radius: u32, same_elevation_only: bool)
    -> Vec<BlockPos>;

    /// Return the socle type of the marker at `position`, if any.
    fn socle_type(&self, position: BlockPos) -> Option<SocleType>;
}

/// A socle actor that can contribute to a ritual.
pub trait ParticipantActor {
    /// Whether the socle currently holds a non-empty item stack.
    fn has_content(&self) -> bool;

    /// The held item stack, if any.
    fn content(&self) -> Option<&ItemStack>;

    /// Remove and return the held item stack.
    fn take_content(&mut self) -> Option<ItemStack>;

    /// Start channelling the held content toward `target`.
    fn begin_contribution(&mut self, target: BlockPos);
}

/// Position-based lookup of live socle actors.
pub trait ActorResolver {
    /// Resolve the actor at `position`. Returns `None` if it no longer
    /// exists.
    fn resolve(&self, position: BlockPos) -> Option<&dyn ParticipantActor>;

    /// Mutable variant of [`resolve`](Self::resolve).
    fn resolve_mut(&mut self, position: BlockPos) -> Option<&mut dyn ParticipantActor>;
}

/// Everything the ritual engine needs from a host world.
pub trait RitualWorld: SpatialIndex + ActorResolver {}

impl<T: SpatialIndex + ActorResolver + ?Sized> RitualWorld for T {}
