//! In-memory socle world: a marker index plus the socle actors behind it.
//!
//! Markers and actors are stored separately. A marker can outlive its
//! actor (for instance when the socle block entity is destroyed but the
//! point of interest has not been cleared yet), which is exactly the
//! situation the scanner and scheduler must tolerate.

use std::collections::BTreeMap;

use ritual_types::{BlockPos, ItemStack, SocleType};
use tracing::debug;

use crate::access::{ActorResolver, ParticipantActor, SpatialIndex};
use crate::error::WorldError;
use crate::geometry;
use crate::socle::SocleState;

/// Socle markers and socle actors, keyed by position.
#[derive(Debug, Clone, Default)]
pub struct SocleWorld {
    /// Socle markers (points of interest) with their type.
    markers: BTreeMap<BlockPos, SocleType>,
    /// Live socle actors.
    socles: BTreeMap<BlockPos, SocleState>,
}

impl SocleWorld {
    /// Create an empty world.
    pub const fn new() -> Self {
        Self {
            markers: BTreeMap::new(),
            socles: BTreeMap::new(),
        }
    }

    // -------------------------------------------------------------------
    // Placement
    // -------------------------------------------------------------------

    /// Place an empty socle (marker and actor) at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::PositionOccupied`] if a marker already exists
    /// there.
    pub fn place_socle(&mut self, position: BlockPos, socle_type: SocleType) -> Result<(), WorldError> {
        if self.markers.contains_key(&position) {
            return Err(WorldError::PositionOccupied(position));
        }
        self.markers.insert(position, socle_type);
        self.socles.insert(position, SocleState::new(socle_type));
        debug!(%position, ?socle_type, "Socle placed");
        Ok(())
    }

    /// Place a socle already holding `item`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::PositionOccupied`] if a marker already exists
    /// there.
    pub fn place_loaded_socle(
        &mut self,
        position: BlockPos,
        socle_type: SocleType,
        item: ItemStack,
    ) -> Result<(), WorldError> {
        self.place_socle(position, socle_type)?;
        self.insert_item(position, item)?;
        Ok(())
    }

    /// Remove the socle at `position` entirely, marker included.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::SocleNotFound`] if there is no marker there.
    pub fn remove_socle(&mut self, position: BlockPos) -> Result<Option<SocleState>, WorldError> {
        if self.markers.remove(&position).is_none() {
            return Err(WorldError::SocleNotFound(position));
        }
        debug!(%position, "Socle removed");
        Ok(self.socles.remove(&position))
    }

    /// Destroy only the actor at `position`, leaving a stale marker behind.
    pub fn break_actor(&mut self, position: BlockPos) -> Option<SocleState> {
        let removed = self.socles.remove(&position);
        if removed.is_some() {
            debug!(%position, "Socle actor destroyed, marker kept");
        }
        removed
    }

    // -------------------------------------------------------------------
    // Content
    // -------------------------------------------------------------------

    /// Put `item` on the socle at `position`, returning what it held before.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::SocleNotFound`] if no actor exists there.
    pub fn insert_item(
        &mut self,
        position: BlockPos,
        item: ItemStack,
    ) -> Result<Option<ItemStack>, WorldError> {
        let socle = self
            .socles
            .get_mut(&position)
            .ok_or(WorldError::SocleNotFound(position))?;
        Ok(socle.item.replace(item))
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// Get the socle actor at `position`.
    pub fn socle(&self, position: BlockPos) -> Option<&SocleState> {
        self.socles.get(&position)
    }

    /// Number of markers, stale ones included.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Number of live socle actors.
    pub fn socle_count(&self) -> usize {
        self.socles.len()
    }

    /// Iterate over all live socles.
    pub fn socles(&self) -> impl Iterator<Item = (&BlockPos, &SocleState)> {
        self.socles.iter()
    }

    // -------------------------------------------------------------------
    // Tick
    // -------------------------------------------------------------------

    /// Advance every socle's extraction by one tick.
    pub fn tick(&mut self) {
        for socle in self.socles.values_mut() {
            socle.tick();
        }
    }
}

impl SpatialIndex for SocleWorld {
    fn query_markers(
        &self,
        center: BlockPos,
        radius: u32,
        same_elevation_only: bool,
    ) -> Vec<BlockPos> {
        let radius = f64::from(radius);
        self.markers
            .keys()
            .copied()
            .filter(|pos| !same_elevation_only || pos.y == center.y)
            .filter(|pos| geometry::distance(*pos, center) <= radius)
            .collect()
    }

    fn socle_type(&self, position: BlockPos) -> Option<SocleType> {
        self.markers.get(&position).copied()
    }
}

impl ActorResolver for SocleWorld {
    fn resolve(&self, position: BlockPos) -> Option<&dyn ParticipantActor> {
        self.socles
            .get(&position)
            .map(|socle| socle as &dyn ParticipantActor)
    }

    fn resolve_mut(&mut self, position: BlockPos) -> Option<&mut dyn ParticipantActor> {
        self.socles
            .get_mut(&position)
            .map(|socle| socle as &mut dyn ParticipantActor)
    }
}
