//! Error types for the `ritual-world` crate.

use ritual_types::BlockPos;

/// Errors that can occur when mutating the socle world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A socle marker already exists at the position.
    #[error("position {0} is already occupied by a socle")]
    PositionOccupied(BlockPos),

    /// No socle exists at the position.
    #[error("no socle at {0}")]
    SocleNotFound(BlockPos),
}
