//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Ritual cores are addressed by a strongly-typed ID so that a runner
//! driving several cores cannot mix them up with other identifiers.
//! IDs use UUID v7 (time-ordered) so registries iterate in creation order.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a ritual core registered with a runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoreId(Uuid);

impl CoreId {
    /// Create a new identifier using UUID v7 (time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// The underlying [`Uuid`].
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CoreId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "core-{}", self.0.simple())
    }
}

impl From<Uuid> for CoreId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}
