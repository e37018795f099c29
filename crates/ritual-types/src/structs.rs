//! Core data structs shared across the ritual engine.
//!
//! [`RitualConfiguration`] is the output of a socle scan and the input to
//! the ritual scheduler. It is built once per ritual attempt and never
//! mutated afterwards; the scheduler only fixes the socle order once, at
//! ritual start, by rebuilding it from its parts.

use serde::{Deserialize, Serialize};

/// An integer block position in the world.
///
/// Used for ritual cores, socles, and scan centers alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    /// East-west coordinate.
    pub x: i32,
    /// Vertical coordinate (elevation).
    pub y: i32,
    /// North-south coordinate.
    pub z: i32,
}

impl BlockPos {
    /// The world origin.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Create a position from its coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Return this position shifted by the given deltas, saturating at the
    /// coordinate bounds.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            z: self.z.saturating_add(dz),
        }
    }
}

impl core::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A stack of identical items held by a socle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item identifier, e.g. `"amethyst_shard"`.
    pub item: String,
    /// Number of items in the stack.
    pub count: u32,
}

impl ItemStack {
    /// Create a stack of `count` items.
    pub fn new(item: impl Into<String>, count: u32) -> Self {
        Self {
            item: item.into(),
            count,
        }
    }

    /// A stack is empty when it holds no items.
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// One socle discovered by a scan, with its distance metrics.
///
/// Entries refer to socles by position only. The socle itself may be
/// removed between ticks, so it is looked up again whenever it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SocleEntry {
    /// Position of the socle.
    pub position: BlockPos,
    /// Average distance to every other retained socle (0 when alone).
    pub mean_distance: f64,
    /// Distance to the nearest other retained socle (`f64::MAX` when alone).
    pub min_distance: f64,
    /// Distance to the ritual center.
    pub core_distance: f64,
}

/// The scanned, scored snapshot of socles used to drive one ritual run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RitualConfiguration {
    stability: f64,
    length: u32,
    socles: Vec<SocleEntry>,
}

impl RitualConfiguration {
    /// Assemble a configuration from its parts.
    pub const fn new(stability: f64, length: u32, socles: Vec<SocleEntry>) -> Self {
        Self {
            stability,
            length,
            socles,
        }
    }

    /// A configuration with no socles and zero length.
    pub const fn empty() -> Self {
        Self::new(0.0, 0, Vec::new())
    }

    /// Stability score. Roughly 0-100 but not clamped.
    pub const fn stability(&self) -> f64 {
        self.stability
    }

    /// Ritual duration in ticks.
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// The socles in activation order.
    pub fn socles(&self) -> &[SocleEntry] {
        &self.socles
    }

    /// Number of socles taking part.
    pub fn len(&self) -> usize {
        self.socles.len()
    }

    /// Whether the scan found no eligible socles.
    pub fn is_empty(&self) -> bool {
        self.socles.is_empty()
    }

    /// Decompose into `(stability, length, socles)`.
    pub fn into_parts(self) -> (f64, u32, Vec<SocleEntry>) {
        (self.stability, self.length, self.socles)
    }
}
