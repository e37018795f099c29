//! Enumeration types for the ritual engine.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Socle types
// ---------------------------------------------------------------------------

/// The material tier of a ritual socle.
///
/// Each tier carries a signed stability modifier. When a socle passes the
/// placement checks during a scan, the ritual stability approaches 100 by
/// that fraction of the remaining headroom: `s += (100 - s) * m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocleType {
    /// Rough stone socle. Contributes nothing to stability.
    Humble,
    /// Polished socle with a small stabilizing effect.
    Refined,
    /// Inlaid socle with a strong stabilizing effect.
    Sophisticated,
    /// Cracked socle that pulls stability away from 100.
    Cracked,
}

impl SocleType {
    /// Return the stability modifier applied for a well-placed socle of
    /// this type.
    pub const fn stability_modifier(self) -> f64 {
        match self {
            Self::Humble => 0.0,
            Self::Refined => 0.075,
            Self::Sophisticated => 0.15,
            Self::Cracked => -0.1,
        }
    }
}

// ---------------------------------------------------------------------------
// Start outcomes
// ---------------------------------------------------------------------------

/// Result of asking a ritual core to start a ritual.
///
/// Callers distinguish "nothing to do" from "explicitly refused" so that
/// user-facing feedback can differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartOutcome {
    /// The ritual started; the core is now running.
    Started,
    /// A ritual was already running, or the ritual's start hook declined
    /// the scanned configuration.
    Rejected,
    /// The scan found no eligible socles.
    NoTarget,
}

impl StartOutcome {
    /// Whether the core transitioned into the running state.
    pub const fn is_started(self) -> bool {
        matches!(self, Self::Started)
    }
}
