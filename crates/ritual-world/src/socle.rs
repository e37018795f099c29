//! The socle participant actor.
//!
//! A socle holds at most one item stack. When a ritual core activates it,
//! the socle enters an extraction state aimed at the core and counts the
//! ticks it has spent channelling. Consuming the content ends the
//! extraction.

use ritual_types::{BlockPos, ItemStack, SocleType};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::access::ParticipantActor;

/// An in-progress extraction toward a ritual core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Position the content is being channelled toward.
    pub target: BlockPos,
    /// Ticks elapsed since the extraction began.
    pub elapsed_ticks: u32,
}

/// Runtime state of a single socle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocleState {
    /// Material tier of the socle.
    pub socle_type: SocleType,
    /// The held item stack.
    pub item: Option<ItemStack>,
    /// Active extraction, if a ritual has activated this socle.
    pub extraction: Option<Extraction>,
}

impl SocleState {
    /// Create an empty socle of the given type.
    pub const fn new(socle_type: SocleType) -> Self {
        Self {
            socle_type,
            item: None,
            extraction: None,
        }
    }

    /// Create a socle that already holds `item`.
    pub const fn with_item(socle_type: SocleType, item: ItemStack) -> Self {
        Self {
            socle_type,
            item: Some(item),
            extraction: None,
        }
    }

    /// Whether the socle is currently channelling toward a core.
    pub const fn is_extracting(&self) -> bool {
        self.extraction.is_some()
    }

    /// Advance extraction progress by one tick.
    pub fn tick(&mut self) {
        if let Some(extraction) = &mut self.extraction {
            extraction.elapsed_ticks = extraction.elapsed_ticks.saturating_add(1);
        }
    }
}

impl ParticipantActor for SocleState {
    fn has_content(&self) -> bool {
        self.item.as_ref().is_some_and(|stack| !stack.is_empty())
    }

    fn content(&self) -> Option<&ItemStack> {
        self.item.as_ref()
    }

    fn take_content(&mut self) -> Option<ItemStack> {
        self.extraction = None;
        self.item.take()
    }

    fn begin_contribution(&mut self, target: BlockPos) {
        debug!(%target, socle_type = ?self.socle_type, "Socle extraction started");
        self.extraction = Some(Extraction {
            target,
            elapsed_ticks: 0,
        });
    }
}
