//! The demo socle layout the engine runs against.
//!
//! Four loaded socles in a tight diamond around the core, plus an empty
//! socle and a stale marker that the scan has to ignore.

use ritual_types::{BlockPos, ItemStack, SocleType};
use ritual_world::{SocleWorld, WorldError};
use tracing::info;

/// Position of the demo ritual core.
pub const CORE_POSITION: BlockPos = BlockPos::ORIGIN;

/// Position of a second core with no socles in range.
pub const ISOLATED_CORE_POSITION: BlockPos = BlockPos::new(100, 0, 100);

/// Minimum stability the demo infusion accepts.
pub const MIN_STABILITY: f64 = 50.0;

/// Loaded socles: offset from the core, type, and ingredient.
const LOADED: [(i32, i32, SocleType, &str); 4] = [
    (2, 0, SocleType::Refined, "ember_shard"),
    (-2, 0, SocleType::Humble, "river_clay"),
    (0, 2, SocleType::Sophisticated, "moonpetal"),
    (0, -2, SocleType::Refined, "ash_bark"),
];

/// Build the demo world.
///
/// # Errors
///
/// Returns [`WorldError`] if two socles are placed on the same position.
pub fn build_world() -> Result<SocleWorld, WorldError> {
    let mut world = SocleWorld::new();

    for &(dx, dz, socle_type, item) in &LOADED {
        world.place_loaded_socle(CORE_POSITION.offset(dx, 0, dz), socle_type, ItemStack::new(item, 1))?;
    }

    // Present but empty, so it is skipped by the scan.
    world.place_socle(CORE_POSITION.offset(-2, 0, -2), SocleType::Humble)?;

    // Marker left behind by a destroyed socle.
    let stale = CORE_POSITION.offset(2, 0, -2);
    world.place_loaded_socle(stale, SocleType::Cracked, ItemStack::new("void_dust", 1))?;
    world.break_actor(stale);

    info!(
        markers = world.marker_count(),
        socles = world.socle_count(),
        "Demo world built"
    );
    Ok(world)
}
