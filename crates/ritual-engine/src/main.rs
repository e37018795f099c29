//! Ritual engine binary.
//!
//! Wires the ritual runner to an in-memory demo world and drives it with
//! a fixed-interval tick loop until every ritual has finished or the tick
//! budget runs out.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `$RITUAL_CONFIG` or `ritual-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the demo socle world
//! 4. Register the ritual cores and try to start them
//! 5. Run the tick loop
//! 6. Log the result

mod demo;
mod error;

use std::path::PathBuf;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use ritual_core::{ChangeCounter, InfusionRitual, RitualEngineConfig, RitualRunner};
use ritual_types::CoreId;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Environment variable overriding the config file location.
const CONFIG_ENV: &str = "RITUAL_CONFIG";

/// Config file looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "ritual-config.yaml";

/// Application entry point for the ritual engine.
///
/// # Errors
///
/// Returns an error if configuration, world setup, or core registration
/// fails.
#[tokio::main]
#[allow(clippy::too_many_lines)]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration.
    let config_path = config_path();
    let config = match &config_path {
        Some(path) => RitualEngineConfig::from_file(path)?,
        None => RitualEngineConfig::default(),
    };

    // 2. Initialize structured logging. RUST_LOG wins over the config.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("ritual-engine starting");
    match &config_path {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => info!("Config file not found, using defaults"),
    }
    info!(
        seed = config.engine.seed,
        tick_interval_ms = config.engine.tick_interval_ms,
        max_ticks = config.engine.max_ticks,
        activation_interval = config.schedule.activation_interval,
        search_radius = config.scan.search_radius,
        "Engine configured"
    );

    // 3. Build the demo world.
    let mut world = demo::build_world()?;

    // 4. Register cores and try to start them.
    let mut runner = RitualRunner::new(config.clone());
    let infusion = runner.register(
        demo::CORE_POSITION,
        None,
        Box::new(InfusionRitual::new(demo::MIN_STABILITY)),
    )?;
    let isolated = runner.register(
        demo::ISOLATED_CORE_POSITION,
        None,
        Box::new(InfusionRitual::new(demo::MIN_STABILITY)),
    )?;

    let mut rng = StdRng::seed_from_u64(config.engine.seed);
    let mut notifier = ChangeCounter::new();
    for id in [infusion, isolated] {
        let outcome = runner.try_start(id, &world, &mut rng, &mut notifier)?;
        info!(core_id = %id, ?outcome, "Ritual start attempted");
    }
    persist_changes(&runner, &mut notifier, &[infusion, isolated])?;

    // 5. Run the tick loop.
    let mut interval = tokio::time::interval(Duration::from_millis(
        config.engine.tick_interval_ms.max(1),
    ));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut activations: usize = 0;
    let mut completions: usize = 0;
    while !runner.is_idle() && runner.tick_count() < config.engine.max_ticks {
        interval.tick().await;

        let summary = runner.tick(&mut world, &mut notifier);
        world.tick();

        for (core_id, socle) in &summary.activations {
            debug!(tick = summary.tick, %core_id, %socle, "Socle channelling");
        }
        for record in &summary.completions {
            let duration_ms = record
                .started_at
                .map(|started| record.completed_at.signed_duration_since(started).num_milliseconds());
            info!(
                core_id = %record.core_id,
                position = %record.position,
                world_tick = record.world_tick,
                state_changed = record.state_changed,
                duration_ms,
                "Ritual finished"
            );
        }
        activations = activations.saturating_add(summary.activations.len());
        completions = completions.saturating_add(summary.completions.len());

        persist_changes(&runner, &mut notifier, &[infusion, isolated])?;
    }

    // 6. Log the result.
    if !runner.is_idle() {
        warn!(
            max_ticks = config.engine.max_ticks,
            running = runner.running_count(),
            "Tick budget exhausted, aborting remaining rituals"
        );
        for id in [infusion, isolated] {
            if let Some(configuration) = runner.abort(id, &mut notifier)? {
                info!(core_id = %id, socles = configuration.len(), "Ritual aborted");
            }
        }
        persist_changes(&runner, &mut notifier, &[infusion, isolated])?;
    }

    let remaining = world
        .socles()
        .filter(|(_, socle)| socle.item.is_some())
        .count();
    info!(
        ticks = runner.tick_count(),
        activations,
        completions,
        loaded_socles_remaining = remaining,
        "ritual-engine finished"
    );

    Ok(())
}

/// Resolve the configuration file: `$RITUAL_CONFIG` if set, otherwise
/// `ritual-config.yaml` in the working directory when it exists.
fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    default.exists().then_some(default)
}

/// Serialize the run state of every core when a change was signalled.
///
/// The demo has no storage, so the snapshot is only logged.
fn persist_changes(
    runner: &RitualRunner,
    notifier: &mut ChangeCounter,
    ids: &[CoreId],
) -> Result<(), EngineError> {
    if !notifier.is_dirty() {
        return Ok(());
    }
    for &id in ids {
        if let Some(core) = runner.core(id) {
            let snapshot = serde_json::to_string(core.state())?;
            debug!(core_id = %id, changes = notifier.count(), %snapshot, "Run state persisted");
        }
    }
    notifier.clear();
    Ok(())
}
