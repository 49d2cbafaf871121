//! Flap Sim entry point
//!
//! Native builds run a headless autopilot session and log how it went. The
//! web build is driven from JavaScript through `platform::web::WebEngine`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flap_sim::persistence::MemoryStorage;
    use flap_sim::platform::{clamp_frame_dt, init_logging};
    use flap_sim::{Engine, GameEvent, SessionRecorder, Settings};

    /// Frame rate of the simulated display
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Give up after this many simulated seconds
    const MAX_SECONDS: f32 = 120.0;

    init_logging();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);
    log::info!("Flap Sim (native) starting with seed {}", seed);

    let mut storage = MemoryStorage::new();
    let mut recorder = SessionRecorder::load(&storage);
    let mut engine = Engine::new(
        flap_sim::consts::DEFAULT_WORLD_WIDTH,
        flap_sim::consts::DEFAULT_WORLD_HEIGHT,
        seed,
    );
    Settings::load(&storage).apply(&mut engine);

    let mut elapsed = 0.0;
    while engine.is_alive() && elapsed < MAX_SECONDS {
        if autopilot_wants_flap(&engine) {
            engine.flap();
        }
        engine.update(clamp_frame_dt(FRAME_DT));
        elapsed += FRAME_DT;

        for event in engine.drain_events() {
            match event {
                GameEvent::ObstaclePassed { score } => log::debug!("Score: {}", score),
                GameEvent::Died { score } => {
                    let record = recorder.record_death(score, &mut storage);
                    log::info!(
                        "Run over after {:.1}s: score {}, rank {:?}, new best {}",
                        elapsed,
                        record.score,
                        record.rank,
                        record.new_best
                    );
                    for &index in &record.newly_unlocked {
                        log::info!(
                            "Character {} unlocked: {}",
                            index,
                            flap_sim::unlocks::description(index as usize).unwrap_or("")
                        );
                    }
                }
                _ => {}
            }
        }
    }

    if engine.is_alive() {
        log::info!("Autopilot survived {:.0}s with score {}", elapsed, engine.score());
    }
    println!("{}", engine.render_state().to_json());
}

/// Flap when falling below the center of the next gap
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_flap(engine: &flap_sim::Engine) -> bool {
    let player = engine.player();
    let target = engine
        .obstacles()
        .iter()
        .find(|o| o.x + o.width >= player.pos.x - flap_sim::consts::PLAYER_HITBOX / 2.0)
        .map(|o| (o.top_height + o.bottom_y) / 2.0)
        .unwrap_or(engine.world_height() as f32 * 0.5);
    player.vel_y >= 0.0 && player.pos.y > target + 15.0
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::WebEngine, this is just to satisfy the compiler
}
