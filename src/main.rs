//! Space Game headless driver
//!
//! Stands in for the windowed front end: feeds the world one tick per frame
//! at the tuned rate, lets a seeded idle-mode bot press the keys, and prints
//! the final object snapshot as JSON.
//!
//! Usage: space-game [tuning.json] [--ticks N] [--seed S]

mod cli;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use space_game::sim::{ControlPatch, Controls, Intent, TickEvent, World};
use space_game::{SimResult, Tuning};

/// Idle-mode bot: holds keys down for a while, then lets go
struct IdleBot {
    rng: Pcg32,
    held: Controls,
}

impl IdleBot {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: Controls::default(),
        }
    }

    /// Key edges for this frame, as the keyboard handler would report them
    fn next_patch(&mut self) -> ControlPatch {
        let mut patch = ControlPatch::none();
        for intent in Intent::ALL {
            // Roughly one press or release per intent every half second
            if self.rng.random_bool(1.0 / 45.0) {
                let active = !self.held.is_active(intent);
                self.held.set(intent, active);
                patch.set(intent, active);
            }
        }
        patch
    }
}

fn run() -> SimResult<()> {
    let args = cli::parse_command_line();
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let dt = tuning.frame_dt();
    let fps = tuning.fps;

    let mut world = World::new(tuning);
    let player = world.spawn_player(Vec2::ZERO)?;
    world.spawn_planet(Vec2::new(-250.0, 180.0), None)?;
    let target = world.spawn_player(Vec2::new(300.0, 0.0))?;
    log::info!(
        "Player {player} in focus, target {target}, seed {}",
        args.seed
    );

    let mut bot = IdleBot::new(args.seed);
    let (mut shots, mut hits, mut respawns) = (0u32, 0u32, 0u32);
    for _ in 0..args.ticks {
        let patch = bot.next_patch();
        for event in world.tick(dt, &patch)? {
            match event {
                TickEvent::Spawned { .. } => shots += 1,
                TickEvent::Hit { .. } => hits += 1,
                TickEvent::Respawned { .. } => respawns += 1,
                TickEvent::Despawned { .. } => {}
            }
        }
        if world.ticks() % fps.max(1.0) as u64 == 0 {
            let view = world.view_offset();
            log::info!(
                "t={:.1}s objects={} view=({:.0}, {:.0})",
                world.clock(),
                world.len(),
                view.x,
                view.y
            );
        }
    }

    log::info!("Done: {shots} shots, {hits} hits, {respawns} respawns");
    println!("{}", serde_json::to_string_pretty(&world.snapshot())?);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Space Game (headless) starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
