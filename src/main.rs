//! Fruitfall entry point
//!
//! Headless demo: runs a seeded session against the built-in physics
//! backend with a scripted pointer, logging merges and the final score.
//! Useful for eyeballing the simulation without any renderer attached.

use fruitfall::consts::SIM_DT;
use fruitfall::sim::{GameEvent, GameState, TickInput, tick};
use fruitfall::{CircleWorld, PhysicsBridge, Tuning};

fn main() {
    env_logger::init();

    let seed = std::env::var("FRUITFALL_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xF00D);
    log::info!("fruitfall demo starting, seed {seed}");

    let tuning = Tuning::default();
    let mut world = CircleWorld::new(&tuning);
    world.set_ceiling_sensor(tuning.ceiling_rect());
    let mut state = GameState::new(seed, tuning);

    // Two minutes of play: sweep the pointer across the field and release
    // whenever the dropper is armed.
    let total_ticks = 120 * 120;
    for n in 0..total_ticks {
        let t = n as f32 * SIM_DT;
        let pointer = 300.0 + 250.0 * (t * 0.7).sin();
        let input = TickInput {
            pointer_x: Some(pointer),
            release: state.dropper.is_some() && n % 90 == 0,
            restart: false,
        };
        tick(&mut state, &mut world, &input, SIM_DT);

        for event in state.take_events() {
            match event {
                GameEvent::Dropped { kind, pos } => {
                    log::debug!("dropped rank {} at x {:.0}", kind.rank, pos.x)
                }
                GameEvent::Merged { result, .. } => match result {
                    Some(kind) => log::info!("merged into rank {}", kind.rank),
                    None => log::info!("terminal pair annihilated"),
                },
                GameEvent::GameOver => log::info!("game over"),
                GameEvent::Restarted => log::info!("restarted"),
            }
        }

        if state.game_over() {
            break;
        }
    }

    println!(
        "seed {seed}: score {}, {} fruits on the board after {} ticks{}",
        state.score,
        state.fruits.len(),
        state.time_ticks,
        if state.game_over() { " (game over)" } else { "" }
    );
}
