//! Paddle Drop entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively this runs a headless session on autopilot, which is handy for
//! checking the simulation loop end to end.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use paddle_drop::GameConfig;
    use paddle_drop::game::Game;
    use paddle_drop::input::{Direction, autopilot};

    env_logger::init();
    log::info!("Paddle Drop (native) starting...");

    // Usage: paddle-drop [config.json] [max_frames]
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };
    let max_frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10_000);

    let mut game = Game::from_viewport(1280.0, 720.0, config);
    let mut held: Option<Direction> = None;
    // Any directional key starts play
    game.on_directional_key_down(Direction::Right);
    game.on_directional_key_up(Direction::Right);

    let mut frames = 0;
    let snapshot = loop {
        let wanted = autopilot(game.state());
        if wanted != held {
            if let Some(dir) = held {
                game.on_directional_key_up(dir);
            }
            if let Some(dir) = wanted {
                game.on_directional_key_down(dir);
            }
            held = wanted;
        }

        let snapshot = game.tick();
        frames += 1;
        if !snapshot.session.keeps_ticking() || frames >= max_frames {
            break snapshot;
        }
    };

    println!(
        "{} after {} frames ({:?})",
        snapshot.score_label(),
        frames,
        snapshot.session
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
