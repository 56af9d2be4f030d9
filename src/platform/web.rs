//! wasm-bindgen surface for the browser presentation layer
//!
//! JavaScript calls `tick()` from `requestAnimationFrame` and stops
//! scheduling once it returns `false`; `restart()` resumes the loop.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::Game;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Paddle Drop (web) starting...");
}

/// Game handle owned by the page
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a session sized to the current viewport
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f32, viewport_height: f32) -> WebGame {
        WebGame {
            game: Game::from_viewport(viewport_width, viewport_height, GameConfig::default()),
        }
    }

    /// Create a session from a JSON config, falling back to defaults
    pub fn with_config_json(viewport_width: f32, viewport_height: f32, json: &str) -> WebGame {
        let config = GameConfig::from_json(json).unwrap_or_else(|e| {
            log::warn!("Bad config ({}), using defaults", e);
            GameConfig::default()
        });
        WebGame {
            game: Game::from_viewport(viewport_width, viewport_height, config),
        }
    }

    /// Advance one frame. Returns whether another frame should be scheduled.
    pub fn tick(&mut self) -> bool {
        self.game.tick().session.keeps_ticking()
    }

    pub fn key_down(&mut self, key: &str) {
        self.game.on_key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.game.on_key_up(key);
    }

    pub fn touch_start(&mut self, client_x: f32) {
        self.game.on_touch_start(client_x);
    }

    pub fn touch_move(&mut self, client_x: f32) {
        self.game.on_touch_move(client_x);
    }

    pub fn restart(&mut self) {
        self.game.on_restart_requested();
    }

    // === Render state ===

    #[wasm_bindgen(getter)]
    pub fn arena_width(&self) -> f32 {
        self.game.state().arena.width
    }

    #[wasm_bindgen(getter)]
    pub fn arena_height(&self) -> f32 {
        self.game.state().arena.height
    }

    #[wasm_bindgen(getter)]
    pub fn ball_x(&self) -> f32 {
        self.game.state().ball.pos.x
    }

    #[wasm_bindgen(getter)]
    pub fn ball_y(&self) -> f32 {
        self.game.state().ball.pos.y
    }

    #[wasm_bindgen(getter)]
    pub fn ball_radius(&self) -> f32 {
        self.game.state().ball.radius
    }

    #[wasm_bindgen(getter)]
    pub fn paddle_x(&self) -> f32 {
        self.game.state().paddle.x
    }

    #[wasm_bindgen(getter)]
    pub fn paddle_y(&self) -> f32 {
        self.game.state().paddle.y
    }

    #[wasm_bindgen(getter)]
    pub fn paddle_width(&self) -> f32 {
        self.game.state().paddle.width
    }

    #[wasm_bindgen(getter)]
    pub fn paddle_height(&self) -> f32 {
        self.game.state().paddle.height
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.game.state().score
    }

    #[wasm_bindgen(getter)]
    pub fn score_label(&self) -> String {
        self.game.snapshot().score_label()
    }

    #[wasm_bindgen(getter)]
    pub fn show_restart(&self) -> bool {
        self.game.snapshot().show_restart()
    }

    /// Full frame as JSON, for debugging overlays
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.game.snapshot()).unwrap_or_default()
    }
}
