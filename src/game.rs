//! Session driver
//!
//! `Game` is what a presentation layer talks to: it forwards raw events
//! through the input adapter and calls the simulation once per frame.

use crate::config::GameConfig;
use crate::input::{Direction, InputAdapter};
use crate::sim::{Arena, GameState, Snapshot, advance};

/// One play session
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    input: InputAdapter,
}

impl Game {
    pub fn new(arena: Arena) -> Self {
        Self::with_config(arena, GameConfig::default())
    }

    pub fn with_config(arena: Arena, config: GameConfig) -> Self {
        log::info!("New session, arena {}x{}", arena.width, arena.height);
        Self {
            state: GameState::with_config(arena, config),
            input: InputAdapter::new(config.key_speed),
        }
    }

    /// Size the arena from the viewport snapshot taken at session start
    pub fn from_viewport(viewport_width: f32, viewport_height: f32, config: GameConfig) -> Self {
        let arena = Arena::from_viewport(viewport_width, viewport_height, config.viewport_fraction);
        Self::with_config(arena, config)
    }

    /// Advance one display frame
    pub fn tick(&mut self) -> Snapshot {
        self.apply_pending();
        advance(&mut self.state)
    }

    pub fn on_directional_key_down(&mut self, direction: Direction) {
        self.input.key_down(direction);
        self.apply_pending();
    }

    pub fn on_directional_key_up(&mut self, direction: Direction) {
        self.input.key_up(direction);
        self.apply_pending();
    }

    /// Route a raw key name; non-directional keys are ignored
    pub fn on_key_down(&mut self, key: &str) {
        if let Some(direction) = Direction::from_key(key) {
            self.on_directional_key_down(direction);
        }
    }

    pub fn on_key_up(&mut self, key: &str) {
        if let Some(direction) = Direction::from_key(key) {
            self.on_directional_key_up(direction);
        }
    }

    pub fn on_touch_start(&mut self, client_x: f32) {
        self.input.touch_start(client_x);
        self.apply_pending();
    }

    pub fn on_touch_move(&mut self, client_x: f32) {
        self.input.touch_move(client_x);
        self.apply_pending();
    }

    pub fn on_restart_requested(&mut self) {
        self.input.restart();
        self.apply_pending();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    fn apply_pending(&mut self) {
        for intent in self.input.drain() {
            intent.apply(&mut self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SessionState;

    fn game() -> Game {
        Game::new(Arena::new(800.0, 600.0))
    }

    #[test]
    fn test_idle_until_directional_key() {
        let mut game = game();
        game.on_key_down(" ");
        let snap = game.tick();
        assert_eq!(snap.session, SessionState::NotStarted);
        assert_eq!((snap.ball_x, snap.ball_y), (400.0, 300.0));

        game.on_key_down("ArrowRight");
        assert_eq!(game.snapshot().session, SessionState::Playing);
        assert_eq!(game.state().paddle.velocity, 5.0);
    }

    #[test]
    fn test_key_release_stops_paddle() {
        let mut game = game();
        game.on_directional_key_down(Direction::Left);
        game.tick();
        assert_eq!(game.snapshot().paddle_x, 345.0);

        game.on_directional_key_up(Direction::Left);
        game.tick();
        assert_eq!(game.snapshot().paddle_x, 345.0);
    }

    #[test]
    fn test_touch_starts_and_drags() {
        let mut game = game();
        game.on_touch_start(200.0);
        assert_eq!(game.snapshot().session, SessionState::Playing);

        game.on_touch_move(260.0);
        assert_eq!(game.snapshot().paddle_x, 410.0);

        game.on_touch_move(-10_000.0);
        assert_eq!(game.snapshot().paddle_x, 0.0);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut game = game();
        game.on_directional_key_down(Direction::Left);
        let mut frames = 0;
        while game.tick().session.keeps_ticking() {
            frames += 1;
            assert!(frames < 10_000, "run never ended");
        }
        assert!(game.snapshot().show_restart());

        game.on_restart_requested();
        assert_eq!(game.snapshot(), Game::new(Arena::new(800.0, 600.0)).snapshot());
        assert_eq!(game.state().paddle.velocity, 0.0);
    }

    #[test]
    fn test_from_viewport_scales_arena() {
        let game = Game::from_viewport(1000.0, 800.0, GameConfig::default());
        let arena = game.state().arena;
        assert!((arena.width - 900.0).abs() < 0.01);
        assert!((arena.height - 720.0).abs() < 0.01);
        assert!((game.snapshot().ball_x - 450.0).abs() < 0.01);
    }
}
