//! Paddle Drop - a single-screen paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (physics, collisions, session state)
//! - `input`: Translates key/touch events into paddle intents
//! - `game`: The surface a presentation layer drives once per frame
//! - `config`: Data-driven game constants
//! - `platform`: Browser bindings (wasm32 only)

pub mod config;
pub mod game;
pub mod input;
pub mod platform;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use input::{Direction, InputAdapter, Intent};

/// Game configuration constants
pub mod consts {
    /// Ball radius
    pub const BALL_RADIUS: f32 = 20.0;
    /// Ball velocity applied when play starts (units per frame)
    pub const BALL_LAUNCH_VX: f32 = 5.0;
    pub const BALL_LAUNCH_VY: f32 = 7.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Gap between the paddle's bottom edge and the arena floor
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    /// Paddle speed while a direction key is held (units per frame)
    pub const PADDLE_KEY_SPEED: f32 = 5.0;

    /// Share of the viewport the arena occupies in each dimension
    pub const VIEWPORT_FRACTION: f32 = 0.9;
}
