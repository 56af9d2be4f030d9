//! Game state and core simulation types
//!
//! `GameState` is the single owner of every entity. Input never touches the
//! fields directly; it goes through the intent operations defined here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::clamp_paddle_x;
use crate::config::GameConfig;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// Ball parked at arena center, waiting for the first input
    #[default]
    NotStarted,
    /// Active gameplay
    Playing,
    /// Ball passed below the paddle
    Over,
}

impl SessionState {
    /// Whether the caller should keep scheduling frames
    pub fn keeps_ticking(&self) -> bool {
        !matches!(self, SessionState::Over)
    }
}

/// Fixed play area, captured once at session start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Size the arena as a fraction of the viewport
    pub fn from_viewport(viewport_width: f32, viewport_height: f32, fraction: f32) -> Self {
        Self::new(viewport_width * fraction, viewport_height * fraction)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at rest in the middle of the arena
    pub fn centered(arena: &Arena, radius: f32) -> Self {
        Self {
            pos: arena.center(),
            vel: Vec2::ZERO,
            radius,
        }
    }
}

/// The player's paddle. `x` is the left edge, `y` the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal displacement per frame
    pub velocity: f32,
}

impl Paddle {
    /// Paddle centered horizontally, resting `bottom_margin` above the floor
    pub fn centered(arena: &Arena, width: f32, height: f32, bottom_margin: f32) -> Self {
        Self {
            x: clamp_paddle_x(arena.width / 2.0 - width / 2.0, arena.width, width),
            y: arena.height - height - bottom_margin,
            width,
            height,
            velocity: 0.0,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Shift by `dx` and keep the paddle inside the arena
    pub fn shift(&mut self, dx: f32, arena_width: f32) {
        self.x = clamp_paddle_x(self.x + dx, arena_width, self.width);
    }
}

/// Renderable view of one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball_x: f32,
    pub ball_y: f32,
    pub paddle_x: f32,
    pub paddle_y: f32,
    pub score: u32,
    pub session: SessionState,
}

impl Snapshot {
    /// Restart control is only offered once the run has ended
    pub fn show_restart(&self) -> bool {
        self.session == SessionState::Over
    }

    /// HUD score text
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub session: SessionState,
    /// Paddle deflections this run
    pub score: u32,
    /// Frames advanced while Playing
    pub time_ticks: u64,
}

impl GameState {
    /// New session with the reference constants
    pub fn new(arena: Arena) -> Self {
        Self::with_config(arena, GameConfig::default())
    }

    pub fn with_config(arena: Arena, config: GameConfig) -> Self {
        Self {
            config,
            arena,
            ball: Ball::centered(&arena, config.ball_radius),
            paddle: Paddle::centered(
                &arena,
                config.paddle_width,
                config.paddle_height,
                config.paddle_bottom_margin,
            ),
            session: SessionState::NotStarted,
            score: 0,
            time_ticks: 0,
        }
    }

    /// Launch the ball. Only has an effect from NotStarted.
    pub fn start_playing(&mut self) {
        if self.session != SessionState::NotStarted {
            return;
        }
        self.ball.vel = self.config.launch_velocity;
        self.session = SessionState::Playing;
        log::info!(
            "Play started, ball velocity ({}, {})",
            self.ball.vel.x,
            self.ball.vel.y
        );
    }

    /// Reset every entity and the score, back to NotStarted
    pub fn restart(&mut self) {
        let final_score = self.score;
        *self = Self::with_config(self.arena, self.config);
        log::info!("Restarted (previous score: {})", final_score);
    }

    /// Set the paddle's per-frame displacement. Takes effect while Playing.
    pub fn set_paddle_velocity(&mut self, velocity: f32) {
        self.paddle.velocity = velocity;
    }

    /// Move the paddle directly, starting play if it hasn't begun
    pub fn move_paddle_by(&mut self, dx: f32) {
        self.paddle.shift(dx, self.arena.width);
        if self.session == SessionState::NotStarted {
            self.start_playing();
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_x: self.ball.pos.x,
            ball_y: self.ball.pos.y,
            paddle_x: self.paddle.x,
            paddle_y: self.paddle.y,
            score: self.score,
            session: self.session,
        }
    }
}
