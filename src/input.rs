//! Input handling
//!
//! Raw key and touch events become `Intent`s. The adapter never touches game
//! state; it only queues intents for the state owner to apply.

use std::collections::VecDeque;

use crate::sim::{GameState, SessionState};

/// Horizontal direction from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// An input-derived instruction for the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Begin play (ignored unless NotStarted)
    Start,
    /// Set paddle displacement per frame
    SetPaddleVelocity(f32),
    /// Move the paddle immediately
    MovePaddleBy(f32),
    Restart,
}

impl Intent {
    /// Apply to the state owner
    pub fn apply(self, state: &mut GameState) {
        match self {
            Intent::Start => state.start_playing(),
            Intent::SetPaddleVelocity(v) => state.set_paddle_velocity(v),
            Intent::MovePaddleBy(dx) => state.move_paddle_by(dx),
            Intent::Restart => state.restart(),
        }
    }
}

/// Translates key/touch events into queued intents
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    /// Paddle speed while a direction key is held
    key_speed: f32,
    /// Last seen touch x, for drag deltas
    touch_anchor: Option<f32>,
    pending: VecDeque<Intent>,
}

impl InputAdapter {
    pub fn new(key_speed: f32) -> Self {
        Self {
            key_speed,
            touch_anchor: None,
            pending: VecDeque::new(),
        }
    }

    pub fn key_down(&mut self, direction: Direction) {
        self.pending.push_back(Intent::Start);
        self.pending
            .push_back(Intent::SetPaddleVelocity(direction.sign() * self.key_speed));
    }

    /// Releasing either direction stops the paddle
    pub fn key_up(&mut self, _direction: Direction) {
        self.pending.push_back(Intent::SetPaddleVelocity(0.0));
    }

    pub fn touch_start(&mut self, client_x: f32) {
        self.pending.push_back(Intent::Start);
        self.touch_anchor = Some(client_x);
    }

    /// Drag the paddle by the distance moved since the last touch event
    pub fn touch_move(&mut self, client_x: f32) {
        if let Some(anchor) = self.touch_anchor {
            self.pending.push_back(Intent::MovePaddleBy(client_x - anchor));
        }
        self.touch_anchor = Some(client_x);
    }

    pub fn restart(&mut self) {
        self.touch_anchor = None;
        self.pending.push_back(Intent::Restart);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take all queued intents in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = Intent> + '_ {
        self.pending.drain(..)
    }
}

/// Pick a key direction that keeps the paddle under the ball.
///
/// Returns `None` inside a dead zone of one key step around the ball, or
/// when there is nothing to chase.
pub fn autopilot(state: &GameState) -> Option<Direction> {
    if state.session == SessionState::Over {
        return None;
    }
    let offset = state.ball.pos.x - state.paddle.center_x();
    let dead_zone = state.config.key_speed;
    if offset > dead_zone {
        Some(Direction::Right)
    } else if offset < -dead_zone {
        Some(Direction::Left)
    } else {
        None
    }
}
