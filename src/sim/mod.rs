//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per frame, no wall-clock time
//! - Single writer: only `GameState` methods and `advance` mutate state
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{WallContact, ball_paddle_overlap, ball_wall_contact, clamp_paddle_x};
pub use state::{Arena, Ball, GameState, Paddle, SessionState, Snapshot};
pub use tick::advance;
