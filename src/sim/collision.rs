//! Collision checks for the rectangular arena
//!
//! Everything is axis-aligned: the ball is tested as a circle against the
//! arena edges and as a point against the paddle's horizontal span.

use glam::Vec2;

use super::state::{Arena, Paddle};

/// Walls the ball touched this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right wall
    pub side: bool,
    pub top: bool,
    /// Floor - the run ends here
    pub bottom: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.top || self.bottom
    }
}

/// Clamp a paddle's left edge to `[0, arena_width - paddle_width]`.
/// An arena narrower than the paddle pins it to 0.
#[inline]
pub fn clamp_paddle_x(x: f32, arena_width: f32, paddle_width: f32) -> f32 {
    let max_x = (arena_width - paddle_width).max(0.0);
    x.clamp(0.0, max_x)
}

/// Check a ball against the arena edges (inclusive at the radius)
pub fn ball_wall_contact(pos: Vec2, radius: f32, arena: &Arena) -> WallContact {
    WallContact {
        side: pos.x <= radius || pos.x >= arena.width - radius,
        top: pos.y <= radius,
        bottom: pos.y >= arena.height - radius,
    }
}

/// Check whether the ball is in the paddle's deflection band.
///
/// The band is everything at or below `paddle.y - radius` whose x lies within
/// the paddle's span. It does not consider the direction of travel.
pub fn ball_paddle_overlap(pos: Vec2, radius: f32, paddle: &Paddle) -> bool {
    pos.y >= paddle.y - radius && paddle.x <= pos.x && pos.x <= paddle.right()
}
