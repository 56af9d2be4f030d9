//! Per-frame simulation step
//!
//! Frame-count based: every call moves entities by exactly one frame's
//! velocity, regardless of wall-clock time.

use super::collision::{ball_paddle_overlap, ball_wall_contact};
use super::state::{GameState, SessionState, Snapshot};

/// Advance the game state by one frame and return what to draw.
///
/// NotStarted and Over leave every entity untouched. While Playing the
/// order is: paddle, ball integration, side walls, top wall, paddle, floor.
/// Reflection only flips velocity; the ball is not pushed back out of a
/// wall or the paddle band, so it can overshoot by up to one frame and
/// the paddle check fires again on every frame it stays in the band.
pub fn advance(state: &mut GameState) -> Snapshot {
    if state.session != SessionState::Playing {
        return state.snapshot();
    }

    state.time_ticks += 1;

    let arena_width = state.arena.width;
    let velocity = state.paddle.velocity;
    state.paddle.shift(velocity, arena_width);

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    let contact = ball_wall_contact(ball.pos, ball.radius, &state.arena);
    if contact.side {
        ball.vel.x = -ball.vel.x;
        log::trace!("Side wall bounce at x={}", ball.pos.x);
    }
    if contact.top {
        ball.vel.y = -ball.vel.y;
        log::trace!("Top wall bounce at y={}", ball.pos.y);
    }

    if ball_paddle_overlap(ball.pos, ball.radius, &state.paddle) {
        ball.vel.y = -ball.vel.y;
        state.score += 1;
        log::debug!("Paddle hit at x={}, score {}", ball.pos.x, state.score);
    }

    if contact.bottom {
        state.session = SessionState::Over;
        log::info!(
            "Game over after {} frames, final score {}",
            state.time_ticks,
            state.score
        );
    }

    state.snapshot()
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::state::Arena;

    fn playing_state() -> GameState {
        let mut state = GameState::new(Arena::new(800.0, 600.0));
        state.start_playing();
        state
    }

    #[test]
    fn test_not_started_is_frozen() {
        let mut state = GameState::new(Arena::new(800.0, 600.0));
        state.set_paddle_velocity(5.0);
        let before = state.clone();
        let snap = advance(&mut state);
        assert_eq!(state, before);
        assert_eq!(snap.session, SessionState::NotStarted);
    }

    #[test]
    fn test_ball_and_paddle_integrate() {
        let mut state = playing_state();
        state.set_paddle_velocity(-5.0);
        let snap = advance(&mut state);
        assert_eq!(snap.ball_x, 405.0);
        assert_eq!(snap.ball_y, 307.0);
        assert_eq!(snap.paddle_x, 345.0);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_side_wall_flips_vx_without_repositioning() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(777.0, 300.0);
        state.ball.vel = Vec2::new(5.0, 0.0);
        advance(&mut state);
        // Overshoots to 782 and keeps that position, only the sign flips
        assert_eq!(state.ball.pos.x, 782.0);
        assert_eq!(state.ball.vel.x, -5.0);

        advance(&mut state);
        assert_eq!(state.ball.pos.x, 777.0);
        assert_eq!(state.ball.vel.x, -5.0);
    }

    #[test]
    fn test_left_wall_and_top_wall() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(23.0, 24.0);
        state.ball.vel = Vec2::new(-5.0, -7.0);
        advance(&mut state);
        assert_eq!(state.ball.vel, Vec2::new(5.0, 7.0));
        assert_eq!(state.session, SessionState::Playing);
    }

    #[test]
    fn test_paddle_hit_scores_and_flips() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(400.0, 545.0);
        state.ball.vel = Vec2::new(0.0, 7.0);
        let snap = advance(&mut state);
        assert_eq!(snap.score, 1);
        assert_eq!(state.ball.vel.y, -7.0);
    }

    #[test]
    fn test_miss_ends_run() {
        let mut state = playing_state();
        state.paddle.x = 0.0;
        state.ball.pos = Vec2::new(700.0, 575.0);
        state.ball.vel = Vec2::new(0.0, 7.0);
        let snap = advance(&mut state);
        assert_eq!(snap.session, SessionState::Over);
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn test_paddle_hit_and_floor_in_same_frame() {
        // Ball already below the paddle but inside its span: both checks fire
        let mut state = playing_state();
        state.ball.pos = Vec2::new(400.0, 575.0);
        state.ball.vel = Vec2::new(0.0, 7.0);
        let snap = advance(&mut state);
        assert_eq!(snap.score, 1);
        assert_eq!(state.ball.vel.y, -7.0);
        assert_eq!(snap.session, SessionState::Over);
    }

    #[test]
    fn test_over_is_terminal() {
        let mut state = playing_state();
        state.session = SessionState::Over;
        state.set_paddle_velocity(5.0);
        let before = state.clone();
        for _ in 0..10 {
            advance(&mut state);
        }
        assert_eq!(state, before);
    }
}
