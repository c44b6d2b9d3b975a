//! Per-frame simulation step
//!
//! Advances the whole game by one frame: discrete input, paddle
//! movement, collision resolution, position integration and win/loss
//! bookkeeping, in a fixed order. The step runs unconditionally every
//! frame; the loop driver decides when a terminal phase ends the game.

use super::grid::brick_rect;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input sampled once per frame by the platform layer
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left arrow held
    pub move_left: bool,
    /// Right arrow held
    pub move_right: bool,
    /// Space pressed: full reset, back to Playing from any phase
    pub reset: bool,
    /// Escape pressed or window closed
    pub quit: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Discrete events first, then held keys - the sampler's drain order
    if input.reset {
        state.full_reset();
        state.phase = GamePhase::Playing;
    }
    if input.quit {
        state.phase = GamePhase::Lost;
    }

    // Movement is unclamped here; the step clamps after integration
    if input.move_left {
        state.paddle.x -= PADDLE_SPEED;
    }
    if input.move_right {
        state.paddle.x += PADDLE_SPEED;
    }

    // Exhausted lives mean the board resets before anything moves
    if state.lives <= 0 {
        state.full_reset();
    }

    paddle_bounce(state);
    wall_bounce(state);

    state.ball.pos += state.ball.vel;
    state.paddle.clamp();

    sweep_bricks(state);

    // Loss takes priority over a simultaneous clear
    if state.lives <= 0 {
        state.phase = GamePhase::Lost;
    } else if state.bricks.all_cleared() {
        state.phase = GamePhase::Won;
    }
}

/// Reflect the ball off the paddle.
///
/// The bounce angle is a function of where the ball struck the paddle:
/// the offset from the paddle center, normalized to [-1, 1] across the
/// half-width, scaled to at most 75 degrees from vertical. Dead-center
/// hits bounce straight up; edge hits shoot off sideways.
fn paddle_bounce(state: &mut GameState) {
    let paddle = state.paddle.rect();
    let ball = state.ball.rect();

    if ball.intersects(&paddle) {
        let offset = paddle.center_x() - ball.center_x();
        let norm = offset / (PADDLE_WIDTH / 2.0);
        let angle = norm * MAX_BOUNCE_ANGLE;
        state.ball.vel.y = -BALL_SPEED * angle.cos();
        state.ball.vel.x = -BALL_SPEED * angle.sin();
    }
}

/// Wall collisions. A bottom-wall hit is a miss: the ball bounces back
/// into play, but it costs a life.
fn wall_bounce(state: &mut GameState) {
    let ball = state.ball.rect();

    if ball.y <= 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
    }
    if ball.bottom() >= PLAY_HEIGHT {
        state.ball.vel.y = -state.ball.vel.y;
        state.lives -= 1;
    }
    if ball.x <= 0.0 || ball.right() >= PLAY_WIDTH {
        state.ball.vel.x = -state.ball.vel.x;
    }
}

/// Visit every brick; destroy the ones the ball overlaps.
///
/// Each axis compares ball position against brick position
/// independently and applies a velocity flip plus a fixed nudge. The
/// comparisons read the ball position as the earlier branches left it,
/// so a single hit can flip both axes, and a near-exact x alignment
/// flips x twice (net unchanged). Not a true side-detection algorithm;
/// kept as legacy behavior.
fn sweep_bricks(state: &mut GameState) {
    for i in 0..BRICK_COUNT {
        if !state.bricks.is_alive(i) {
            continue;
        }
        let brick = brick_rect(i);
        if !state.ball.rect().intersects(&brick) {
            continue;
        }
        state.bricks.destroy(i);

        if state.ball.pos.x >= brick.x {
            state.ball.vel.x = -state.ball.vel.x;
            state.ball.pos.x -= BRICK_NUDGE;
        }
        if state.ball.pos.x <= brick.x {
            state.ball.vel.x = -state.ball.vel.x;
            state.ball.pos.x += BRICK_NUDGE;
        }
        if state.ball.pos.y <= brick.y {
            state.ball.vel.y = -state.ball.vel.y;
            state.ball.pos.y -= BRICK_NUDGE;
        }
        if state.ball.pos.y >= brick.y {
            state.ball.vel.y = -state.ball.vel.y;
            state.ball.pos.y += BRICK_NUDGE;
        }
    }
}
