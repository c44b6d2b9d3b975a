//! Game state and core simulation types
//!
//! All mutable gameplay state lives in [`GameState`], which the loop
//! driver owns and passes by reference into the simulation step and the
//! renderer. Nothing in here touches SDL.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// All bricks destroyed
    Won,
    /// Lives exhausted, or quit requested
    Lost,
}

impl GamePhase {
    /// Terminal phases end the main loop
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// The ball: an axis-aligned square with a velocity in pixels per frame
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, BALL_SIZE, BALL_SIZE)
    }
}

/// The player's paddle; only its x coordinate ever changes
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub x: f32,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Keep the paddle inside the horizontal play area
    pub fn clamp(&mut self) {
        self.x = self.x.clamp(0.0, PLAY_WIDTH - PADDLE_WIDTH);
    }
}

/// Fixed 7x11 grid of brick alive flags, addressed by linear index
#[derive(Debug, Clone)]
pub struct BrickGrid {
    alive: [bool; BRICK_COUNT],
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self {
            alive: [true; BRICK_COUNT],
        }
    }
}

impl BrickGrid {
    /// Mark every brick alive again
    pub fn refill(&mut self) {
        self.alive = [true; BRICK_COUNT];
    }

    #[inline]
    pub fn is_alive(&self, index: usize) -> bool {
        self.alive[index]
    }

    /// Destroy a brick; a dead brick stays dead until the next refill
    pub fn destroy(&mut self, index: usize) {
        self.alive[index] = false;
    }

    pub fn alive_count(&self) -> usize {
        self.alive.iter().filter(|a| **a).count()
    }

    pub fn all_cleared(&self) -> bool {
        self.alive.iter().all(|a| !a)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub lives: i32,
    pub phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        let mut state = Self {
            paddle: Paddle { x: 0.0 },
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            },
            bricks: BrickGrid::default(),
            lives: STARTING_LIVES,
            phase: GamePhase::Playing,
        };
        state.full_reset();
        state
    }

    /// Restore bricks, lives, ball and paddle to their initial
    /// configuration. Does not touch the phase; discrete reset input and
    /// the step's own bookkeeping decide that.
    pub fn full_reset(&mut self) {
        self.bricks.refill();
        self.lives = STARTING_LIVES;
        self.paddle.x = PLAY_WIDTH / 2.0 - PADDLE_WIDTH / 2.0;
        self.ball.pos = Vec2::new(
            PLAY_WIDTH / 2.0 - BALL_SIZE / 2.0,
            PADDLE_Y - PADDLE_HEIGHT * 4.0,
        );
        // Downward-biased serve, no horizontal drift
        self.ball.vel = Vec2::new(0.0, BALL_SPEED / 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_reset_invariants() {
        let mut state = GameState::new();
        state.lives = 0;
        state.bricks.destroy(0);
        state.bricks.destroy(42);
        state.paddle.x = -500.0;
        state.ball.vel = Vec2::new(7.0, -3.0);

        state.full_reset();

        assert_eq!(state.bricks.alive_count(), BRICK_COUNT);
        assert_eq!(state.lives, STARTING_LIVES);
        // Paddle re-centered
        assert_eq!(state.paddle.x, PLAY_WIDTH / 2.0 - PADDLE_WIDTH / 2.0);
        // Ball horizontally centered above the paddle, serving downward
        assert_eq!(state.ball.pos.x, PLAY_WIDTH / 2.0 - BALL_SIZE / 2.0);
        assert!(state.ball.pos.y < PADDLE_Y);
        assert_eq!(state.ball.vel.x, 0.0);
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_new_state_starts_playing() {
        let state = GameState::new();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.bricks.alive_count(), BRICK_COUNT);
    }

    #[test]
    fn test_destroyed_brick_stays_dead() {
        let mut grid = BrickGrid::default();
        grid.destroy(5);
        assert!(!grid.is_alive(5));
        grid.destroy(5);
        assert!(!grid.is_alive(5));
        assert_eq!(grid.alive_count(), BRICK_COUNT - 1);
    }

    #[test]
    fn test_all_cleared() {
        let mut grid = BrickGrid::default();
        assert!(!grid.all_cleared());
        for i in 0..BRICK_COUNT {
            grid.destroy(i);
        }
        assert!(grid.all_cleared());
    }

    #[test]
    fn test_paddle_clamp() {
        let mut paddle = Paddle { x: -40.0 };
        paddle.clamp();
        assert_eq!(paddle.x, 0.0);

        paddle.x = PLAY_WIDTH;
        paddle.clamp();
        assert_eq!(paddle.x, PLAY_WIDTH - PADDLE_WIDTH);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::Won.is_terminal());
        assert!(GamePhase::Lost.is_terminal());
    }
}
