//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per frame, fixed order
//! - Brick geometry recomputed from the index, never stored
//! - No rendering or platform dependencies

pub mod grid;
pub mod rect;
pub mod state;
pub mod tick;

pub use grid::brick_rect;
pub use rect::Rect;
pub use state::{Ball, BrickGrid, GamePhase, GameState, Paddle};
pub use tick::{tick, TickInput};
