//! Frame drawing
//!
//! Draws in a fixed order: clear, background (when present), paddle,
//! ball, life counter, alive bricks, and on terminal states the overlay
//! text. Per-frame text textures are created from rendered surfaces and
//! dropped before the next frame.

use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};

use crate::consts::*;
use crate::sim::{brick_rect, GamePhase, GameState, Rect};

const MESSAGE_YOU_WIN: &str = " You Win!!! ";
const MESSAGE_GAME_OVER: &str = " Game Over ";
const MESSAGE_DISMISS: &str = " Press any key to exit ";

const CLEAR_COLOR: Color = Color::RGB(0, 0, 0);
/// Paddle, ball and text are drawn black over the background image
const FOREGROUND: Color = Color::RGB(0, 0, 0);
const BRICK_EVEN: Color = Color::RGB(255, 192, 203);
const BRICK_ODD: Color = Color::RGB(180, 210, 255);

/// Alternating two-color fill keyed by index parity
pub fn brick_color(index: usize) -> Color {
    if index % 2 == 0 {
        BRICK_EVEN
    } else {
        BRICK_ODD
    }
}

fn to_sdl(rect: Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(rect.x as i32, rect.y as i32, rect.w as u32, rect.h as u32)
}

/// Draw one frame of the play field
pub fn draw_frame(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    background: Option<&Texture>,
    state: &GameState,
) -> Result<(), String> {
    canvas.set_draw_color(CLEAR_COLOR);
    canvas.clear();

    if let Some(bg) = background {
        canvas.copy(bg, None, None)?;
    }

    canvas.set_draw_color(FOREGROUND);
    canvas.fill_rect(to_sdl(state.paddle.rect()))?;
    canvas.fill_rect(to_sdl(state.ball.rect()))?;

    // Life counter, right/bottom anchored
    draw_text_anchored(
        canvas,
        texture_creator,
        font,
        &state.lives.to_string(),
        (PLAY_WIDTH / 2.0) as i32 + FONT_SIZE as i32 / 2,
        FONT_SIZE as i32 * 3 / 2,
    )?;

    for i in 0..BRICK_COUNT {
        if state.bricks.is_alive(i) {
            canvas.set_draw_color(brick_color(i));
            canvas.fill_rect(to_sdl(brick_rect(i)))?;
        }
    }

    Ok(())
}

/// Draw the terminal-state message and the dismiss prompt
pub fn draw_overlay(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    state: &GameState,
) -> Result<(), String> {
    let message = match state.phase {
        GamePhase::Won => MESSAGE_YOU_WIN,
        _ => MESSAGE_GAME_OVER,
    };

    draw_text_offset(canvas, texture_creator, font, message, 2.0)?;
    draw_text_offset(canvas, texture_creator, font, MESSAGE_DISMISS, 1.5)?;

    Ok(())
}

/// Render text with its rectangle anchored at (x - w, y - h)
fn draw_text_anchored(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    text: &str,
    x: i32,
    y: i32,
) -> Result<(), String> {
    let surface = font
        .render(text)
        .solid(FOREGROUND)
        .map_err(|e| e.to_string())?;
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;

    let dest = sdl2::rect::Rect::new(
        x - surface.width() as i32,
        y - surface.height() as i32,
        surface.width(),
        surface.height(),
    );
    canvas.copy(&texture, None, Some(dest))
}

/// Render text positioned at ((W - w) / divisor, (H - h) / divisor);
/// divisor 2.0 centers it.
fn draw_text_offset(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    text: &str,
    divisor: f32,
) -> Result<(), String> {
    let surface = font
        .render(text)
        .solid(FOREGROUND)
        .map_err(|e| e.to_string())?;
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;

    let dest = sdl2::rect::Rect::new(
        ((PLAY_WIDTH - surface.width() as f32) / divisor) as i32,
        ((PLAY_HEIGHT - surface.height() as f32) / divisor) as i32,
        surface.width(),
        surface.height(),
    );
    canvas.copy(&texture, None, Some(dest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_colors_alternate() {
        assert_eq!(brick_color(0), BRICK_EVEN);
        assert_eq!(brick_color(1), BRICK_ODD);
        assert_eq!(brick_color(76), BRICK_EVEN);
    }

    #[test]
    fn test_to_sdl_truncates() {
        let r = to_sdl(Rect::new(10.9, -0.5, 53.0, 20.0));
        assert_eq!(r.x(), 10);
        assert_eq!(r.y(), 0);
        assert_eq!(r.width(), 53);
        assert_eq!(r.height(), 20);
    }
}
